//! ANSI color helper utilities for terminal output.

use crate::models::Reason;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Turned → green, reduction → yellow, other → grey.
pub fn color_for_reason(reason: Reason) -> &'static str {
    match reason {
        Reason::Turned => GREEN,
        Reason::ThreeMonthReduction => YELLOW,
        Reason::Other => GREY,
    }
}

pub fn colorize_reason(reason: Reason) -> String {
    format!("{}{}{}", color_for_reason(reason), reason.code(), RESET)
}
