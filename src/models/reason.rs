use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the wheel diameter was changed. Closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Wheel re-profiled on the lathe (镟轮).
    #[default]
    Turned,
    /// Scheduled 2mm reduction on the 3-month cadence.
    ThreeMonthReduction,
    Other,
}

impl Reason {
    pub const ALL: [Reason; 3] = [Reason::Turned, Reason::ThreeMonthReduction, Reason::Other];

    /// Convert enum → stored string
    pub fn code(&self) -> &'static str {
        match self {
            Reason::Turned => "turned",
            Reason::ThreeMonthReduction => "three_month_reduction",
            Reason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reason::Turned => "镟轮",
            Reason::ThreeMonthReduction => "三个月减少 2mm",
            Reason::Other => "其他",
        }
    }

    /// Helper: convert input from CLI (any case, `-` or `_`, or the sheet label)
    pub fn from_code(code: &str) -> Option<Self> {
        let trimmed = code.trim();

        if let Some(r) = Reason::ALL.iter().find(|r| r.label() == trimmed) {
            return Some(*r);
        }

        match trimmed.to_lowercase().replace('-', "_").as_str() {
            "turned" | "turn" => Some(Reason::Turned),
            "three_month_reduction" | "reduction" | "3m" => Some(Reason::ThreeMonthReduction),
            "other" => Some(Reason::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
