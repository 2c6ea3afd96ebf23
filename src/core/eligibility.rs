//! Cars due for the 3-month 2mm diameter reduction.

use crate::models::{Line, Reason, WheelRecord};
use crate::utils::date::{first_of_month, months_before};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which reductions count when excluding cars already handled this month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionScope {
    /// Only reductions recorded on the queried line.
    #[default]
    Line,
    /// Reductions on any line (car numbers compared across lines).
    Global,
}

#[derive(Debug, Clone, Copy)]
pub struct EligibilityWindow {
    pub reference: NaiveDate,
    pub lookback_months: u32,
}

impl EligibilityWindow {
    pub fn new(reference: NaiveDate, lookback_months: u32) -> Self {
        Self {
            reference,
            lookback_months,
        }
    }

    /// Turned on or before this day → due.
    pub fn cutoff(&self) -> NaiveDate {
        months_before(self.reference, self.lookback_months)
    }

    pub fn month_start(&self) -> NaiveDate {
        first_of_month(self.reference)
    }
}

/// Turned rows on `line` older than the window, minus cars that already got
/// a reduction since the start of the reference month. Every qualifying row
/// is returned, in stored order.
pub fn eligible_for_reduction(
    records: &[WheelRecord],
    window: EligibilityWindow,
    line: Line,
    scope: ExclusionScope,
) -> Vec<WheelRecord> {
    let cutoff = window.cutoff();
    let month_start = window.month_start();

    let excluded: HashSet<&str> = records
        .iter()
        .filter(|r| r.reason == Reason::ThreeMonthReduction && r.modified_date >= month_start)
        .filter(|r| scope == ExclusionScope::Global || r.line == line)
        .map(|r| r.car_number.as_str())
        .collect();

    records
        .iter()
        .filter(|r| {
            r.line == line
                && r.reason == Reason::Turned
                && r.modified_date <= cutoff
                && !excluded.contains(r.car_number.as_str())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    fn window() -> EligibilityWindow {
        EligibilityWindow::new(reference(), 3)
    }

    fn rec(line: Line, car: &str, days_ago: i64, reason: Reason) -> WheelRecord {
        WheelRecord::new(
            line,
            car,
            845.0,
            reference() - Duration::days(days_ago),
            "wang",
            reason,
        )
    }

    #[test]
    fn old_turned_row_is_due() {
        let records = vec![rec(Line::Line4, "101", 130, Reason::Turned)];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].car_number, "101");
    }

    #[test]
    fn recent_turned_row_is_not_due() {
        let records = vec![rec(Line::Line4, "101", 10, Reason::Turned)];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert!(due.is_empty());
    }

    #[test]
    fn reduction_this_month_excludes_car() {
        let records = vec![
            rec(Line::Line4, "102", 130, Reason::Turned),
            rec(Line::Line4, "102", 5, Reason::ThreeMonthReduction),
        ];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert!(due.is_empty());
    }

    #[test]
    fn reduction_last_month_does_not_exclude() {
        // 2024-05-30 is before the 2024-06-01 month start
        let records = vec![
            rec(Line::Line4, "103", 130, Reason::Turned),
            rec(Line::Line4, "103", 21, Reason::ThreeMonthReduction),
        ];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn cutoff_day_itself_is_due() {
        let mut r = rec(Line::Line4, "104", 0, Reason::Turned);
        r.modified_date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let due = eligible_for_reduction(&[r], window(), Line::Line4, ExclusionScope::Line);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn other_line_and_other_reasons_are_ignored() {
        let records = vec![
            rec(Line::Line5, "101", 130, Reason::Turned),
            rec(Line::Line4, "105", 130, Reason::Other),
            rec(Line::Line4, "106", 130, Reason::ThreeMonthReduction),
        ];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert!(due.is_empty());
    }

    #[test]
    fn scope_decides_cross_line_exclusion() {
        let records = vec![
            rec(Line::Line4, "201", 130, Reason::Turned),
            rec(Line::Line5, "201", 3, Reason::ThreeMonthReduction),
        ];

        let scoped = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert_eq!(scoped.len(), 1);

        let global =
            eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Global);
        assert!(global.is_empty());
    }

    #[test]
    fn every_stale_row_of_a_car_is_returned() {
        let records = vec![
            rec(Line::Line4, "301", 200, Reason::Turned),
            rec(Line::Line4, "301", 130, Reason::Turned),
        ];
        let due = eligible_for_reduction(&records, window(), Line::Line4, ExclusionScope::Line);
        assert_eq!(due.len(), 2);
    }
}
