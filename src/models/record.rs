use super::{line::Line, reason::Reason};
use crate::utils::date::{self, compact_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One wheel diameter measurement. Each row is a historical entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelRecord {
    pub id: u64,                 // ⇔ id (assigned by the store, never rewritten)
    pub line: Line,              // ⇔ line ('L4' | 'L5')
    pub car_number: String,      // ⇔ car_number
    pub wheel_diameter: f64,     // ⇔ wheel_diameter (mm)
    #[serde(with = "compact_date")]
    pub modified_date: NaiveDate, // ⇔ modified_date (TEXT "YYYYMMDD")
    pub modifier: String,        // ⇔ modifier
    pub reason: Reason,          // ⇔ reason ('turned' | 'three_month_reduction' | 'other')
}

impl WheelRecord {
    /// Build a record not yet stored (`id = 0` until the store assigns one).
    pub fn new(
        line: Line,
        car_number: impl Into<String>,
        wheel_diameter: f64,
        modified_date: NaiveDate,
        modifier: impl Into<String>,
        reason: Reason,
    ) -> Self {
        Self {
            id: 0,
            line,
            car_number: car_number.into(),
            wheel_diameter,
            modified_date,
            modifier: modifier.into(),
            reason,
        }
    }

    pub fn date_str(&self) -> String {
        date::format_compact(&self.modified_date)
    }

    pub fn diameter_str(&self) -> String {
        self.wheel_diameter.to_string()
    }

    /// Same measurement, ignoring the surrogate id.
    pub fn same_fields(&self, other: &WheelRecord) -> bool {
        self.line == other.line
            && self.car_number == other.car_number
            && self.wheel_diameter == other.wheel_diameter
            && self.modified_date == other.modified_date
            && self.modifier == other.modifier
            && self.reason == other.reason
    }
}

/// How update/delete address a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Id(u64),
    /// Legacy composite key; first row in stored order wins.
    Natural {
        line: Line,
        car_number: String,
        modified_date: Option<NaiveDate>,
    },
}

impl RecordKey {
    pub fn matches(&self, record: &WheelRecord) -> bool {
        match self {
            RecordKey::Id(id) => record.id == *id,
            RecordKey::Natural {
                line,
                car_number,
                modified_date,
            } => {
                record.line == *line
                    && record.car_number == *car_number
                    && modified_date.is_none_or(|d| record.modified_date == d)
            }
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Id(id) => write!(f, "#{id}"),
            RecordKey::Natural {
                line,
                car_number,
                modified_date: Some(d),
            } => write!(f, "{line}/{car_number}@{}", date::format_compact(d)),
            RecordKey::Natural {
                line, car_number, ..
            } => write!(f, "{line}/{car_number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WheelRecord {
        let mut r = WheelRecord::new(
            Line::Line4,
            "0401",
            840.5,
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            "zhang",
            Reason::Turned,
        );
        r.id = 7;
        r
    }

    #[test]
    fn natural_key_without_date_matches_any_day() {
        let key = RecordKey::Natural {
            line: Line::Line4,
            car_number: "0401".into(),
            modified_date: None,
        };
        assert!(key.matches(&sample()));
    }

    #[test]
    fn natural_key_with_date_must_match_day() {
        let key = RecordKey::Natural {
            line: Line::Line4,
            car_number: "0401".into(),
            modified_date: NaiveDate::from_ymd_opt(2024, 3, 13),
        };
        assert!(!key.matches(&sample()));
    }

    #[test]
    fn id_key_ignores_fields() {
        assert!(RecordKey::Id(7).matches(&sample()));
        assert!(!RecordKey::Id(8).matches(&sample()));
    }

    #[test]
    fn diameter_is_shown_as_stored() {
        let mut r = sample();
        r.wheel_diameter = 842.25;
        assert_eq!(r.diameter_str(), "842.25");
        r.wheel_diameter = 842.0;
        assert_eq!(r.diameter_str(), "842");
    }

    #[test]
    fn key_display() {
        let key = RecordKey::Natural {
            line: Line::Line5,
            car_number: "0502".into(),
            modified_date: NaiveDate::from_ymd_opt(2024, 1, 2),
        };
        assert_eq!(key.to_string(), "L5/0502@20240102");
        assert_eq!(RecordKey::Id(3).to_string(), "#3");
    }
}
