use chrono::{Datelike, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYYMMDD` (sheet format) or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

pub fn format_compact(d: &NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// Calendar-month subtraction, clamped to the last day of the target month
/// (2024-05-31 minus 3 months is 2024-02-29).
pub fn months_before(d: NaiveDate, months: u32) -> NaiveDate {
    d.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// serde adapter storing dates as 8-digit `YYYYMMDD`.
pub mod compact_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_compact(d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_both_formats() {
        assert_eq!(parse_date("20240312"), Some(d(2024, 3, 12)));
        assert_eq!(parse_date("2024-03-12"), Some(d(2024, 3, 12)));
        assert_eq!(parse_date("12/03/2024"), None);
        assert_eq!(parse_date("20241340"), None);
    }

    #[test]
    fn months_before_clamps_to_month_end() {
        assert_eq!(months_before(d(2024, 5, 31), 3), d(2024, 2, 29));
        assert_eq!(months_before(d(2024, 3, 15), 3), d(2023, 12, 15));
    }

    #[test]
    fn first_of_month_resets_day() {
        assert_eq!(first_of_month(d(2024, 7, 19)), d(2024, 7, 1));
    }
}
