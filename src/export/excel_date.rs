// src/export/excel_date.rs

use chrono::NaiveDate;

/// `YYYY-MM-DD` → Excel serial day number + number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(("yyyy-mm-dd", (d - excel_epoch).num_days() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        assert_eq!(parse_to_excel_date("1900-01-01"), Some(("yyyy-mm-dd", 2.0)));
        assert_eq!(parse_to_excel_date("2024-06-20"), Some(("yyyy-mm-dd", 45463.0)));
        assert_eq!(parse_to_excel_date("0401"), None);
    }
}
