pub mod add;
pub mod backup;
pub mod cars;
pub mod config;
pub mod del;
pub mod due;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;

use crate::cli::parser::KeyArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Line, RecordKey, WheelRecord};
use crate::ui::prompt::ask_secret;
use crate::utils::colors::colorize_reason;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// `--line` value, or the configured default line.
pub(crate) fn resolve_line(raw: Option<&str>, cfg: &Config) -> AppResult<Line> {
    match raw {
        Some(code) => Line::from_code(code).ok_or_else(|| AppError::InvalidLine(code.into())),
        None => Ok(cfg.default_line),
    }
}

pub(crate) fn parse_date_arg(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(|s| date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into())))
        .transpose()
}

/// Build the row key from `--id` or line + `--car` (+ `--date`).
pub(crate) fn resolve_key(key: &KeyArgs, line: Line, date_required: bool) -> AppResult<RecordKey> {
    if let Some(id) = key.id {
        return Ok(RecordKey::Id(id));
    }

    let car_number = key
        .car
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("either --id or --car is required".into()))?
        .to_string();

    let modified_date = parse_date_arg(key.date.as_deref())?;
    if date_required && modified_date.is_none() {
        return Err(AppError::Validation(
            "--date is required when deleting by car number".into(),
        ));
    }

    Ok(RecordKey::Natural {
        line,
        car_number,
        modified_date,
    })
}

/// `--secret` value, or read it from stdin.
pub(crate) fn resolve_secret(secret: &Option<String>) -> AppResult<String> {
    match secret {
        Some(s) => Ok(s.clone()),
        None => Ok(ask_secret()?),
    }
}

pub(crate) fn records_table(records: &[WheelRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("LINE", 4),
        Column::new("CAR", 6),
        Column::new("DIAMETER", 8),
        Column::new("DATE", 8),
        Column::new("MODIFIER", 8),
        Column::new("REASON", 6),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.line.code().to_string(),
            r.car_number.clone(),
            r.diameter_str(),
            r.date_str(),
            r.modifier.clone(),
            colorize_reason(r.reason),
        ]);
    }

    table
}
