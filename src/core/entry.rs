use crate::errors::{AppError, AppResult};
use crate::models::{Line, Reason, RecordKey, WheelRecord};
use crate::store::RecordStore;
use crate::utils::date;
use chrono::NaiveDate;

/// Raw field values as typed by the user. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub car_number: Option<String>,
    pub wheel_diameter: Option<String>,
    pub modified_date: Option<String>,
    pub modifier: Option<String>,
    pub reason: Option<String>,
}

impl EntryForm {
    /// Form for a new entry: dated today, reason `turned`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            modified_date: Some(date::format_compact(&today)),
            reason: Some(Reason::default().code().to_string()),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing row (edit).
    pub fn from_record(rec: &WheelRecord) -> Self {
        Self {
            car_number: Some(rec.car_number.clone()),
            wheel_diameter: Some(rec.wheel_diameter.to_string()),
            modified_date: Some(rec.date_str()),
            modifier: Some(rec.modifier.clone()),
            reason: Some(rec.reason.code().to_string()),
        }
    }

    /// Fields present in `overrides` replace the prefilled ones.
    pub fn merge(self, overrides: EntryForm) -> Self {
        Self {
            car_number: overrides.car_number.or(self.car_number),
            wheel_diameter: overrides.wheel_diameter.or(self.wheel_diameter),
            modified_date: overrides.modified_date.or(self.modified_date),
            modifier: overrides.modifier.or(self.modifier),
            reason: overrides.reason.or(self.reason),
        }
    }

    /// Normalize into a record on `line`. The line is never taken from the form.
    pub fn build(&self, line: Line) -> AppResult<WheelRecord> {
        let car_number = required(&self.car_number, "car number")?;
        let modifier = required(&self.modifier, "modifier")?;

        let raw_diameter = required(&self.wheel_diameter, "wheel diameter")?;
        let wheel_diameter = raw_diameter
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                AppError::Validation(format!("wheel diameter '{raw_diameter}' is not a number"))
            })?;

        let raw_date = required(&self.modified_date, "modified date")?;
        let modified_date =
            date::parse_date(&raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.clone()))?;

        let reason = match self.reason.as_deref().map(str::trim) {
            None | Some("") => Reason::default(),
            Some(r) => Reason::from_code(r).ok_or_else(|| AppError::InvalidReason(r.into()))?,
        };

        Ok(WheelRecord::new(
            line,
            car_number,
            wheel_diameter,
            modified_date,
            modifier,
            reason,
        ))
    }
}

fn required(value: &Option<String>, name: &str) -> AppResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

pub struct EntryController;

impl EntryController {
    /// Build a record from a blank form completed by `input` and insert it.
    pub fn add(
        store: &RecordStore,
        input: EntryForm,
        line: Line,
        today: NaiveDate,
    ) -> AppResult<WheelRecord> {
        let record = EntryForm::blank(today).merge(input).build(line)?;
        store.insert(record)
    }

    /// Prefill from the row at `key`, apply `changes`, write it back.
    /// `line` defaults to the row's own line. Returns the row before and after.
    pub fn edit(
        store: &RecordStore,
        key: &RecordKey,
        changes: EntryForm,
        line: Option<Line>,
    ) -> AppResult<(WheelRecord, WheelRecord)> {
        let current = store.get(key)?;
        let record = EntryForm::from_record(&current)
            .merge(changes)
            .build(line.unwrap_or(current.line))?;
        let updated = store.update(&RecordKey::Id(current.id), record)?;
        Ok((current, updated))
    }
}
