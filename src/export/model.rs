// src/export/model.rs

use crate::models::WheelRecord;
use serde::Serialize;

/// Flat row for CSV / JSON / XLSX export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: u64,
    pub line: String,
    pub car_number: String,
    pub wheel_diameter: f64,
    pub modified_date: String,
    pub modifier: String,
    pub reason: String,
    pub reason_label: String,
}

impl From<&WheelRecord> for RecordExport {
    fn from(r: &WheelRecord) -> Self {
        Self {
            id: r.id,
            line: r.line.code().to_string(),
            car_number: r.car_number.clone(),
            wheel_diameter: r.wheel_diameter,
            modified_date: r.modified_date.format("%Y-%m-%d").to_string(),
            modifier: r.modifier.clone(),
            reason: r.reason.code().to_string(),
            reason_label: r.reason.label().to_string(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "line",
        "car_number",
        "wheel_diameter",
        "modified_date",
        "modifier",
        "reason",
        "reason_label",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.line.clone(),
        r.car_number.clone(),
        r.wheel_diameter.to_string(),
        r.modified_date.clone(),
        r.modifier.clone(),
        r.reason.clone(),
        r.reason_label.clone(),
    ]
}
