// src/export/logic.rs

use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Line;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// What to export for a line.
#[derive(Debug, Clone, Copy)]
pub enum ExportSelection {
    /// Every row of the line.
    All,
    /// Only rows due for reduction on the given day.
    Due(NaiveDate),
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of `line` to `file` (absolute path). Returns the
    /// number of rows written.
    pub fn export(
        ctx: &AppContext,
        line: Line,
        selection: ExportSelection,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let (records, sheet) = match selection {
            ExportSelection::All => (ctx.store.list(line)?, format!("{line}")),
            ExportSelection::Due(reference) => {
                (ctx.due(line, reference, None)?, format!("{line} due"))
            }
        };

        if records.is_empty() {
            warning("No records found for the selected line; writing header only.");
        }

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path, &sheet)?,
        }

        ctx.audit.record(
            "export",
            &path.to_string_lossy(),
            &format!("{} {} rows of {line}", format.as_str(), rows.len()),
        )?;

        Ok(rows.len())
    }
}
