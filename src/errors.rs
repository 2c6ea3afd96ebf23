//! Unified application error type.
//! All modules (store, core, audit, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / record file
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Record file error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Audit log error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid line: {0} (use 4 or 5)")]
    InvalidLine(String),

    #[error("Invalid reason: {0} (use turned, three-month-reduction or other)")]
    InvalidReason(String),

    // ---------------------------
    // Record logic
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    Auth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
