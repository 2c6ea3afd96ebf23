//! Append-only audit trail of store mutations, kept in SQLite.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};
use std::fs;
use std::path::Path;

pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct AuditLog {
    pub conn: Connection,
}

impl AuditLog {
    /// Open (or create) the audit database and make sure the `log` table exists.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory log, for tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }

    /// Write one line into the `log` table.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, ISO 8601
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![now, operation, target, message])?;

        Ok(())
    }

    pub fn entries(&self) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LogEntry {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT NOT NULL DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}
