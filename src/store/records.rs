//! Row-level access to the record file.
//!
//! Every call reads the whole file; every mutation rewrites it atomically.
//! The file is not locked: two processes writing the same store race and the
//! last writer wins. A single concurrent user is assumed.

use crate::errors::{AppError, AppResult};
use crate::models::{Line, RecordKey, WheelRecord};
use crate::store::atomic::atomic_write;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed column schema of the record file.
pub const COLUMNS: [&str; 7] = [
    "id",
    "line",
    "car_number",
    "wheel_diameter",
    "modified_date",
    "modifier",
    "reason",
];

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Open the store, creating an empty file with the header if missing.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            store.save(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_all(&self) -> AppResult<Vec<WheelRecord>> {
        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut out = Vec::new();

        for (i, row) in rdr.deserialize::<WheelRecord>().enumerate() {
            match row {
                Ok(rec) => out.push(rec),
                Err(e) if e.is_io_error() => return Err(e.into()),
                // +2: header line and 1-based numbering
                Err(e) => {
                    return Err(AppError::Validation(format!(
                        "{} line {}: {}",
                        self.path.display(),
                        i + 2,
                        e
                    )));
                }
            }
        }

        Ok(out)
    }

    /// All rows for a car on a line, stored order.
    pub fn find(&self, line: Line, car_number: &str) -> AppResult<Vec<WheelRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.line == line && r.car_number == car_number)
            .collect())
    }

    pub fn list(&self, line: Line) -> AppResult<Vec<WheelRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.line == line)
            .collect())
    }

    /// Distinct car numbers on a line, sorted.
    pub fn cars(&self, line: Line) -> AppResult<Vec<String>> {
        let set: BTreeSet<String> = self
            .list(line)?
            .into_iter()
            .map(|r| r.car_number)
            .collect();
        Ok(set.into_iter().collect())
    }

    pub fn get(&self, key: &RecordKey) -> AppResult<WheelRecord> {
        self.load_all()?
            .into_iter()
            .find(|r| key.matches(r))
            .ok_or_else(|| AppError::NotFound(key.to_string()))
    }

    /// Append a new row; the store assigns the id.
    pub fn insert(&self, record: WheelRecord) -> AppResult<WheelRecord> {
        validate(&record)?;

        let mut all = self.load_all()?;
        let next_id = all.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        let stored = WheelRecord {
            id: next_id,
            ..record
        };
        all.push(stored.clone());
        self.save(&all)?;

        Ok(stored)
    }

    /// Overwrite the first row matching `key`. The id is kept.
    pub fn update(&self, key: &RecordKey, new_record: WheelRecord) -> AppResult<WheelRecord> {
        validate(&new_record)?;

        let mut all = self.load_all()?;
        let slot = all
            .iter_mut()
            .find(|r| key.matches(r))
            .ok_or_else(|| AppError::NotFound(key.to_string()))?;

        *slot = WheelRecord {
            id: slot.id,
            ..new_record
        };
        let updated = slot.clone();
        self.save(&all)?;

        Ok(updated)
    }

    /// Remove the first row matching `key` and return it.
    pub fn delete(&self, key: &RecordKey) -> AppResult<WheelRecord> {
        let mut all = self.load_all()?;
        let idx = all
            .iter()
            .position(|r| key.matches(r))
            .ok_or_else(|| AppError::NotFound(key.to_string()))?;

        let removed = all.remove(idx);
        self.save(&all)?;

        Ok(removed)
    }

    fn save(&self, records: &[WheelRecord]) -> AppResult<()> {
        atomic_write(&self.path, |file| {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);

            // explicit header so an empty table still carries the schema
            wtr.write_record(COLUMNS)?;
            for rec in records {
                wtr.serialize(rec)?;
            }
            wtr.flush()?;
            Ok(())
        })
    }

    /// Raw size on disk, for `init`/`backup` messages.
    pub fn file_size(&self) -> AppResult<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }
}

/// Required fields must be non-blank; the diameter must be a real number.
pub fn validate(record: &WheelRecord) -> AppResult<()> {
    if record.car_number.trim().is_empty() {
        return Err(AppError::Validation("car number is required".into()));
    }
    if record.modifier.trim().is_empty() {
        return Err(AppError::Validation("modifier is required".into()));
    }
    if !record.wheel_diameter.is_finite() {
        return Err(AppError::Validation(format!(
            "wheel diameter must be a number, got {}",
            record.wheel_diameter
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reason;
    use chrono::NaiveDate;

    fn rec(car: &str, day: u32, reason: Reason) -> WheelRecord {
        WheelRecord::new(
            Line::Line4,
            car,
            840.0,
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            "li",
            reason,
        )
    }

    fn temp_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("wheels.csv")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_header_only_file() {
        let (_dir, store) = temp_store();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim(), COLUMNS.join(","));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let (_dir, store) = temp_store();
        let a = store.insert(rec("0401", 1, Reason::Turned)).unwrap();
        let b = store.insert(rec("0402", 1, Reason::Turned)).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[test]
    fn same_day_rows_are_addressable_by_id() {
        let (_dir, store) = temp_store();
        store.insert(rec("0401", 3, Reason::Turned)).unwrap();
        let second = store.insert(rec("0401", 3, Reason::Other)).unwrap();

        let removed = store.delete(&RecordKey::Id(second.id)).unwrap();
        assert_eq!(removed.reason, Reason::Other);

        let left = store.find(Line::Line4, "0401").unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].reason, Reason::Turned);
    }

    #[test]
    fn update_keeps_id_and_row_count() {
        let (_dir, store) = temp_store();
        let a = store.insert(rec("0401", 1, Reason::Turned)).unwrap();
        store.insert(rec("0402", 1, Reason::Turned)).unwrap();

        let mut changed = rec("0401", 9, Reason::ThreeMonthReduction);
        changed.id = 99;
        let updated = store.update(&RecordKey::Id(a.id), changed).unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let (_dir, store) = temp_store();
        let err = store.insert(rec("  ", 1, Reason::Turned)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut nan = rec("0401", 1, Reason::Turned);
        nan.wheel_diameter = f64::NAN;
        assert!(matches!(
            store.insert(nan).unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn missing_key_reports_not_found() {
        let (_dir, store) = temp_store();
        let err = store.delete(&RecordKey::Id(5)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let (_dir, store) = temp_store();
        store.insert(rec("0401", 1, Reason::Turned)).unwrap();
        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("2,L9,0402,840,20240601,li,turned\n");
        fs::write(store.path(), content).unwrap();

        match store.load_all().unwrap_err() {
            AppError::Validation(msg) => assert!(msg.contains("line 3"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cars_are_distinct_and_sorted() {
        let (_dir, store) = temp_store();
        store.insert(rec("0410", 1, Reason::Turned)).unwrap();
        store.insert(rec("0402", 1, Reason::Turned)).unwrap();
        store.insert(rec("0410", 2, Reason::Turned)).unwrap();
        assert_eq!(store.cars(Line::Line4).unwrap(), vec!["0402", "0410"]);
        assert!(store.cars(Line::Line5).unwrap().is_empty());
    }
}
