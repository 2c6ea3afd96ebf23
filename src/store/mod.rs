//! Record file persistence (CSV, whole-file rewrite).

pub mod atomic;
pub mod records;

pub use records::{COLUMNS, RecordStore};
