//! Atomic whole-file replace: write to a temp file in the same directory,
//! flush + `sync_all`, then rename it over the destination.

use crate::errors::AppResult;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` returns `Some("")` for bare file names like `wheels.csv`.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// If `write_fn` fails the destination file is left untouched.
pub fn atomic_write<T>(
    dest: &Path,
    write_fn: impl FnOnce(&mut File) -> AppResult<T>,
) -> AppResult<T> {
    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    let out = write_fn(tmp.as_file_mut())?;

    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(dest).map_err(|e| e.error)?;

    // Best-effort: the file is already in place.
    sync_dir(dir);

    Ok(out)
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Ok(d) = File::open(dir) {
        let _ = d.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("t.csv");
        fs::write(&dest, "old").unwrap();

        atomic_write(&dest, |f| Ok(f.write_all(b"new")?)).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn failed_writer_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("t.csv");
        fs::write(&dest, "old").unwrap();

        let res: AppResult<()> = atomic_write(&dest, |f| {
            f.write_all(b"partial")?;
            Err(AppError::Other("boom".into()))
        });

        assert!(res.is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
        // temp file cleaned up on drop
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
