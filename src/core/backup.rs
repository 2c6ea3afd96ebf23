use crate::audit::AuditLog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the record file to `dest_file`, optionally zipped.
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        store_path: &Path,
        audit: &AuditLog,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check record file exists
        if !store_path.exists() {
            return Err(AppError::NotFound(format!(
                "record file {}",
                store_path.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists()
            && !force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy (or compress) the record file
        let final_path = if compress {
            compress_backup(store_path, &final_target)?
        } else {
            fs::copy(store_path, dest)?;
            dest.to_path_buf()
        };
        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Audit
        if let Err(e) = audit.record(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Backup written but not logged: {e}"));
        }

        Ok(Some(final_path))
    }
}

/// Write `src` as the single entry of a deflated zip at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wheelgauge.csv".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_copy_matches_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("wheels.csv");
        fs::write(&src, "id,line\n").unwrap();
        let dest = dir.path().join("bk").join("copy.csv");
        let audit = AuditLog::in_memory().unwrap();

        let out = BackupLogic::backup(&src, &audit, &dest.to_string_lossy(), false, true)
            .unwrap()
            .unwrap();

        assert_eq!(out, dest);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "id,line\n");
        assert_eq!(audit.entries().unwrap()[0].operation, "backup");
    }

    #[test]
    fn compressed_backup_gets_zip_extension() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("wheels.csv");
        fs::write(&src, "id,line\n").unwrap();
        let dest = dir.path().join("copy.csv");
        let audit = AuditLog::in_memory().unwrap();

        let out = BackupLogic::backup(&src, &audit, &dest.to_string_lossy(), true, true)
            .unwrap()
            .unwrap();

        assert_eq!(out, dir.path().join("copy.zip"));
        assert!(out.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn missing_store_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let audit = AuditLog::in_memory().unwrap();
        let err = BackupLogic::backup(
            &dir.path().join("nope.csv"),
            &audit,
            &dir.path().join("b.csv").to_string_lossy(),
            false,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
