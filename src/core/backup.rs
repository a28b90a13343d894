use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::ensure_writable;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipped.
    /// Returns the path of the file actually written.
    pub fn backup(pool: &DbPool, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let src = Path::new(&pool.path);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never overwrite silently, never write over the live database
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if same_file(src, &final_target) {
            return Err(AppError::Validation(format!(
                "backup target {} is the database itself",
                final_target.display()
            )));
        }
        ensure_writable(&final_target, false)?;

        // 4️⃣ Copy, or zip straight from the database file
        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, &final_target)?;
            success(format!("Backup created: {}", final_target.display()));
            final_target
        };

        // 5️⃣ Log in DB (non blocking)
        if let Err(e) = audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

/// Write `src` into a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid database path: {}", src.display())))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}

/// True when `target` resolves to the same file as `db`, even if `target`
/// does not exist yet.
fn same_file(db: &Path, target: &Path) -> bool {
    let Ok(db) = db.canonicalize() else {
        return false;
    };
    if let Ok(t) = target.canonicalize() {
        return t == db;
    }
    match (target.parent(), target.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|p| p.join(name) == db)
                .unwrap_or(false)
        }
        _ => false,
    }
}
