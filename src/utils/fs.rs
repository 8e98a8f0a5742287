// src/utils/fs.rs

use crate::errors::{AppError, AppResult};
use crate::utils::path::sibling_tmp;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Legge il README esistente, se presente.
///
/// - file assente → `Ok(None)`
/// - file presente → contenuto UTF-8
pub fn read_optional(path: &Path) -> AppResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(content))
}

/// Write `content` to `path` atomically: temp file in the same directory, then rename.
///
/// On any failure the temp file is removed and the original file is left untouched.
pub fn write_atomic(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(AppError::Write(format!(
            "destination directory does not exist: {}",
            parent.display()
        )));
    }

    let tmp = sibling_tmp(path);
    let result = write_and_sync(&tmp, content).and_then(|_| fs::rename(&tmp, path));

    if let Err(e) = result {
        fs::remove_file(&tmp).ok();
        return Err(AppError::Write(format!("{}: {e}", path.display())));
    }
    Ok(())
}

fn write_and_sync(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
