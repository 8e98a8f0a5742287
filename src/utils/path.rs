//! Path utilities: expand ~, locate sibling temp files.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Temporary file next to `target` (same directory, so a rename stays on one filesystem).
pub fn sibling_tmp(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "README.md".to_string());
    target.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
