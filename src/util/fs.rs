//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::OsFamily;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Make a path absolute against the current directory without requiring it to exist.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("failed to resolve path: {}", path.display()))
}

/// Render a directory path with a trailing separator for `os`.
///
/// CMake needs the trailing separator on the library output directory to
/// pick up auxiliary native libraries next to the module.
pub fn with_trailing_separator(path: &Path, os: OsFamily) -> String {
    let mut rendered = path.display().to_string();
    let sep = os.path_separator();
    if !rendered.ends_with(sep) {
        rendered.push(sep);
    }
    rendered
}
