//! The extension target being built.

use std::path::{Path, PathBuf};

use crate::core::error::ExtBuildError;

/// A native extension built from a CMake source tree.
///
/// The name must be the single output target of the CMake build; projects
/// producing several modules need one invocation each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    name: String,
    source_dir: PathBuf,
}

impl Extension {
    pub fn new(name: impl Into<String>, source_dir: impl Into<PathBuf>) -> Result<Self, ExtBuildError> {
        let name: String = name.into();
        let name = name.trim();

        if name.is_empty() {
            return Err(ExtBuildError::InvalidExtension(
                "extension name must not be empty".to_string(),
            ));
        }
        if name.contains(char::is_whitespace) {
            return Err(ExtBuildError::InvalidExtension(format!(
                "`{}` names more than one target; build one extension per invocation",
                name
            )));
        }

        Ok(Extension {
            name: name.to_string(),
            source_dir: source_dir.into(),
        })
    }

    /// CMake target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the CMake source tree (also holds `scripts/` and `vcpkg/`).
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}
