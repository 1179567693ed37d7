//! Source-tree fixtures for extension builds.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::OsFamily;
use crate::vcpkg::ledger::{ledger_path, vcpkg_binary};

/// Write `scripts/vcpkg_dependencies` under `source_dir`.
pub fn write_ledger(source_dir: &Path, contents: &str) -> PathBuf {
    let path = ledger_path(source_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Create an empty file where the bundled vcpkg binary is expected.
///
/// The probe only checks that the file exists; the mock executor answers
/// the `list` call.
pub fn write_vcpkg_stub(source_dir: &Path, os: OsFamily) -> PathBuf {
    let path = vcpkg_binary(source_dir, os);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"").unwrap();
    path
}
