//! Vcpkg integration.
//!
//! The extension's source tree carries its own vcpkg checkout and a
//! `scripts/` directory:
//!
//! ```text
//! <source>/
//!   scripts/vcpkg_dependencies        "eigen3 fmt zlib"
//!   scripts/install_dependencies.sh
//!   scripts/install_dependencies.bat
//!   vcpkg/vcpkg[.exe]
//! ```
//!
//! Before building we ask that vcpkg which ports are installed and run the
//! install script only when something in the ledger is missing.

pub mod install;
pub mod ledger;

/// Directory holding the ledger and install scripts.
pub const SCRIPTS_DIR: &str = "scripts";

pub use install::{ensure_dependencies, install_dependencies, DependencyStatus, InstallProcedure};
pub use ledger::{deps_installed, is_satisfied, missing, query_installed, read_ledger};
