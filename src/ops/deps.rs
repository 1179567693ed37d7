//! Implementation of `extbuild deps`.

use std::path::Path;

use anyhow::Result;

use crate::core::OsFamily;
use crate::util::process::CommandRunner;
use crate::vcpkg::{install_dependencies, ledger, query_installed, read_ledger};

/// Result of checking the ledger against vcpkg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    /// Names declared in the ledger
    pub declared: Vec<String>,
    /// Declared names vcpkg does not list (all of them when vcpkg is unavailable)
    pub missing: Vec<String>,
    /// Whether `vcpkg list` could be obtained
    pub vcpkg_available: bool,
}

impl DependencyReport {
    pub fn is_satisfied(&self) -> bool {
        self.vcpkg_available && self.missing.is_empty()
    }
}

/// Compare the ledger with what vcpkg reports, without installing anything.
pub fn check_dependencies(
    runner: &mut dyn CommandRunner,
    source_dir: &Path,
    os: OsFamily,
) -> Result<DependencyReport> {
    let deps = read_ledger(source_dir)?;
    let declared = deps.names().to_vec();

    let report = match query_installed(runner, source_dir, os) {
        Some(listing) => DependencyReport {
            missing: ledger::missing(&deps, &listing)
                .into_iter()
                .map(String::from)
                .collect(),
            declared,
            vcpkg_available: true,
        },
        None => DependencyReport {
            missing: declared.clone(),
            declared,
            vcpkg_available: false,
        },
    };

    Ok(report)
}

/// Run the install script regardless of what is installed.
pub fn force_install(runner: &mut dyn CommandRunner, source_dir: &Path, os: OsFamily) -> Result<()> {
    // Fail early on a missing ledger, same as a build would.
    read_ledger(source_dir)?;
    install_dependencies(runner, source_dir, os)
}
