//! Running the project's dependency install script.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{DependencySet, ExtBuildError, OsFamily};
use crate::util::process::{CommandRunner, ProcessBuilder};

use super::ledger::deps_installed;

/// How the install script is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProcedure {
    /// `scripts/install_dependencies.bat`, run directly
    Batch(PathBuf),
    /// `bash scripts/install_dependencies.sh`
    Shell(PathBuf),
}

impl InstallProcedure {
    /// Select the procedure for the given OS family.
    pub fn for_os(source_dir: &Path, os: OsFamily) -> Self {
        let scripts = source_dir.join(super::SCRIPTS_DIR);
        match os {
            OsFamily::Windows => InstallProcedure::Batch(scripts.join("install_dependencies.bat")),
            OsFamily::Unix => InstallProcedure::Shell(scripts.join("install_dependencies.sh")),
        }
    }

    pub fn script(&self) -> &Path {
        match self {
            InstallProcedure::Batch(path) | InstallProcedure::Shell(path) => path,
        }
    }

    fn command(&self) -> ProcessBuilder {
        match self {
            InstallProcedure::Batch(script) => ProcessBuilder::new(script),
            InstallProcedure::Shell(script) => ProcessBuilder::new("bash").arg(script),
        }
    }
}

/// Outcome of [`ensure_dependencies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The ledger was already satisfied; nothing ran
    AlreadyInstalled,
    /// The install script ran successfully
    Installed,
}

/// Run the install script for this OS. Any failure is fatal.
pub fn install_dependencies(
    runner: &mut dyn CommandRunner,
    source_dir: &Path,
    os: OsFamily,
) -> Result<()> {
    let procedure = InstallProcedure::for_os(source_dir, os);
    let cmd = procedure.command().cwd(source_dir);

    tracing::info!("Installing dependencies with {}", procedure.script().display());

    let output = runner.run(&cmd)?;
    if !output.success() {
        return Err(ExtBuildError::InstallFailed {
            code: output.code,
            output: output.combined(),
        }
        .into());
    }

    Ok(())
}

/// Install dependencies only when vcpkg does not already report all of them.
pub fn ensure_dependencies(
    runner: &mut dyn CommandRunner,
    source_dir: &Path,
    os: OsFamily,
    deps: &DependencySet,
) -> Result<DependencyStatus> {
    if deps_installed(runner, source_dir, os, deps) {
        tracing::info!("All dependencies already installed");
        return Ok(DependencyStatus::AlreadyInstalled);
    }

    tracing::info!("Need to install dependencies");
    install_dependencies(runner, source_dir, os)?;
    Ok(DependencyStatus::Installed)
}
