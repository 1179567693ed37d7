//! Dependency ledger and installed-port probing.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{DependencySet, ExtBuildError, OsFamily};
use crate::util::fs::read_to_string;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Location of the ledger relative to the source root.
pub const LEDGER_FILE: &str = "vcpkg_dependencies";

/// Path to the dependency ledger (`scripts/vcpkg_dependencies`).
pub fn ledger_path(source_dir: &Path) -> PathBuf {
    source_dir.join(super::SCRIPTS_DIR).join(LEDGER_FILE)
}

/// Read the declared dependencies.
///
/// A missing ledger is fatal: without it we cannot know what to install.
pub fn read_ledger(source_dir: &Path) -> Result<DependencySet> {
    let path = ledger_path(source_dir);
    if !path.is_file() {
        return Err(ExtBuildError::LedgerMissing { path }.into());
    }

    let deps = DependencySet::parse(&read_to_string(&path)?);
    tracing::debug!("ledger declares {} dependencies: {}", deps.len(), deps);
    Ok(deps)
}

/// Path to the bundled vcpkg binary (`vcpkg/vcpkg[.exe]`).
pub fn vcpkg_binary(source_dir: &Path, os: OsFamily) -> PathBuf {
    source_dir
        .join("vcpkg")
        .join(format!("vcpkg{}", os.exe_suffix()))
}

/// Fetch the `vcpkg list` output.
///
/// Returns `None` when the binary is absent, cannot be run or exits
/// non-zero; callers treat that as "nothing installed".
pub fn query_installed(
    runner: &mut dyn CommandRunner,
    source_dir: &Path,
    os: OsFamily,
) -> Option<String> {
    let vcpkg = vcpkg_binary(source_dir, os);
    if !vcpkg.is_file() {
        tracing::debug!("vcpkg not found at {}", vcpkg.display());
        return None;
    }

    let cmd = ProcessBuilder::new(&vcpkg).arg("list");
    match runner.run(&cmd) {
        Ok(output) if output.success() => Some(output.stdout),
        Ok(output) => {
            tracing::debug!(
                "`{}` exited with {:?}, treating dependencies as missing",
                cmd.display_command(),
                output.code
            );
            None
        }
        Err(e) => {
            tracing::debug!("failed to query vcpkg: {:#}", e);
            None
        }
    }
}

/// Whether every dependency appears as `<name>:` in the listing.
pub fn is_satisfied(deps: &DependencySet, listing: &str) -> bool {
    deps.iter().all(|name| is_listed(name, listing))
}

/// Dependencies that do not appear in the listing, in ledger order.
pub fn missing<'a>(deps: &'a DependencySet, listing: &str) -> Vec<&'a str> {
    deps.iter().filter(|name| !is_listed(name, listing)).collect()
}

fn is_listed(name: &str, listing: &str) -> bool {
    listing.contains(&format!("{}:", name.trim()))
}

/// Probe vcpkg and check the ledger against what it reports.
pub fn deps_installed(
    runner: &mut dyn CommandRunner,
    source_dir: &Path,
    os: OsFamily,
    deps: &DependencySet,
) -> bool {
    match query_installed(runner, source_dir, os) {
        Some(listing) => is_satisfied(deps, &listing),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_ledger, write_vcpkg_stub, MockExecutor, MockProcessOutput};
    use tempfile::TempDir;

    const LISTING: &str = "\
eigen3:x64-linux                                  3.4.0#2          C++ template library
fmt:x64-linux                                     10.1.1           Formatting library
zlib:x64-linux                                    1.3              A compression library
";

    #[test]
    fn test_satisfied_when_all_listed() {
        let deps = DependencySet::parse("eigen3 zlib");
        assert!(is_satisfied(&deps, LISTING));
    }

    #[test]
    fn test_order_independent() {
        let a = DependencySet::parse("zlib fmt eigen3");
        let b = DependencySet::parse("eigen3 fmt zlib");
        assert_eq!(is_satisfied(&a, LISTING), is_satisfied(&b, LISTING));
        assert!(is_satisfied(&a, LISTING));
    }

    #[test]
    fn test_requires_colon_after_name() {
        // "boost" appears only as a prefix of another port name
        let deps = DependencySet::parse("boost");
        assert!(!is_satisfied(&deps, "boost-headers 1.83 Boost headers\n"));
        assert!(is_satisfied(&deps, "boost:x64-linux 1.83\n"));
    }

    #[test]
    fn test_missing_reports_absent_names() {
        let deps = DependencySet::parse("eigen3 hdf5 fmt cli11");
        assert_eq!(missing(&deps, LISTING), vec!["hdf5", "cli11"]);
    }

    #[test]
    fn test_read_ledger_missing_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = read_ledger(tmp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtBuildError>(),
            Some(ExtBuildError::LedgerMissing { .. })
        ));
    }

    #[test]
    fn test_read_ledger() {
        let tmp = TempDir::new().unwrap();
        write_ledger(tmp.path(), "eigen3 fmt\n");

        let deps = read_ledger(tmp.path()).unwrap();
        assert_eq!(deps.names(), &["eigen3", "fmt"]);
    }

    #[test]
    fn test_missing_binary_is_not_installed() {
        let tmp = TempDir::new().unwrap();
        let mut exec = MockExecutor::new();
        let deps = DependencySet::parse("fmt");

        assert!(!deps_installed(&mut exec, tmp.path(), OsFamily::Unix, &deps));
        assert!(exec.calls().is_empty());
    }

    #[test]
    fn test_query_uses_list_subcommand() {
        let tmp = TempDir::new().unwrap();
        write_vcpkg_stub(tmp.path(), OsFamily::Unix);
        let mut exec = MockExecutor::new();
        exec.expect_contains("vcpkg list", MockProcessOutput::success(LISTING));

        let deps = DependencySet::parse("fmt zlib");
        assert!(deps_installed(&mut exec, tmp.path(), OsFamily::Unix, &deps));
        assert_eq!(exec.calls().len(), 1);
        assert!(exec.calls()[0].ends_with("vcpkg list"));
    }

    #[test]
    fn test_failed_query_is_not_installed() {
        let tmp = TempDir::new().unwrap();
        write_vcpkg_stub(tmp.path(), OsFamily::Unix);
        let mut exec = MockExecutor::new();
        exec.expect_contains("vcpkg list", MockProcessOutput::failure(1, "boom"));

        let deps = DependencySet::parse("fmt");
        assert!(!deps_installed(&mut exec, tmp.path(), OsFamily::Unix, &deps));
    }

    #[test]
    fn test_spawn_error_is_not_installed() {
        let tmp = TempDir::new().unwrap();
        write_vcpkg_stub(tmp.path(), OsFamily::Unix);
        // No expectations: the mock errors like a failed spawn
        let mut exec = MockExecutor::new();

        let deps = DependencySet::parse("fmt");
        assert!(query_installed(&mut exec, tmp.path(), OsFamily::Unix).is_none());
        assert!(!deps_installed(&mut exec, tmp.path(), OsFamily::Unix, &deps));
    }

    #[test]
    fn test_windows_binary_has_exe_suffix() {
        let path = vcpkg_binary(Path::new("src"), OsFamily::Windows);
        assert!(path.ends_with("vcpkg/vcpkg.exe"));
    }
}
