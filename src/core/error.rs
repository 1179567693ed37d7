//! Domain error types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while preparing or running an extension build.
///
/// The dependency probe never produces one of these: a missing or failing
/// package manager just means "not installed".
#[derive(Debug, Error)]
pub enum ExtBuildError {
    #[error("dependency ledger not found at {}", path.display())]
    LedgerMissing { path: PathBuf },

    #[error("unknown architecture `{plat_name}` for a multi-config MSVC generator")]
    UnknownArchitecture { plat_name: String },

    #[error("unknown compiler type `{0}` (expected msvc, unix or mingw32)")]
    InvalidCompiler(String),

    #[error("invalid extension: {0}")]
    InvalidExtension(String),

    #[error("dependency installation failed with exit code {code:?}\n{output}")]
    InstallFailed { code: Option<i32>, output: String },

    #[error("CMake configure step failed with exit code {code:?}\n{output}")]
    ConfigureFailed { code: Option<i32>, output: String },

    #[error("CMake build of `{target}` failed with exit code {code:?}\n{output}")]
    BuildFailed {
        target: String,
        code: Option<i32>,
        output: String,
    },
}
