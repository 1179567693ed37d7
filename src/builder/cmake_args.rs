//! CMake argument synthesis.
//!
//! Produces the configure-step and build-step argument vectors from the
//! platform, generator and configuration. Everything here is pure: the
//! generator and parallelism overrides arrive as fields of [`ArgsRequest`].

use std::path::PathBuf;

use serde::Serialize;

use crate::core::{
    BuildConfiguration, ExtBuildError, GeneratorDescriptor, PlatformDescriptor, VsPlatform,
};
use crate::util::fs::with_trailing_separator;

/// Generator chosen for non-MSVC compilers when none was requested.
pub const DEFAULT_GENERATOR: &str = "Ninja";

/// Inputs to [`synthesize`].
#[derive(Debug, Clone)]
pub struct ArgsRequest {
    pub platform: PlatformDescriptor,
    pub generator: GeneratorDescriptor,
    pub configuration: BuildConfiguration,
    /// Directory the built module must land in
    pub output_dir: PathBuf,
    /// Interpreter the module is built for
    pub interpreter: PathBuf,
    /// Requested `-j` count; `None` or `Some(0)` means not requested
    pub parallel_jobs: Option<usize>,
    /// Parallel-build override from the environment; wins over `parallel_jobs`
    pub parallel_override: Option<String>,
}

/// Synthesized arguments, in the order they are passed to CMake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CMakeArgs {
    /// Arguments after `cmake <source>`
    pub configure: Vec<String>,
    /// Arguments after `cmake --build . --target <name>`
    pub build: Vec<String>,
}

/// Build the configure and build argument vectors.
///
/// Fails only when a multi-config MSVC generator needs an explicit
/// architecture and the platform tag has no mapping.
pub fn synthesize(req: &ArgsRequest) -> Result<CMakeArgs, ExtBuildError> {
    let output_dir = with_trailing_separator(&req.output_dir, req.platform.os);
    let cfg = req.configuration;

    let mut configure = vec![
        format!("-DCMAKE_LIBRARY_OUTPUT_DIRECTORY={}", output_dir),
        format!("-DPYTHON_EXECUTABLE={}", req.interpreter.display()),
        format!("-DCMAKE_BUILD_TYPE={}", cfg),
        "-DWARNINGS_AS_ERRORS=OFF".to_string(),
        "-DENABLE_TESTING=OFF".to_string(),
        "-DMAKE_DOCS=OFF".to_string(),
    ];
    let mut build = Vec::new();

    let gen = &req.generator;
    if !req.platform.compiler.is_msvc() {
        // An explicit generator reaches CMake through CMAKE_GENERATOR.
        if gen.is_auto() {
            configure.push(format!("-G{}", DEFAULT_GENERATOR));
        }
    } else {
        if !gen.is_single_config && !gen.has_arch_in_name {
            let platform = VsPlatform::from_plat_name(&req.platform.plat_name).ok_or_else(|| {
                ExtBuildError::UnknownArchitecture {
                    plat_name: req.platform.plat_name.clone(),
                }
            })?;
            configure.push("-A".to_string());
            configure.push(platform.as_str().to_string());
        }

        if !gen.is_single_config {
            configure.push(format!(
                "-DCMAKE_LIBRARY_OUTPUT_DIRECTORY_{}={}",
                cfg.as_str().to_uppercase(),
                output_dir
            ));
            build.push("--config".to_string());
            build.push(cfg.to_string());
        }
    }

    if req.parallel_override.is_none() {
        if let Some(jobs) = req.parallel_jobs.filter(|&n| n > 0) {
            build.push(format!("-j{}", jobs));
        }
    }

    Ok(CMakeArgs { configure, build })
}
