//! Implementation of `extbuild build`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::builder::{synthesize, ArgsRequest, CMakeArgs, CMakeInvoker};
use crate::core::{BuildConfiguration, Extension, GeneratorDescriptor, PlatformDescriptor};
use crate::util::config::BuildEnvironment;
use crate::util::process::CommandRunner;
use crate::vcpkg::{ensure_dependencies, read_ledger, DependencyStatus};

/// Options for building one extension.
#[derive(Debug, Clone)]
pub struct BuildExtOptions {
    /// The extension target and its source tree
    pub extension: Extension,

    /// Host platform and compiler
    pub platform: PlatformDescriptor,

    /// Debug or Release
    pub configuration: BuildConfiguration,

    /// Directory the built module is written to
    pub output_dir: PathBuf,

    /// CMake working directory
    pub build_temp: PathBuf,

    /// Interpreter passed to CMake
    pub interpreter: PathBuf,

    /// Requested parallel jobs
    pub jobs: Option<usize>,

    /// Path to cmake
    pub cmake: PathBuf,

    /// Generator and parallelism overrides
    pub env: BuildEnvironment,
}

impl BuildExtOptions {
    /// The synthesizer input described by these options.
    pub fn args_request(&self) -> ArgsRequest {
        ArgsRequest {
            platform: self.platform.clone(),
            generator: GeneratorDescriptor::new(self.env.generator.clone()),
            configuration: self.configuration,
            output_dir: self.output_dir.clone(),
            interpreter: self.interpreter.clone(),
            parallel_jobs: self.jobs,
            parallel_override: self.env.parallel_level.clone(),
        }
    }
}

/// What a successful build did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub dependencies: DependencyStatus,
    pub args: CMakeArgs,
}

/// Compute the CMake arguments without running anything.
pub fn plan_args(opts: &BuildExtOptions) -> Result<CMakeArgs> {
    let args = synthesize(&opts.args_request())
        .with_context(|| format!("failed to prepare build of `{}`", opts.extension.name()))?;
    Ok(args)
}

/// Build one extension: dependencies, configure, build.
///
/// Arguments are synthesized first; that step is pure, so configuration
/// errors surface before any subprocess runs.
pub fn build_extension(
    runner: &mut dyn CommandRunner,
    opts: &BuildExtOptions,
) -> Result<BuildReport> {
    let ext = &opts.extension;
    let args = plan_args(opts)?;

    let deps = read_ledger(ext.source_dir())?;
    let dependencies = ensure_dependencies(runner, ext.source_dir(), opts.platform.os, &deps)?;

    CMakeInvoker::new(&opts.cmake, &opts.build_temp)
        .env(opts.env.exported.iter().cloned())
        .run(runner, ext, &args)?;

    tracing::info!(
        "Finished `{}` -> {}",
        ext.name(),
        opts.output_dir.display()
    );

    Ok(BuildReport { dependencies, args })
}
