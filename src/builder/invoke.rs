//! Running the CMake configure and build steps.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::cmake_args::CMakeArgs;
use crate::core::{ExtBuildError, Extension};
use crate::util::fs::ensure_dir;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Drives `cmake` for one extension inside a dedicated build directory.
pub struct CMakeInvoker {
    cmake: PathBuf,
    build_temp: PathBuf,
    env: Vec<(String, String)>,
}

impl CMakeInvoker {
    /// Create an invoker running `cmake` in `build_temp`.
    pub fn new(cmake: impl Into<PathBuf>, build_temp: impl Into<PathBuf>) -> Self {
        CMakeInvoker {
            cmake: cmake.into(),
            build_temp: build_temp.into(),
            env: Vec::new(),
        }
    }

    /// Environment exported to both CMake steps.
    pub fn env(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env.extend(vars);
        self
    }

    /// The working directory. Left in place after the build.
    pub fn build_temp(&self) -> &Path {
        &self.build_temp
    }

    /// Configure and build `ext`. Stops at the first failing step.
    pub fn run(
        &self,
        runner: &mut dyn CommandRunner,
        ext: &Extension,
        args: &CMakeArgs,
    ) -> Result<()> {
        ensure_dir(&self.build_temp)?;

        self.configure(runner, ext, args)?;
        self.compile(runner, ext, args)?;

        Ok(())
    }

    fn command(&self) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.cmake).cwd(&self.build_temp);
        for (key, value) in &self.env {
            cmd = cmd.env(key, value);
        }
        cmd
    }

    fn configure(
        &self,
        runner: &mut dyn CommandRunner,
        ext: &Extension,
        args: &CMakeArgs,
    ) -> Result<()> {
        tracing::info!("Configuring `{}`", ext.name());

        let cmd = self
            .command()
            .arg(ext.source_dir())
            .args(&args.configure);
        tracing::debug!("{}", cmd.display_command());

        let output = runner.run(&cmd)?;
        if !output.success() {
            return Err(ExtBuildError::ConfigureFailed {
                code: output.code,
                output: output.combined(),
            }
            .into());
        }
        tracing::debug!("{}", output.stdout.trim_end());

        Ok(())
    }

    fn compile(
        &self,
        runner: &mut dyn CommandRunner,
        ext: &Extension,
        args: &CMakeArgs,
    ) -> Result<()> {
        tracing::info!("Building `{}`", ext.name());

        let cmd = self
            .command()
            .args(["--build", ".", "--target", ext.name()])
            .args(&args.build);
        tracing::debug!("{}", cmd.display_command());

        let output = runner.run(&cmd)?;
        if !output.success() {
            return Err(ExtBuildError::BuildFailed {
                target: ext.name().to_string(),
                code: output.code,
                output: output.combined(),
            }
            .into());
        }
        tracing::debug!("{}", output.stdout.trim_end());

        Ok(())
    }
}
