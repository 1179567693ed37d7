//! Configuration file support.
//!
//! Two configuration file locations are consulted:
//! - Global: `~/.extbuild/config.toml` - User-wide defaults
//! - Project: `<source>/.extbuild/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. The CMake
//! environment variables (`CMAKE_GENERATOR`, `CMAKE_BUILD_PARALLEL_LEVEL`)
//! are resolved here once, at the boundary, into a [`BuildEnvironment`] that
//! the rest of the crate receives explicitly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable CMake reads to pick a generator.
pub const GENERATOR_ENV: &str = "CMAKE_GENERATOR";

/// Environment variable CMake reads for the default build parallelism.
pub const PARALLEL_LEVEL_ENV: &str = "CMAKE_BUILD_PARALLEL_LEVEL";

/// Extbuild configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// CMake generator (e.g. "Ninja", "Visual Studio 17 2022")
    pub generator: Option<String>,

    /// Value for CMAKE_BUILD_PARALLEL_LEVEL; suppresses `-j`
    pub parallel_level: Option<String>,

    /// Default number of parallel jobs passed as `-j<N>`
    pub jobs: Option<usize>,

    /// Build the Debug configuration
    pub debug: bool,

    /// Path to the cmake executable
    pub cmake: Option<PathBuf>,

    /// Interpreter handed to CMake as PYTHON_EXECUTABLE
    pub interpreter: Option<PathBuf>,

    /// CMake working directory
    pub build_temp: Option<PathBuf>,

    /// Where the built module is placed
    pub output_dir: Option<PathBuf>,

    /// Platform tag override (win-amd64, win32, ...)
    pub plat_name: Option<String>,

    /// Compiler family override (msvc, unix, mingw32)
    pub compiler: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        let b = other.build;
        if b.generator.is_some() {
            self.build.generator = b.generator;
        }
        if b.parallel_level.is_some() {
            self.build.parallel_level = b.parallel_level;
        }
        if b.jobs.is_some() {
            self.build.jobs = b.jobs;
        }
        if b.debug {
            self.build.debug = true;
        }
        if b.cmake.is_some() {
            self.build.cmake = b.cmake;
        }
        if b.interpreter.is_some() {
            self.build.interpreter = b.interpreter;
        }
        if b.build_temp.is_some() {
            self.build.build_temp = b.build_temp;
        }
        if b.output_dir.is_some() {
            self.build.output_dir = b.output_dir;
        }
        if b.plat_name.is_some() {
            self.build.plat_name = b.plat_name;
        }
        if b.compiler.is_some() {
            self.build.compiler = b.compiler;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`<source>/.extbuild/config.toml`)
/// 2. Global config (`~/.extbuild/config.toml`)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global config path (`~/.extbuild/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".extbuild").join("config.toml"))
}

/// Get the project config path (`<source>/.extbuild/config.toml`).
pub fn project_config_path(source_dir: &Path) -> PathBuf {
    source_dir.join(".extbuild").join("config.toml")
}

/// Generator and parallelism choices, resolved once and passed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Generator name; empty lets CMake choose
    pub generator: String,

    /// Parallel-build override; when present `-j` is never emitted
    pub parallel_level: Option<String>,

    /// Variables CMake must see because they did not come from its own environment
    pub exported: Vec<(String, String)>,
}

impl BuildEnvironment {
    /// Resolve against the real process environment.
    pub fn from_process(config: &BuildConfig, cli_generator: Option<&str>) -> Self {
        Self::resolve(config, cli_generator, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit variable lookup.
    ///
    /// Generator: CLI, then environment, then config. Parallel level:
    /// environment, then config. A variable that is set but empty still
    /// counts as present for the parallel level.
    pub fn resolve<F>(config: &BuildConfig, cli_generator: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut exported = Vec::new();

        let generator = if let Some(cli) = cli_generator {
            cli.to_string()
        } else if let Some(env) = lookup(GENERATOR_ENV) {
            env
        } else {
            config.generator.clone().unwrap_or_default()
        };
        let generator_from_env = cli_generator.is_none() && lookup(GENERATOR_ENV).is_some();
        if !generator.is_empty() && !generator_from_env {
            exported.push((GENERATOR_ENV.to_string(), generator.clone()));
        }

        let parallel_level = match lookup(PARALLEL_LEVEL_ENV) {
            Some(level) => Some(level),
            None => {
                if let Some(ref level) = config.parallel_level {
                    exported.push((PARALLEL_LEVEL_ENV.to_string(), level.clone()));
                }
                config.parallel_level.clone()
            }
        };

        BuildEnvironment {
            generator,
            parallel_level,
            exported,
        }
    }
}
