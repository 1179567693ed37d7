//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Extbuild - build native extension modules with CMake after provisioning vcpkg dependencies
#[derive(Parser)]
#[command(name = "extbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install missing dependencies, then configure and build the extension
    Build(BuildArgs),

    /// Print the CMake arguments that `build` would use
    Args(ArgsArgs),

    /// Inspect or install the vcpkg dependencies
    Deps(DepsArgs),
}

#[derive(Args, Clone)]
pub struct BuildArgs {
    /// Extension target name (exactly one)
    #[arg(long)]
    pub name: String,

    /// Extension source directory
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Directory for the built module (defaults to <source>/build/lib)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// CMake working directory (defaults to <source>/build/temp)
    #[arg(long)]
    pub build_temp: Option<PathBuf>,

    /// Build the Debug configuration
    #[arg(long)]
    pub debug: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Platform tag (win32, win-amd64, win-arm32, win-arm64, ...)
    #[arg(long)]
    pub plat_name: Option<String>,

    /// Compiler type (msvc, unix, mingw32)
    #[arg(long)]
    pub compiler: Option<String>,

    /// CMake generator (overrides CMAKE_GENERATOR)
    #[arg(long)]
    pub generator: Option<String>,

    /// Interpreter passed to CMake as PYTHON_EXECUTABLE
    #[arg(long)]
    pub interpreter: Option<PathBuf>,

    /// Path to cmake
    #[arg(long)]
    pub cmake: Option<PathBuf>,
}

#[derive(Args)]
pub struct ArgsArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct DepsArgs {
    #[command(subcommand)]
    pub command: DepsCommands,
}

#[derive(Subcommand)]
pub enum DepsCommands {
    /// Report which ledger entries vcpkg does not list
    Check(DepsTarget),

    /// Run the install script unconditionally
    Install(DepsTarget),
}

#[derive(Args)]
pub struct DepsTarget {
    /// Extension source directory
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,
}
