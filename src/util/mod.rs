//! Shared utilities

pub mod config;
pub mod fs;
pub mod process;

pub use config::{BuildEnvironment, Config};
pub use process::{CommandOutput, CommandRunner, ProcessBuilder, SystemRunner};
