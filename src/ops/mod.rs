//! High-level operations.
//!
//! This module contains the implementation of extbuild commands.

pub mod build_ext;
pub mod deps;

pub use build_ext::{build_extension, plan_args, BuildExtOptions, BuildReport};
pub use deps::{check_dependencies, force_install, DependencyReport};
