//! Extbuild - build native extension modules with CMake
//!
//! This crate checks an extension's vcpkg dependencies against the ports
//! its bundled vcpkg reports, runs the install script when something is
//! missing, works out the CMake arguments for the host platform and
//! generator, and drives the configure and build steps.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;
pub mod vcpkg;

/// Test utilities and mocks for extbuild unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a fake command runner and source-tree
/// fixtures.
#[cfg(test)]
pub mod test_support;

pub use builder::{ArgsRequest, CMakeArgs};
pub use core::{
    BuildConfiguration, CompilerFamily, DependencySet, ExtBuildError, Extension,
    GeneratorDescriptor, OsFamily, PlatformDescriptor,
};
pub use ops::{build_extension, BuildExtOptions};
pub use util::process::{CommandRunner, SystemRunner};
