//! Core data structures.

pub mod configuration;
pub mod dependency;
pub mod error;
pub mod extension;
pub mod generator;
pub mod platform;

pub use configuration::BuildConfiguration;
pub use dependency::DependencySet;
pub use error::ExtBuildError;
pub use extension::Extension;
pub use generator::GeneratorDescriptor;
pub use platform::{CompilerFamily, OsFamily, PlatformDescriptor, VsPlatform};
