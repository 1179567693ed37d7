//! Command implementations

pub mod args;
pub mod build;
pub mod deps;
