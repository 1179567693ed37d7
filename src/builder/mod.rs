//! CMake-driven extension builds.
//!
//! [`cmake_args`] decides what to pass to CMake; [`invoke`] runs it.

pub mod cmake_args;
pub mod invoke;

pub use cmake_args::{synthesize, ArgsRequest, CMakeArgs};
pub use invoke::CMakeInvoker;
