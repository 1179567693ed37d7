//! Test utilities and mocks for extbuild unit tests.
//!
//! Provides a fake [`CommandRunner`] so the vcpkg probe, the install
//! script and the CMake steps can be exercised without spawning processes.
//!
//! # Example
//!
//! ```rust,ignore
//! use extbuild::test_support::{MockExecutor, MockProcessOutput};
//!
//! let mut exec = MockExecutor::new();
//! exec.expect_contains("vcpkg list", MockProcessOutput::success("fmt:x64-linux 10.1.1"));
//! ```

pub mod fixtures;

use anyhow::{bail, Result};

use crate::util::process::{CommandOutput, CommandRunner, ProcessBuilder};

pub use fixtures::*;

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Create an output with both stdout and stderr.
    pub fn with_output(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    fn to_command_output(&self) -> CommandOutput {
        CommandOutput {
            code: Some(self.status),
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        }
    }
}

impl Default for MockProcessOutput {
    fn default() -> Self {
        MockProcessOutput::success("")
    }
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command contains substring.
    Contains(String),
    /// Match any command.
    Any,
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
            CommandPattern::Any => true,
        }
    }
}

/// Expectation for a command execution.
#[derive(Debug, Clone)]
pub struct CommandExpectation {
    /// Pattern to match against commands.
    pub pattern: CommandPattern,
    /// Output to return when matched.
    pub output: MockProcessOutput,
    /// Number of times this expectation can be used (None = unlimited).
    pub times: Option<usize>,
    /// Number of times this expectation has been used.
    pub used: usize,
}

impl CommandExpectation {
    /// Create a new expectation.
    pub fn new(pattern: CommandPattern, output: MockProcessOutput) -> Self {
        CommandExpectation {
            pattern,
            output,
            times: None,
            used: 0,
        }
    }

    /// Set the number of times this expectation can be used.
    pub fn times(mut self, n: usize) -> Self {
        self.times = Some(n);
        self
    }

    /// Check if this expectation can still be used.
    pub fn available(&self) -> bool {
        match self.times {
            Some(n) => self.used < n,
            None => true,
        }
    }
}

/// Mock process executor for testing command execution.
///
/// Commands are matched against their `display_command()` string. An
/// unmatched command with no default output fails like a spawn error.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Vec<CommandExpectation>,
    calls: Vec<String>,
    commands: Vec<ProcessBuilder>,
    default_output: Option<MockProcessOutput>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&mut self, cmd: &str, output: MockProcessOutput) -> &mut Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::Exact(cmd.to_string()),
            output,
        ))
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&mut self, prefix: &str, output: MockProcessOutput) -> &mut Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::StartsWith(prefix.to_string()),
            output,
        ))
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&mut self, substring: &str, output: MockProcessOutput) -> &mut Self {
        self.expect_pattern(CommandExpectation::new(
            CommandPattern::Contains(substring.to_string()),
            output,
        ))
    }

    /// Add a custom expectation.
    pub fn expect_pattern(&mut self, expectation: CommandExpectation) -> &mut Self {
        self.expectations.push(expectation);
        self
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&mut self, output: MockProcessOutput) -> &mut Self {
        self.default_output = Some(output);
        self
    }

    /// Get all commands that were called, as display strings.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Get all commands that were called, with their cwd and env.
    pub fn commands(&self) -> &[ProcessBuilder] {
        &self.commands
    }

    /// Verify that all expectations with a specific count were satisfied.
    pub fn verify(&self) -> Result<()> {
        for (i, exp) in self.expectations.iter().enumerate() {
            if let Some(expected) = exp.times {
                if exp.used != expected {
                    bail!(
                        "expectation {} was used {} times, expected {}",
                        i,
                        exp.used,
                        expected
                    );
                }
            }
        }
        Ok(())
    }
}

impl CommandRunner for MockExecutor {
    fn run(&mut self, cmd: &ProcessBuilder) -> Result<CommandOutput> {
        let full_cmd = cmd.display_command();
        self.calls.push(full_cmd.clone());
        self.commands.push(cmd.clone());

        for exp in &mut self.expectations {
            if exp.pattern.matches(&full_cmd) && exp.available() {
                exp.used += 1;
                return Ok(exp.output.to_command_output());
            }
        }

        if let Some(ref default) = self.default_output {
            return Ok(default.to_command_output());
        }

        bail!("unexpected command: {}", full_cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_matches_in_order() {
        let mut exec = MockExecutor::new();
        exec.expect("vcpkg list", MockProcessOutput::success("zlib:x64-linux"));
        exec.expect_prefix("cmake", MockProcessOutput::failure(1, "oops"));

        let out = exec.run(&ProcessBuilder::new("vcpkg").arg("list")).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "zlib:x64-linux");

        let out = exec.run(&ProcessBuilder::new("cmake").arg(".")).unwrap();
        assert_eq!(out.code, Some(1));

        assert_eq!(exec.calls(), &["vcpkg list", "cmake ."]);
    }

    #[test]
    fn test_mock_executor_unexpected_command_errors() {
        let mut exec = MockExecutor::new();
        assert!(exec.run(&ProcessBuilder::new("ninja")).is_err());
    }

    #[test]
    fn test_expectation_times() {
        let mut exec = MockExecutor::new();
        exec.expect_pattern(
            CommandExpectation::new(CommandPattern::Any, MockProcessOutput::success("")).times(1),
        );

        assert!(exec.run(&ProcessBuilder::new("a")).is_ok());
        assert!(exec.run(&ProcessBuilder::new("b")).is_err());
        exec.verify().unwrap();
    }
}
