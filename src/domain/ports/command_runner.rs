//! CommandRunner port - external process execution
//!
//! Packagers shell out to their tool through this trait so they can be
//! exercised in tests without the tool installed.

use std::path::Path;

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Short description used in error messages
    pub fn failure_summary(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{}: {}", status, stderr)
        }
    }
}

pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd` and wait for it to finish.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through `CommandOutput::success`.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> std::io::Result<CommandOutput>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_summary_includes_stderr() {
        let output = CommandOutput::failed(1, "", "npm ERR! boom\n");
        assert_eq!(output.failure_summary(), "exit code 1: npm ERR! boom");
    }

    #[test]
    fn failure_summary_without_stderr() {
        let output = CommandOutput::failed(2, "", "  ");
        assert_eq!(output.failure_summary(), "exit code 2");
    }
}
