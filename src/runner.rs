//! Execution of the external scanning tool

use crate::error::{CheckError, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Program launched when nothing else is configured
pub const DEFAULT_TOOL: &str = "holehe";

/// Captured output of one tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: i32,
}

impl RunOutput {
    #[must_use]
    pub const fn run_failed(&self) -> bool {
        self.exit_code != 0
    }
}

/// Anything that can run the scanning tool for one email
pub trait Runner {
    fn run(&self, email: &str) -> Result<RunOutput>;
}

/// How to invoke the scanning tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Program name or path
    pub program: String,

    /// Extra arguments placed before the email
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            args: Vec::new(),
        }
    }
}

impl ToolConfig {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

/// Runs the tool as a child process, waiting for it to exit
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    config: ToolConfig,
}

impl CommandRunner {
    #[must_use]
    pub const fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ToolConfig {
        &self.config
    }
}

impl Runner for CommandRunner {
    fn run(&self, email: &str) -> Result<RunOutput> {
        debug!("Running {} for {email}", self.config.program);

        // Both pipes are drained concurrently by `output()`.
        let output = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(email)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CheckError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        let exit_code = exit_code_from_status(output.status);
        debug!(
            "{} exited with {exit_code} ({} bytes stdout, {} bytes stderr)",
            self.config.program,
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(RunOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code,
        })
    }
}

/// Extract an exit code from a process status, mapping signals to 128+N on Unix.
fn exit_code_from_status(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .unwrap_or_else(|| status.signal().map_or(1, |s| 128 + s))
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}
