//! Error types for account presence checks

use thiserror::Error;

/// Errors that can occur while running the scanning tool or reading its output
#[derive(Error, Debug)]
pub enum CheckError {
    /// The scanning tool exited with a non-zero status
    #[error("Error running scanning tool: {stderr}")]
    ToolExecution {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The scanning tool could not be launched at all
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Captured output could not be interpreted
    #[error("Error checking email: {0}")]
    Decode(String),
}

impl CheckError {
    /// True for failures of the external tool itself, as opposed to
    /// failures interpreting what it printed.
    #[must_use]
    pub const fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ToolExecution { .. } | Self::Spawn { .. })
    }
}

/// Result type for presence check operations
pub type Result<T> = std::result::Result<T, CheckError>;
