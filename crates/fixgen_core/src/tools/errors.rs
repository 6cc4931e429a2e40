//! Error types for external tool invocation.

use std::io;

use thiserror::Error;

/// Error from locating or running an external tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool is not on PATH or did not respond to `--version`.
    #[error("{tool} not found")]
    NotFound { tool: String },

    /// The process could not be started or waited on.
    #[error("Failed to run {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },
}

impl ToolError {
    pub fn not_found(tool: impl Into<String>) -> Self {
        Self::NotFound { tool: tool.into() }
    }

    pub fn spawn_failed(tool: impl Into<String>, source: io::Error) -> Self {
        Self::SpawnFailed {
            tool: tool.into(),
            source,
        }
    }

    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_context() {
        let err = ToolError::command_failed("ffmpeg", 1, "Unknown encoder 'libspeex'");
        let msg = err.to_string();
        assert!(msg.contains("ffmpeg"));
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("libspeex"));
    }

    #[test]
    fn not_found_is_short() {
        assert_eq!(ToolError::not_found("zip").to_string(), "zip not found");
    }
}
