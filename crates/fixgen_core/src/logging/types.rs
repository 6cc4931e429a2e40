//! Logging types and configuration.

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

/// Configuration for the run logger.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to output.
    pub level: LogLevel,
    /// Number of tool output lines kept for failure messages.
    pub error_tail: usize,
    /// Show timestamps in console output.
    pub show_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            error_tail: 5,
            show_timestamps: false,
        }
    }
}

/// Callback receiving each formatted console line.
pub type ConsoleCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Message prefix types for consistent formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePrefix {
    /// Shell command: `$ command`
    Command,
    /// Category marker: `Generating audio files...`
    Phase,
    /// Success: `Generated example.mp3`
    Generated,
    /// Warning: `Warning: ...`
    Warning,
}

impl MessagePrefix {
    /// Format a message with this prefix.
    pub fn format(&self, message: &str) -> String {
        match self {
            MessagePrefix::Command => format!("$ {}", message),
            MessagePrefix::Phase => format!("Generating {} files...", message),
            MessagePrefix::Generated => format!("Generated {}", message),
            MessagePrefix::Warning => format!("Warning: {}", message),
        }
    }
}
