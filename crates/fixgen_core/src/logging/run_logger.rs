//! Run logger with console callback output.
//!
//! The run logger produces the user-facing progress lines
//! (`Generated ...`, `Warning: ...`), mirrors them into `tracing`, and keeps
//! a tail buffer of recent tool output for failure messages.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;

use super::types::{ConsoleCallback, LogConfig, LogLevel, MessagePrefix};

/// Tracing target for events that mirror console lines.
///
/// The stderr layer drops this target since the console already shows it.
pub const CONSOLE_TARGET: &str = "fixgen::console";

/// Width of the `=` rule printed around the banner and summary.
pub const RULE_WIDTH: usize = 50;

/// Logger for one generation run.
pub struct RunLogger {
    config: LogConfig,
    callback: Arc<Mutex<Option<ConsoleCallback>>>,
    tail_buffer: Arc<Mutex<VecDeque<String>>>,
}

impl RunLogger {
    /// Create a run logger.
    ///
    /// Without a callback, messages only go to `tracing`.
    pub fn new(config: LogConfig, callback: Option<ConsoleCallback>) -> Self {
        let capacity = config.error_tail;
        Self {
            config,
            callback: Arc::new(Mutex::new(callback)),
            tail_buffer: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Logger that only emits `tracing` events.
    pub fn silent() -> Self {
        Self::new(LogConfig::default(), None)
    }

    /// Log a message at the specified level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !message.is_empty() {
            match level {
                LogLevel::Trace => tracing::trace!(target: CONSOLE_TARGET, "{}", message),
                LogLevel::Debug => tracing::debug!(target: CONSOLE_TARGET, "{}", message),
                LogLevel::Info => tracing::info!(target: CONSOLE_TARGET, "{}", message),
                LogLevel::Warn => tracing::warn!(target: CONSOLE_TARGET, "{}", message),
                LogLevel::Error => tracing::error!(target: CONSOLE_TARGET, "{}", message),
            }
        }

        if level < self.config.level {
            return;
        }
        self.output(&self.format_message(message));
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log a warning (`Warning: ...`).
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, &MessagePrefix::Warning.format(message));
    }

    /// Log a generated file (`Generated ...`).
    pub fn generated(&self, name: &str) {
        self.log(LogLevel::Info, &MessagePrefix::Generated.format(name));
    }

    /// Log the start of a category, preceded by a blank line.
    pub fn phase(&self, category: &str) {
        self.blank();
        self.log(LogLevel::Info, &MessagePrefix::Phase.format(category));
    }

    /// Log a command line about to be executed.
    pub fn command(&self, command: &str) {
        self.log(LogLevel::Debug, &MessagePrefix::Command.format(command));
    }

    /// Print a `=` rule.
    pub fn rule(&self) {
        self.info(&"=".repeat(RULE_WIDTH));
    }

    /// Print an empty line.
    pub fn blank(&self) {
        if self.config.level <= LogLevel::Info {
            self.output("");
        }
    }

    /// Record a line of tool output into the tail buffer.
    pub fn output_line(&self, line: &str) {
        if self.config.error_tail == 0 {
            return;
        }
        let mut buffer = self.tail_buffer.lock();
        if buffer.len() >= self.config.error_tail {
            buffer.pop_front();
        }
        buffer.push_back(line.to_string());
    }

    /// Current tail buffer contents.
    pub fn get_tail(&self) -> Vec<String> {
        self.tail_buffer.lock().iter().cloned().collect()
    }

    /// Clear the tail buffer.
    pub fn clear_tail(&self) {
        self.tail_buffer.lock().clear();
    }

    fn format_message(&self, message: &str) -> String {
        if self.config.show_timestamps && !message.is_empty() {
            let timestamp = Local::now().format("%H:%M:%S");
            format!("[{}] {}", timestamp, message)
        } else {
            message.to_string()
        }
    }

    fn output(&self, formatted: &str) {
        if let Some(ref callback) = *self.callback.lock() {
            callback(formatted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capturing(config: LogConfig) -> (RunLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let callback: ConsoleCallback = Box::new(move |msg| sink.lock().push(msg.to_string()));
        (RunLogger::new(config, Some(callback)), lines)
    }

    #[test]
    fn formats_console_lines() {
        let (logger, lines) = capturing(LogConfig::default());

        logger.phase("audio");
        logger.generated("example.wav");
        logger.warn("Could not generate example.spx: libspeex missing");

        let lines = lines.lock();
        assert_eq!(
            *lines,
            vec![
                "",
                "Generating audio files...",
                "Generated example.wav",
                "Warning: Could not generate example.spx: libspeex missing",
            ]
        );
    }

    #[test]
    fn debug_lines_filtered_at_info() {
        let (logger, lines) = capturing(LogConfig::default());

        logger.command("ffmpeg -version");
        logger.debug("details");

        assert!(lines.lock().is_empty());
    }

    #[test]
    fn rule_has_fixed_width() {
        let (logger, lines) = capturing(LogConfig::default());
        logger.rule();
        assert_eq!(lines.lock()[0].len(), RULE_WIDTH);
    }

    #[test]
    fn tail_buffer_maintains_limit() {
        let config = LogConfig {
            error_tail: 3,
            ..LogConfig::default()
        };
        let logger = RunLogger::new(config, None);

        for i in 0..10 {
            logger.output_line(&format!("Line {}", i));
        }

        assert_eq!(logger.get_tail(), vec!["Line 7", "Line 8", "Line 9"]);

        logger.clear_tail();
        assert!(logger.get_tail().is_empty());
    }
}
