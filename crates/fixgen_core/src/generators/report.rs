//! Per-category outcome of a run.

use serde::Serialize;

use crate::catalogue::Category;
use crate::logging::RunLogger;

use super::errors::GenerateResult;

/// A file that was not produced, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileIssue {
    pub file: String,
    pub reason: String,
}

/// What one generator produced.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    /// Files written, in order.
    pub generated: Vec<String>,
    /// Files attempted that failed.
    pub failed: Vec<FileIssue>,
    /// Files not attempted because a tool they need is missing.
    pub skipped_files: Vec<FileIssue>,
    /// Reason the whole category was skipped.
    pub skipped: Option<String>,
    /// Error that stopped the generator part way.
    pub aborted: Option<String>,
}

impl CategoryReport {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            generated: Vec::new(),
            failed: Vec::new(),
            skipped_files: Vec::new(),
            skipped: None,
            aborted: None,
        }
    }

    /// Report for a category that did not run.
    pub fn skipped(category: Category, reason: impl Into<String>) -> Self {
        Self {
            skipped: Some(reason.into()),
            ..Self::new(category)
        }
    }

    /// Record the outcome for `file` and print the matching console line.
    pub fn record(&mut self, logger: &RunLogger, file: &str, result: GenerateResult<()>) {
        match result {
            Ok(()) => self.record_generated(logger, file),
            Err(e) => {
                let reason = e.to_string();
                logger.warn(&format!("Could not generate {}: {}", file, reason));
                self.push_failed(file, reason);
            }
        }
    }

    /// Like [`record`](Self::record), but a failure prints `hint` instead of
    /// the error, which goes to the debug log.
    pub fn record_with_hint(
        &mut self,
        logger: &RunLogger,
        file: &str,
        hint: &str,
        result: GenerateResult<()>,
    ) {
        match result {
            Ok(()) => self.record_generated(logger, file),
            Err(e) => {
                let reason = e.to_string();
                logger.debug(&format!("{}: {}", file, reason));
                logger.warn(&format!("Could not generate {} ({})", file, hint));
                self.push_failed(file, reason);
            }
        }
    }

    pub fn record_generated(&mut self, logger: &RunLogger, file: &str) {
        logger.generated(file);
        self.generated.push(file.to_string());
    }

    /// Note a file left out because a tool is missing. Prints nothing.
    pub fn record_skipped_file(&mut self, file: &str, reason: impl Into<String>) {
        self.skipped_files.push(FileIssue {
            file: file.to_string(),
            reason: reason.into(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty() || self.aborted.is_some()
    }

    /// One-line summary, e.g. `audio: 15 generated, 0 failed`.
    pub fn summary_line(&self) -> String {
        if let Some(reason) = &self.skipped {
            return format!("{}: skipped: {}", self.category, reason);
        }

        let mut line = format!(
            "{}: {} generated, {} failed",
            self.category,
            self.generated.len(),
            self.failed.len()
        );
        if !self.skipped_files.is_empty() {
            line.push_str(&format!(", {} skipped", self.skipped_files.len()));
        }
        if let Some(error) = &self.aborted {
            line.push_str(&format!(" (stopped: {})", error));
        }
        line
    }

    fn push_failed(&mut self, file: &str, reason: String) {
        self.failed.push(FileIssue {
            file: file.to_string(),
            reason,
        });
    }
}
