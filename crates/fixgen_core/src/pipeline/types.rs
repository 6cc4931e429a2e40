//! Run summary types.

use serde::Serialize;

use crate::catalogue::Category;
use crate::generators::CategoryReport;

/// Outcome of a full run, one report per category in run order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    pub fn push(&mut self, report: CategoryReport) {
        self.categories.push(report);
    }

    /// Report for `category`, if it was part of the run.
    pub fn report(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|r| r.category == category)
    }

    pub fn generated_count(&self) -> usize {
        self.categories.iter().map(|r| r.generated.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.categories.iter().map(|r| r.failed.len()).sum()
    }

    /// Whether any attempted file failed or any generator stopped early.
    pub fn has_failures(&self) -> bool {
        self.categories.iter().any(CategoryReport::has_failures)
    }

    /// One line per category.
    pub fn summary_lines(&self) -> Vec<String> {
        self.categories.iter().map(CategoryReport::summary_line).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
