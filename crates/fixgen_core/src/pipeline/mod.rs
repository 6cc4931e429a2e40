//! Run driver.
//!
//! [`generate_all`] is the whole program minus process setup: it probes the
//! tools, picks the archive backend, runs the five generators and returns
//! the summary. The banner and closing lines are separate so callers decide
//! what surrounds the run.

mod runner;
mod types;

pub use runner::Pipeline;
pub use types::RunSummary;

use std::fs;

use crate::archive::backend_for;
use crate::config::{PathSettings, Settings};
use crate::generators::GenerationContext;
use crate::logging::RunLogger;
use crate::tools::ToolSet;

/// Probe tools and run every enabled generator.
pub fn generate_all(settings: &Settings, logger: &RunLogger) -> RunSummary {
    let tools = ToolSet::probe(&settings.tools);
    run_with_tools(settings, &tools, logger)
}

/// Run every enabled generator against an already probed tool set.
pub fn run_with_tools(settings: &Settings, tools: &ToolSet, logger: &RunLogger) -> RunSummary {
    create_output_dirs(&settings.paths, logger);

    let archiver = backend_for(settings.generation.archive_backend, tools);
    logger.debug(&format!("Archive backend: {}", archiver.name()));

    let ctx = GenerationContext::new(&settings.paths, tools, logger, archiver.as_ref());
    let summary = Pipeline::standard().run(&ctx, &settings.generation);

    match summary.to_json() {
        Ok(json) => tracing::debug!("Run summary:\n{}", json),
        Err(e) => tracing::warn!("Failed to serialize run summary: {}", e),
    }
    summary
}

/// Create the audio, video, images and other directories.
///
/// Runs before any generator so the layout exists even for skipped or
/// disabled categories. A directory that cannot be created is a warning;
/// its generator reports the failure again when it runs.
pub fn create_output_dirs(paths: &PathSettings, logger: &RunLogger) {
    for dir in [paths.audio(), paths.video(), paths.images(), paths.other()] {
        if let Err(e) = fs::create_dir_all(&dir) {
            logger.warn(&format!("Could not create {}: {}", dir.display(), e));
        }
    }
}

/// Print the opening banner with the output layout.
pub fn print_banner(logger: &RunLogger, paths: &PathSettings) {
    logger.info("Generating example files...");
    logger.rule();
    logger.info(&format!("Project root: {}", paths.root().display()));
    logger.info(&format!("Audio directory: {}", paths.audio().display()));
    logger.info(&format!("Video directory: {}", paths.video().display()));
    logger.info(&format!("Images directory: {}", paths.images().display()));
    logger.info(&format!("Other directory: {}", paths.other().display()));
    logger.rule();
}

/// Print the per-category summary and the closing line.
pub fn print_summary(logger: &RunLogger, summary: &RunSummary) {
    logger.blank();
    logger.rule();
    for line in summary.summary_lines() {
        logger.info(&line);
    }
    logger.rule();
    logger.info("File generation complete!");
}
