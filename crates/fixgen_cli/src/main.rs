//! Example file generator - command line entry point
//!
//! Takes no arguments. It handles:
//! - Configuration loading (`.config/generate_files.toml`, or `$FIXGEN_CONFIG`)
//! - Logging initialization
//! - Running every generator and printing the summary

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use fixgen_core::config::{config_path_from_env, ConfigManager, Settings};
use fixgen_core::logging::{init_tracing, init_tracing_with_file, RunLogger};
use fixgen_core::pipeline::{generate_all, print_banner, print_summary};

fn load_settings(config_path: &Path) -> anyhow::Result<Settings> {
    let mut config_manager = ConfigManager::new(config_path);
    config_manager
        .load_or_create()
        .with_context(|| format!("cannot use {}", config_path.display()))?;
    Ok(config_manager.into_settings())
}

fn main() -> ExitCode {
    let config_path = config_path_from_env();
    let settings = match load_settings(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {:#}. Using defaults.", e);
            Settings::default()
        }
    };

    let level = settings.logging.level;
    let _log_guard = if settings.logging.log_to_file {
        init_tracing_with_file(level, &settings.paths.logs())
    } else {
        init_tracing(level);
        None
    };

    tracing::info!("Example file generator starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", fixgen_core::version());

    let logger = RunLogger::new(
        settings.logging.log_config(),
        Some(Box::new(|line: &str| println!("{}", line))),
    );

    print_banner(&logger, &settings.paths);
    let summary = generate_all(&settings, &logger);
    print_summary(&logger, &summary);

    tracing::info!(
        "Finished: {} generated, {} failed",
        summary.generated_count(),
        summary.failed_count()
    );

    if settings.generation.strict_exit && summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
