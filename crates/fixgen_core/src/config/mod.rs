//! Configuration management for the example file generator.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use fixgen_core::config::{ArchiveBackendKind, ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(".config/generate_files.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Audio folder: {}", config.settings().paths.audio().display());
//!
//! config.settings_mut().generation.archive_backend = ArchiveBackendKind::Native;
//! config.update_section(ConfigSection::Generation).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ArchiveBackendKind, ConfigSection, GenerationSettings, LoggingSettings, PathSettings,
    Settings, ToolSettings,
};

use std::path::PathBuf;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "FIXGEN_CONFIG";

/// Default config path: `.config/generate_files.toml` relative to the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("generate_files.toml")
}

/// Config path from the environment, falling back to the default.
pub fn config_path_from_env() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}
