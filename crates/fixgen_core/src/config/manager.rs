//! Config manager for loading, saving, and atomic updates.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Section-level updates (only modified section is changed)
//! - Missing keys are filled with defaults and written back

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::{DocumentMut, Item};

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages generator configuration.
pub struct ConfigManager {
    config_path: PathBuf,
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Changes stay in memory until `save()` or `update_section()`.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Consume the manager and return the loaded settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        Ok(())
    }

    /// Load config from file, creating it with defaults if it doesn't exist.
    ///
    /// If the file is missing keys or sections they are filled in and the
    /// file is written back.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let (settings, was_modified) = self.parse_and_check(&content)?;
            self.settings = settings;

            if was_modified {
                tracing::debug!(
                    "Config {} was incomplete, writing defaults back",
                    self.config_path.display()
                );
                self.save()?;
            }
        } else {
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Parse content and report whether it differs from its normalized form.
    fn parse_and_check(&self, content: &str) -> ConfigResult<(Settings, bool)> {
        let doc: DocumentMut = content.parse()?;
        let settings: Settings = toml::from_str(content)?;

        let known: Vec<&str> = ConfigSection::ALL.iter().map(|s| s.table_name()).collect();
        let has_unknown = doc.iter().any(|(key, _)| !known.contains(&key));

        let missing_keys = ConfigSection::ALL.iter().any(|section| {
            let Some(table) = doc.get(section.table_name()).and_then(Item::as_table) else {
                return true;
            };
            match self.section_document(*section) {
                Ok(expected) => expected
                    .iter()
                    .any(|(key, _)| !table.contains_key(key)),
                Err(_) => false,
            }
        });

        Ok((settings, has_unknown || missing_keys))
    }

    /// Serialize one section of the in-memory settings as a document.
    fn section_document(&self, section: ConfigSection) -> ConfigResult<DocumentMut> {
        let section_toml = match section {
            ConfigSection::Paths => toml::to_string_pretty(&self.settings.paths)?,
            ConfigSection::Logging => toml::to_string_pretty(&self.settings.logging)?,
            ConfigSection::Tools => toml::to_string_pretty(&self.settings.tools)?,
            ConfigSection::Generation => toml::to_string_pretty(&self.settings.generation)?,
        };
        Ok(section_toml.parse()?)
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Update a specific section atomically.
    ///
    /// Re-reads the file from disk, replaces only the given section, and
    /// writes back, leaving the other sections (and their comments) as they
    /// are on disk.
    pub fn update_section(&mut self, section: ConfigSection) -> ConfigResult<()> {
        let current_content = if self.config_path.exists() {
            fs::read_to_string(&self.config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = if current_content.is_empty() {
            DocumentMut::new()
        } else {
            current_content.parse()?
        };

        let section_table = self.section_document(section)?.as_table().clone();
        doc[section.table_name()] = Item::Table(section_table);

        self.atomic_write(&doc.to_string())?;

        Ok(())
    }

    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();

        output.push_str("# Example file generator configuration\n");
        output.push_str(
            "# This file is auto-generated. Comments may be preserved on section updates.\n\n",
        );

        for (i, section) in ConfigSection::ALL.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(section.comment());
            output.push('\n');
            output.push_str(&format!("[{}]\n", section.table_name()));
            let content = self.section_document(*section)?.to_string();
            for line in content.lines() {
                output.push_str(line);
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Write content to the config file via a temp file and rename.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}
