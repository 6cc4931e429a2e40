//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalogue::Category;
use crate::logging::{LogConfig, LogLevel};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Output directory layout.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// External tool commands.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Which categories run and how.
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// Identifies a settings section for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Logging,
    Tools,
    Generation,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Logging,
        ConfigSection::Tools,
        ConfigSection::Generation,
    ];

    /// TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Tools => "tools",
            ConfigSection::Generation => "generation",
        }
    }

    /// Comment written above the section in a freshly generated file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Output directories (relative to project_root)",
            ConfigSection::Logging => "# Logging configuration",
            ConfigSection::Tools => "# External tool commands (name on PATH or full path)",
            ConfigSection::Generation => "# Which file categories to generate",
        }
    }
}

/// Output directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Root the category directories are resolved against.
    #[serde(default = "default_project_root")]
    pub project_root: String,

    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    #[serde(default = "default_video_dir")]
    pub video_dir: String,

    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    #[serde(default = "default_other_dir")]
    pub other_dir: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_project_root() -> String {
    ".".to_string()
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_video_dir() -> String {
    "video".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_other_dir() -> String {
    "other".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            audio_dir: default_audio_dir(),
            video_dir: default_video_dir(),
            images_dir: default_images_dir(),
            other_dir: default_other_dir(),
            logs_folder: default_logs_folder(),
        }
    }
}

impl PathSettings {
    /// Project root as a path.
    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.project_root)
    }

    /// Resolve a configured directory against the project root.
    ///
    /// Absolute values are returned unchanged.
    pub fn resolve(&self, dir: &str) -> PathBuf {
        let path = Path::new(dir);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root().join(path)
        }
    }

    pub fn audio(&self) -> PathBuf {
        self.resolve(&self.audio_dir)
    }

    pub fn video(&self) -> PathBuf {
        self.resolve(&self.video_dir)
    }

    pub fn images(&self) -> PathBuf {
        self.resolve(&self.images_dir)
    }

    pub fn other(&self) -> PathBuf {
        self.resolve(&self.other_dir)
    }

    pub fn logs(&self) -> PathBuf {
        self.resolve(&self.logs_folder)
    }

    /// Output directory for a category. Archives share the other directory.
    pub fn for_category(&self, category: Category) -> PathBuf {
        match category {
            Category::Audio => self.audio(),
            Category::Video => self.video(),
            Category::Images => self.images(),
            Category::Compressed | Category::Other => self.other(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Prefix console lines with a timestamp.
    #[serde(default)]
    pub show_timestamps: bool,

    /// Also write a log file into the logs folder. Off unless asked for.
    #[serde(default)]
    pub log_to_file: bool,

    /// Number of stderr lines kept from a failed tool run.
    #[serde(default = "default_error_tail")]
    pub error_tail: usize,
}

fn default_true() -> bool {
    true
}

fn default_error_tail() -> usize {
    5
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            show_timestamps: false,
            log_to_file: false,
            error_tail: default_error_tail(),
        }
    }
}

impl LoggingSettings {
    /// Run logger configuration for these settings.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.level,
            error_tail: self.error_tail,
            show_timestamps: self.show_timestamps,
        }
    }
}

/// External tool commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,

    #[serde(default = "default_zip")]
    pub zip: String,

    #[serde(default = "default_gzip")]
    pub gzip: String,

    #[serde(default = "default_tar")]
    pub tar: String,
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

fn default_zip() -> String {
    "zip".to_string()
}

fn default_gzip() -> String {
    "gzip".to_string()
}

fn default_tar() -> String {
    "tar".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffmpeg: default_ffmpeg(),
            zip: default_zip(),
            gzip: default_gzip(),
            tar: default_tar(),
        }
    }
}

/// How zip/gzip/tgz containers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveBackendKind {
    /// Shell out to zip, gzip and tar.
    #[default]
    External,
    /// Build archives in-process.
    Native,
}

impl std::fmt::Display for ArchiveBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveBackendKind::External => write!(f, "external"),
            ArchiveBackendKind::Native => write!(f, "native"),
        }
    }
}

/// Which categories run and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_true")]
    pub audio: bool,

    #[serde(default = "default_true")]
    pub video: bool,

    #[serde(default = "default_true")]
    pub images: bool,

    #[serde(default = "default_true")]
    pub compressed: bool,

    #[serde(default = "default_true")]
    pub other: bool,

    /// Backend used for zip/gz/tgz/svgz output.
    #[serde(default)]
    pub archive_backend: ArchiveBackendKind,

    /// Exit with a failure status when any file could not be generated.
    #[serde(default)]
    pub strict_exit: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            audio: true,
            video: true,
            images: true,
            compressed: true,
            other: true,
            archive_backend: ArchiveBackendKind::External,
            strict_exit: false,
        }
    }
}

impl GenerationSettings {
    /// Whether the generator for `category` should run.
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Audio => self.audio,
            Category::Video => self.video,
            Category::Images => self.images,
            Category::Compressed => self.compressed,
            Category::Other => self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixture_layout() {
        let paths = PathSettings::default();
        assert_eq!(paths.audio(), PathBuf::from("./audio"));
        assert_eq!(paths.other(), PathBuf::from("./other"));
    }

    #[test]
    fn absolute_dirs_are_not_rebased() {
        let paths = PathSettings {
            project_root: "/project".to_string(),
            video_dir: "/elsewhere/video".to_string(),
            ..Default::default()
        };
        assert_eq!(paths.video(), PathBuf::from("/elsewhere/video"));
        assert_eq!(paths.images(), PathBuf::from("/project/images"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings =
            toml::from_str("[generation]\nvideo = false\narchive_backend = \"native\"\n").unwrap();
        assert!(!settings.generation.video);
        assert!(settings.generation.audio);
        assert_eq!(settings.generation.archive_backend, ArchiveBackendKind::Native);
        assert_eq!(settings.tools.ffmpeg, "ffmpeg");
    }

    #[test]
    fn log_file_is_opt_in() {
        assert!(!LoggingSettings::default().log_to_file);

        let settings: Settings = toml::from_str("[logging]\nshow_timestamps = true\n").unwrap();
        assert!(!settings.logging.log_to_file);

        let settings: Settings = toml::from_str("[logging]\nlog_to_file = true\n").unwrap();
        assert!(settings.logging.log_to_file);
    }
}
