//! Category generators.
//!
//! Each generator owns one category of fixtures. Generators never return
//! per-file errors: those are recorded in the [`CategoryReport`] and the
//! generator moves on. An `Err` from [`Generator::generate`] means the
//! category could not continue at all (e.g. its directory is unusable).
//!
//! Every output goes through [`GenerationContext::produce`], which removes
//! the file again when producing it failed or left it empty, so a listed
//! file either exists with content or is absent with a warning.

mod audio;
mod compressed;
mod errors;
mod images;
mod other;
mod report;
mod video;

pub use audio::AudioGenerator;
pub use compressed::CompressedGenerator;
pub use errors::{GenerateError, GenerateResult};
pub use images::ImageGenerator;
pub use other::OtherGenerator;
pub use report::{CategoryReport, FileIssue};
pub use video::VideoGenerator;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveBackend, ArchiveFormat};
use crate::catalogue::{Category, FormatEntry, SyntheticSource};
use crate::config::PathSettings;
use crate::logging::RunLogger;
use crate::tools::{Tool, ToolCommand, ToolError, ToolSet};

/// A category generator.
pub trait Generator {
    /// Name for logging.
    fn name(&self) -> &str;

    fn category(&self) -> Category;

    /// Tools without which the whole category is skipped.
    fn required_tools(&self) -> &'static [Tool] {
        &[]
    }

    /// Produce the category's files, recording each outcome in `report`.
    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport)
        -> GenerateResult<()>;
}

/// Shared inputs for all generators in a run.
pub struct GenerationContext<'a> {
    pub paths: &'a PathSettings,
    pub tools: &'a ToolSet,
    pub logger: &'a RunLogger,
    pub archiver: &'a dyn ArchiveBackend,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        paths: &'a PathSettings,
        tools: &'a ToolSet,
        logger: &'a RunLogger,
        archiver: &'a dyn ArchiveBackend,
    ) -> Self {
        Self {
            paths,
            tools,
            logger,
            archiver,
        }
    }

    /// Create the output directory for `category` if needed.
    pub fn output_dir(&self, category: Category) -> GenerateResult<PathBuf> {
        let dir = self.paths.for_category(category);
        fs::create_dir_all(&dir).map_err(|e| GenerateError::io("create directory", &dir, e))?;
        Ok(dir)
    }

    /// Tools the archive backend needs for `format` that are not available.
    pub fn tools_missing_for(&self, format: ArchiveFormat) -> Vec<Tool> {
        self.tools.missing(self.archiver.required_tools(format))
    }

    /// Produce `output` with `make`, then check it is non-empty.
    ///
    /// On any failure the output path is removed so no stale or partial file
    /// is left behind.
    pub fn produce<F>(&self, output: &Path, make: F) -> GenerateResult<()>
    where
        F: FnOnce(&Path) -> GenerateResult<()>,
    {
        let result = make(output).and_then(|()| validate_output(output));
        if result.is_err() {
            discard(output);
        }
        result
    }

    /// Write a literal payload to `output`.
    pub fn write_payload(&self, output: &Path, contents: &[u8]) -> GenerateResult<()> {
        self.produce(output, |path| {
            fs::write(path, contents).map_err(|e| GenerateError::io("write", path, e))
        })
    }

    /// Run the transcoder for one catalogue entry, writing into `dir`.
    pub fn transcode(
        &self,
        entry: &FormatEntry,
        default_source: &SyntheticSource,
        dir: &Path,
    ) -> GenerateResult<()> {
        let output = dir.join(entry.filename);
        self.produce(&output, |path| {
            let ffmpeg = self
                .tools
                .path(Tool::Ffmpeg)
                .ok_or_else(|| ToolError::not_found(Tool::Ffmpeg.name()))?;
            ToolCommand::new(Tool::Ffmpeg.name(), ffmpeg)
                .args(entry.ffmpeg_args(default_source, path))
                .run(self.logger)?;
            Ok(())
        })
    }

    /// Transcode every entry of a table and record the outcomes.
    pub fn transcode_all(
        &self,
        entries: &[FormatEntry],
        default_source: &SyntheticSource,
        dir: &Path,
        report: &mut CategoryReport,
    ) {
        for entry in entries {
            let result = self.transcode(entry, default_source, dir);
            if entry.optional_codec {
                report.record_with_hint(
                    self.logger,
                    entry.filename,
                    "codec may not be available",
                    result,
                );
            } else {
                report.record(self.logger, entry.filename, result);
            }
        }
    }
}

/// A file that exists only while its generator runs.
///
/// Removed on drop, whichever way the generator exits.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `contents` to `path` and take ownership of the file.
    pub fn create(path: impl Into<PathBuf>, contents: &[u8]) -> GenerateResult<Self> {
        let path = path.into();
        fs::write(&path, contents).map_err(|e| GenerateError::io("write", &path, e))?;
        Ok(Self { path })
    }

    /// Take ownership of a path another step will write.
    pub fn claim(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        discard(&self.path);
    }
}

/// Fail unless `path` is a file with content.
pub fn validate_output(path: &Path) -> GenerateResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(GenerateError::invalid_output(path)),
    }
}

/// Remove `path` if it exists.
fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("Removed {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove {}: {}", path.display(), e),
    }
}
