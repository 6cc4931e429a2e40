//! Archive backends for the zip/gzip/tgz fixtures.
//!
//! `ExternalArchiver` shells out to zip, gzip and tar with the working
//! directory set to the output folder, so archive members are stored under
//! their bare name. `NativeArchiver` builds the same containers in-process.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::ArchiveBackendKind;
use crate::logging::RunLogger;
use crate::tools::{Tool, ToolCommand, ToolError, ToolSet};

/// Container formats the compressed generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Gzip,
    TarGz,
}

/// Error producing an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("{0} command not found")]
    MissingTool(Tool),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Produces compressed containers from a file in a directory.
pub trait ArchiveBackend {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// External tools needed for `format`, in the order they are checked.
    fn required_tools(&self, format: ArchiveFormat) -> &'static [Tool];

    /// Wrap `dir/member` into `dir/archive_name`.
    fn create(
        &self,
        format: ArchiveFormat,
        dir: &Path,
        member: &str,
        archive_name: &str,
        logger: &RunLogger,
    ) -> ArchiveResult<()>;

    /// Gzip an in-memory buffer.
    fn gzip_bytes(&self, data: &[u8], logger: &RunLogger) -> ArchiveResult<Vec<u8>>;
}

/// Build the backend selected in configuration.
pub fn backend_for(kind: ArchiveBackendKind, tools: &ToolSet) -> Box<dyn ArchiveBackend> {
    match kind {
        ArchiveBackendKind::External => Box::new(ExternalArchiver::from_tools(tools)),
        ArchiveBackendKind::Native => Box::new(NativeArchiver),
    }
}

/// Archiver that shells out to zip, gzip and tar.
#[derive(Debug, Clone, Default)]
pub struct ExternalArchiver {
    zip: Option<PathBuf>,
    gzip: Option<PathBuf>,
    tar: Option<PathBuf>,
}

impl ExternalArchiver {
    pub fn from_tools(tools: &ToolSet) -> Self {
        Self {
            zip: tools.path(Tool::Zip).map(Path::to_path_buf),
            gzip: tools.path(Tool::Gzip).map(Path::to_path_buf),
            tar: tools.path(Tool::Tar).map(Path::to_path_buf),
        }
    }

    fn command(&self, tool: Tool) -> ArchiveResult<ToolCommand> {
        let path = match tool {
            Tool::Zip => self.zip.as_ref(),
            Tool::Gzip => self.gzip.as_ref(),
            Tool::Tar => self.tar.as_ref(),
            Tool::Ffmpeg => None,
        };
        path.map(|p| ToolCommand::new(tool.name(), p))
            .ok_or(ArchiveError::MissingTool(tool))
    }
}

impl ArchiveBackend for ExternalArchiver {
    fn name(&self) -> &'static str {
        "external"
    }

    fn required_tools(&self, format: ArchiveFormat) -> &'static [Tool] {
        match format {
            ArchiveFormat::Zip => &[Tool::Zip],
            ArchiveFormat::Gzip => &[Tool::Gzip],
            // tar -z pipes through gzip.
            ArchiveFormat::TarGz => &[Tool::Gzip, Tool::Tar],
        }
    }

    fn create(
        &self,
        format: ArchiveFormat,
        dir: &Path,
        member: &str,
        archive_name: &str,
        logger: &RunLogger,
    ) -> ArchiveResult<()> {
        match format {
            ArchiveFormat::Zip => {
                // zip updates an existing archive in place; start clean.
                remove_if_exists(&dir.join(archive_name))?;
                self.command(Tool::Zip)?
                    .args(["-q", archive_name, member])
                    .current_dir(dir)
                    .run(logger)?;
            }
            ArchiveFormat::Gzip => {
                let compressed = self
                    .command(Tool::Gzip)?
                    .args(["-c", member])
                    .current_dir(dir)
                    .run(logger)?;
                fs::write(dir.join(archive_name), compressed)?;
            }
            ArchiveFormat::TarGz => {
                self.command(Tool::Tar)?
                    .args(["-czf", archive_name, member])
                    .current_dir(dir)
                    .run(logger)?;
            }
        }
        Ok(())
    }

    fn gzip_bytes(&self, data: &[u8], logger: &RunLogger) -> ArchiveResult<Vec<u8>> {
        Ok(self
            .command(Tool::Gzip)?
            .arg("-c")
            .stdin_bytes(data)
            .run(logger)?)
    }
}

/// Archiver using the zip, flate2 and tar crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeArchiver;

impl ArchiveBackend for NativeArchiver {
    fn name(&self) -> &'static str {
        "native"
    }

    fn required_tools(&self, _format: ArchiveFormat) -> &'static [Tool] {
        &[]
    }

    fn create(
        &self,
        format: ArchiveFormat,
        dir: &Path,
        member: &str,
        archive_name: &str,
        logger: &RunLogger,
    ) -> ArchiveResult<()> {
        let source = dir.join(member);
        let archive = dir.join(archive_name);
        logger.debug(&format!(
            "Writing {} from {} in-process",
            archive.display(),
            source.display()
        ));

        match format {
            ArchiveFormat::Zip => {
                let contents = fs::read(&source)?;
                let mut writer = ZipWriter::new(File::create(&archive)?);
                let options =
                    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
                writer.start_file(member, options)?;
                writer.write_all(&contents)?;
                writer.finish()?;
            }
            ArchiveFormat::Gzip => {
                let contents = fs::read(&source)?;
                let mut encoder = GzBuilder::new()
                    .filename(member)
                    .write(File::create(&archive)?, Compression::default());
                encoder.write_all(&contents)?;
                encoder.finish()?;
            }
            ArchiveFormat::TarGz => {
                let encoder = GzEncoder::new(File::create(&archive)?, Compression::default());
                let mut builder = tar::Builder::new(encoder);
                builder.append_path_with_name(&source, member)?;
                builder.into_inner()?.finish()?;
            }
        }
        Ok(())
    }

    fn gzip_bytes(&self, data: &[u8], _logger: &RunLogger) -> ArchiveResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        Ok(encoder.finish()?)
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
