//! Error types for fixture generation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::payloads::PayloadError;
use crate::tools::ToolError;

/// Error producing one output file, or setting up a generator.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The external tool was missing or failed.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The archive backend failed.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A filesystem operation failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tool reported success but left no usable output.
    #[error("{} is missing or empty", .0.display())]
    InvalidOutput(PathBuf),

    /// Tool output could not be turned into the final payload.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl GenerateError {
    /// Create an I/O error with the operation and path it concerned.
    pub fn io(operation: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_output(path: impl AsRef<Path>) -> Self {
        Self::InvalidOutput(path.as_ref().to_path_buf())
    }
}

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;
