//! Fixgen Core - example fixture file generation
//!
//! This crate contains all generation logic with zero console dependencies.
//! It shells out to external tools (ffmpeg, zip, gzip, tar) to produce a
//! fixed catalogue of media files and writes literal payloads for the
//! formats those tools cannot produce.

pub mod archive;
pub mod catalogue;
pub mod config;
pub mod generators;
pub mod logging;
pub mod payloads;
pub mod pipeline;
pub mod tools;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
