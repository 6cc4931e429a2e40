//! Image fixtures: transcoded test-pattern frames, the assembled cursor,
//! and the literal SVG with its gzipped twin.

use std::fs;
use std::path::Path;

use crate::archive::ArchiveFormat;
use crate::catalogue::{
    Category, CURSOR_BITMAP, CURSOR_FILENAME, IMAGE_ENTRIES, IMAGE_SOURCE, SVGZ_FILENAME,
    SVG_FILENAME,
};
use crate::payloads::{build_cursor, SVG};
use crate::tools::Tool;

use super::{CategoryReport, GenerateError, GenerateResult, GenerationContext, Generator, ScratchFile};

pub struct ImageGenerator;

impl Generator for ImageGenerator {
    fn name(&self) -> &str {
        "Images"
    }

    fn category(&self) -> Category {
        Category::Images
    }

    fn required_tools(&self) -> &'static [Tool] {
        &[Tool::Ffmpeg]
    }

    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport) -> GenerateResult<()> {
        let dir = ctx.output_dir(Category::Images)?;

        ctx.transcode_all(&IMAGE_ENTRIES, &IMAGE_SOURCE, &dir, report);

        let cursor = write_cursor(ctx, &dir);
        report.record(ctx.logger, CURSOR_FILENAME, cursor);

        let svg = ctx.write_payload(&dir.join(SVG_FILENAME), SVG.as_bytes());
        report.record(ctx.logger, SVG_FILENAME, svg);

        let missing = ctx.tools_missing_for(ArchiveFormat::Gzip);
        if let Some(tool) = missing.first() {
            ctx.logger
                .debug(&format!("Skipping {}: {} not available", SVGZ_FILENAME, tool));
            report.record_skipped_file(SVGZ_FILENAME, format!("{} command not found", tool));
        } else {
            let svgz = ctx.produce(&dir.join(SVGZ_FILENAME), |path| {
                let compressed = ctx.archiver.gzip_bytes(SVG.as_bytes(), ctx.logger)?;
                fs::write(path, compressed).map_err(|e| GenerateError::io("write", path, e))
            });
            report.record(ctx.logger, SVGZ_FILENAME, svgz);
        }

        Ok(())
    }
}

/// Render a 32x32 bitmap and wrap it in a cursor header.
fn write_cursor(ctx: &GenerationContext<'_>, dir: &Path) -> GenerateResult<()> {
    let bitmap = ScratchFile::claim(dir.join(CURSOR_BITMAP.filename));

    ctx.produce(&dir.join(CURSOR_FILENAME), |path| {
        ctx.transcode(&CURSOR_BITMAP, &IMAGE_SOURCE, dir)?;
        let bmp = fs::read(bitmap.path()).map_err(|e| GenerateError::io("read", bitmap.path(), e))?;
        let cursor = build_cursor(&bmp)?;
        fs::write(path, cursor).map_err(|e| GenerateError::io("write", path, e))
    })
}
