//! Compressed fixtures: a sample text wrapped in zip, gzip and tar+gzip.

use crate::archive::ArchiveFormat;
use crate::catalogue::Category;
use crate::payloads::sample_text;
use crate::tools::Tool;

use super::{CategoryReport, GenerateResult, GenerationContext, Generator, ScratchFile};

/// Scratch file that becomes the archive member.
pub const SAMPLE_FILENAME: &str = "sample.txt";

/// Archives in run order.
pub const ARCHIVES: [(ArchiveFormat, &str); 3] = [
    (ArchiveFormat::Zip, "example.zip"),
    (ArchiveFormat::Gzip, "example.gz"),
    (ArchiveFormat::TarGz, "example.tgz"),
];

pub struct CompressedGenerator;

impl Generator for CompressedGenerator {
    fn name(&self) -> &str {
        "Compressed"
    }

    fn category(&self) -> Category {
        Category::Compressed
    }

    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport) -> GenerateResult<()> {
        let dir = ctx.output_dir(Category::Compressed)?;
        let _sample = ScratchFile::create(dir.join(SAMPLE_FILENAME), sample_text().as_bytes())?;

        // Each missing tool is reported once even if several archives need it.
        let mut reported: Vec<Tool> = Vec::new();

        for (format, name) in ARCHIVES {
            if let Some(&tool) = ctx.tools_missing_for(format).first() {
                if !reported.contains(&tool) {
                    ctx.logger.warn(&format!("{} command not found", tool));
                    reported.push(tool);
                }
                report.record_skipped_file(name, format!("{} command not found", tool));
                continue;
            }

            let result = ctx.produce(&dir.join(name), |_| {
                ctx.archiver
                    .create(format, &dir, SAMPLE_FILENAME, name, ctx.logger)?;
                Ok(())
            });
            report.record(ctx.logger, name, result);
        }

        Ok(())
    }
}
