//! Other binary fixtures, all written from literals.

use crate::catalogue::Category;
use crate::payloads::{binary_pattern, placeholder_bytes, PDF, PLACEHOLDER_EXTENSIONS, WASM};

use super::{CategoryReport, GenerateResult, GenerationContext, Generator};

pub struct OtherGenerator;

impl Generator for OtherGenerator {
    fn name(&self) -> &str {
        "Other"
    }

    fn category(&self) -> Category {
        Category::Other
    }

    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport) -> GenerateResult<()> {
        let dir = ctx.output_dir(Category::Other)?;

        let binary = binary_pattern();
        let literals: [(&str, &[u8]); 3] = [
            ("example.bin", binary.as_slice()),
            ("example.pdf", PDF),
            ("example.wasm", &WASM[..]),
        ];
        for (name, contents) in literals {
            let result = ctx.write_payload(&dir.join(name), contents);
            report.record(ctx.logger, name, result);
        }

        let placeholder = placeholder_bytes();
        for ext in PLACEHOLDER_EXTENSIONS {
            let name = format!("example.{ext}");
            let result = ctx.write_payload(&dir.join(&name), &placeholder);
            report.record(ctx.logger, &name, result);
        }

        Ok(())
    }
}
