//! Video fixtures: five seconds of the 640x480 test pattern.

use crate::catalogue::{Category, VIDEO_ENTRIES, VIDEO_SOURCE};
use crate::tools::Tool;

use super::{CategoryReport, GenerateResult, GenerationContext, Generator};

pub struct VideoGenerator;

impl Generator for VideoGenerator {
    fn name(&self) -> &str {
        "Video"
    }

    fn category(&self) -> Category {
        Category::Video
    }

    fn required_tools(&self) -> &'static [Tool] {
        &[Tool::Ffmpeg]
    }

    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport) -> GenerateResult<()> {
        let dir = ctx.output_dir(Category::Video)?;
        ctx.transcode_all(&VIDEO_ENTRIES, &VIDEO_SOURCE, &dir, report);
        Ok(())
    }
}
