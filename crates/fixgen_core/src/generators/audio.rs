//! Audio fixtures: transcoded tones plus the literal MIDI files.

use crate::catalogue::{Category, AUDIO_ENTRIES, AUDIO_SOURCE};
use crate::payloads::{MIDI, MIDI_FILENAMES};
use crate::tools::Tool;

use super::{CategoryReport, GenerateResult, GenerationContext, Generator};

pub struct AudioGenerator;

impl Generator for AudioGenerator {
    fn name(&self) -> &str {
        "Audio"
    }

    fn category(&self) -> Category {
        Category::Audio
    }

    // The MIDI files need no tool but still belong to this category, so they
    // are skipped along with it.
    fn required_tools(&self) -> &'static [Tool] {
        &[Tool::Ffmpeg]
    }

    fn generate(&self, ctx: &GenerationContext<'_>, report: &mut CategoryReport) -> GenerateResult<()> {
        let dir = ctx.output_dir(Category::Audio)?;

        let (first, rest) = AUDIO_ENTRIES.split_at(1);
        ctx.transcode_all(first, &AUDIO_SOURCE, &dir, report);

        for name in MIDI_FILENAMES {
            let result = ctx.write_payload(&dir.join(name), &MIDI);
            report.record(ctx.logger, name, result);
        }

        ctx.transcode_all(rest, &AUDIO_SOURCE, &dir, report);
        Ok(())
    }
}
