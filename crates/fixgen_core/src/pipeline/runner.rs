//! Pipeline runner that executes generators in sequence.

use crate::config::GenerationSettings;
use crate::generators::{
    AudioGenerator, CategoryReport, CompressedGenerator, GenerationContext, Generator,
    ImageGenerator, OtherGenerator, VideoGenerator,
};

use super::types::RunSummary;

/// Pipeline that runs a sequence of generators.
///
/// For each generator the pipeline checks whether its category is enabled,
/// prints the phase line, checks its required tools, then runs it. Nothing
/// a generator does stops the pipeline.
pub struct Pipeline {
    /// Generators to run in order.
    generators: Vec<Box<dyn Generator>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// All five generators in run order: audio, video, images, compressed,
    /// other.
    pub fn standard() -> Self {
        Self::new()
            .with_generator(AudioGenerator)
            .with_generator(VideoGenerator)
            .with_generator(ImageGenerator)
            .with_generator(CompressedGenerator)
            .with_generator(OtherGenerator)
    }

    /// Add a generator to the pipeline.
    pub fn add_generator<G: Generator + 'static>(&mut self, generator: G) -> &mut Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Add a generator (builder pattern).
    pub fn with_generator<G: Generator + 'static>(mut self, generator: G) -> Self {
        self.add_generator(generator);
        self
    }

    /// Run every generator and collect their reports.
    pub fn run(&self, ctx: &GenerationContext<'_>, generation: &GenerationSettings) -> RunSummary {
        let mut summary = RunSummary::default();

        for generator in &self.generators {
            let category = generator.category();

            if !generation.is_enabled(category) {
                ctx.logger.debug(&format!(
                    "Skipping {} files (disabled in configuration)",
                    category.label()
                ));
                summary.push(CategoryReport::skipped(category, "disabled in configuration"));
                continue;
            }

            ctx.logger.phase(category.label());

            if let Some(tool) = ctx.tools.missing(generator.required_tools()).first() {
                ctx.logger.warn(&format!(
                    "{} not found. Skipping {} file generation.",
                    tool,
                    category.label()
                ));
                summary.push(CategoryReport::skipped(category, format!("{} not found", tool)));
                continue;
            }

            let mut report = CategoryReport::new(category);
            if let Err(e) = generator.generate(ctx, &mut report) {
                ctx.logger
                    .warn(&format!("{} generation stopped: {}", generator.name(), e));
                report.aborted = Some(e.to_string());
            }

            tracing::debug!(
                "{} finished: {} generated, {} failed",
                generator.name(),
                report.generated.len(),
                report.failed.len()
            );
            summary.push(report);
        }

        summary
    }

    /// Get the number of generators in the pipeline.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Get generator names in order.
    pub fn generator_names(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
