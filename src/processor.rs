//! Background removal processor
//!
//! `BackgroundRemover` ties together loading, the corner-seeded fill and
//! saving. Nothing is written to disk until the fill has finished, so a
//! failure never leaves a partial output behind.

use crate::{
    config::RemovalConfig,
    error::Result,
    flood_fill::flood_fill_background,
    services::{ImageIOService, OutputFormatHandler, ProcessingStage, ProgressReporter, ProgressTracker},
    types::{FillStats, ProcessingTimings, RemovalResult},
};
use image::{DynamicImage, RgbaImage};
use instant::Instant;
use std::path::Path;
use tracing::{debug, instrument, span, Level};

/// Single-image background remover
pub struct BackgroundRemover {
    config: RemovalConfig,
    tracker: ProgressTracker,
}

impl BackgroundRemover {
    /// Create a remover; status lines go to stdout when `config.report_progress` is set
    ///
    /// # Errors
    /// - Invalid configuration
    pub fn new(config: RemovalConfig) -> Result<Self> {
        config.validate()?;
        let tracker = if config.report_progress {
            ProgressTracker::console()
        } else {
            ProgressTracker::no_op()
        };
        Ok(Self { config, tracker })
    }

    /// Create a remover that reports through a custom reporter
    pub fn with_reporter(config: RemovalConfig, reporter: Box<dyn ProgressReporter>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tracker: ProgressTracker::new(reporter),
        })
    }

    /// Remover for in-memory use: default configuration, no progress output
    pub(crate) fn silent() -> Self {
        Self {
            config: RemovalConfig {
                report_progress: false,
                ..RemovalConfig::default()
            },
            tracker: ProgressTracker::no_op(),
        }
    }

    /// Get the active configuration
    #[must_use]
    pub fn config(&self) -> &RemovalConfig {
        &self.config
    }

    /// Remove the background of an in-memory image
    ///
    /// The image is converted to RGBA8 first; no I/O happens.
    #[instrument(skip(self, image), fields(dimensions = %format!("{}x{}", image.width(), image.height())))]
    pub fn process_image(&mut self, image: &DynamicImage) -> RemovalResult {
        let total_start = Instant::now();
        let mut timings = ProcessingTimings::new();

        let mut rgba = image.to_rgba8();
        let stats = self.fill(&mut rgba, &mut timings);

        timings.total_ms = total_start.elapsed().as_millis() as u64;
        RemovalResult::new(rgba, stats, timings)
    }

    /// Load `input_path`, clear its border-connected background and write
    /// the result to `output_path`
    ///
    /// # Errors
    /// - `Io` if the input is missing or the output cannot be written
    /// - `Image` if the input cannot be decoded
    /// - `UnsupportedFormat` if the output format cannot store transparency
    #[instrument(
        skip(self, input_path, output_path),
        fields(
            input = %input_path.as_ref().display(),
            output = %output_path.as_ref().display()
        )
    )]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<RemovalResult> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        self.tracker.reset();
        self.tracker.report_stage_with_description(
            ProcessingStage::ImageLoading,
            format!("Processing {}...", input_path.display()),
        );

        let result = self.run_file(input_path, output_path);
        match &result {
            Ok(removal) => {
                self.tracker.report_stage_with_description(
                    ProcessingStage::Completed,
                    format!("Saved transparent logo to {}", output_path.display()),
                );
                self.tracker.report_completion(&removal.timings);
            },
            Err(e) => self.tracker.report_error(&e.to_string()),
        }
        result
    }

    fn run_file(&mut self, input_path: &Path, output_path: &Path) -> Result<RemovalResult> {
        let total_start = Instant::now();
        let mut timings = ProcessingTimings::new();

        // Resolve before decoding so an unusable output path fails fast
        let format = OutputFormatHandler::resolve(self.config.output_format, output_path)?;

        let decode_start = Instant::now();
        let image = ImageIOService::load_image(input_path)?;
        timings.image_decode_ms = decode_start.elapsed().as_millis() as u64;
        debug!(
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            decode_ms = timings.image_decode_ms,
            "Input decoded"
        );

        let mut rgba = image.to_rgba8();
        drop(image);
        let stats = self.fill(&mut rgba, &mut timings);

        self.tracker.report_stage(ProcessingStage::FileSaving);
        let encode_start = Instant::now();
        {
            let _span = span!(Level::DEBUG, "save", format = %format).entered();
            ImageIOService::save_image(&rgba, output_path, format, self.config.create_output_dirs)?;
        }
        timings.image_encode_ms = Some(encode_start.elapsed().as_millis() as u64);
        timings.total_ms = total_start.elapsed().as_millis() as u64;

        Ok(RemovalResult::new(rgba, stats, timings))
    }

    fn fill(&mut self, rgba: &mut RgbaImage, timings: &mut ProcessingTimings) -> FillStats {
        self.tracker.report_stage(ProcessingStage::BackgroundRemoval);

        let (width, height) = rgba.dimensions();
        let _span = span!(Level::DEBUG, "flood_fill", width, height).entered();

        let fill_start = Instant::now();
        let stats = flood_fill_background(rgba);
        timings.fill_ms = fill_start.elapsed().as_millis() as u64;

        debug!(
            seeds = stats.seeds,
            cleared = stats.cleared_pixels,
            rejected = stats.rejected_checks,
            fill_ms = timings.fill_ms,
            "Flood fill finished"
        );
        stats
    }
}
