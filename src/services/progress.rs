//! Progress reporting service
//!
//! Frontends decide how progress is surfaced. The console reporter prints the
//! two user-facing status lines (start and finish) to stdout and routes every
//! other stage to `tracing`.

use crate::types::ProcessingTimings;
use instant::Instant;

/// Progress stages of a single removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Loading and decoding input image
    ImageLoading,
    /// Running the corner-seeded flood fill
    BackgroundRemoval,
    /// Encoding and writing the result
    FileSaving,
    /// Processing completed
    Completed,
}

impl ProcessingStage {
    /// Get a human-readable description of the processing stage
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ProcessingStage::ImageLoading => "Loading input image",
            ProcessingStage::BackgroundRemoval => "Removing background",
            ProcessingStage::FileSaving => "Saving result",
            ProcessingStage::Completed => "Processing completed",
        }
    }

    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        match self {
            ProcessingStage::ImageLoading => 10,
            ProcessingStage::BackgroundRemoval => 60,
            ProcessingStage::FileSaving => 90,
            ProcessingStage::Completed => 100,
        }
    }

    /// Stages whose description is shown to the user as a status line
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ProcessingStage::ImageLoading | ProcessingStage::Completed
        )
    }
}

/// Progress update containing stage and timing information
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Current processing stage
    pub stage: ProcessingStage,
    /// Progress percentage (0-100)
    pub progress: u8,
    /// Human-readable stage description
    pub description: String,
    /// Elapsed time since processing started (milliseconds)
    pub elapsed_ms: u64,
}

impl ProgressUpdate {
    /// Create an update carrying the stage's default description
    #[must_use]
    pub fn new(stage: ProcessingStage, start_time: Instant) -> Self {
        Self::with_description(stage, stage.description().to_string(), start_time)
    }

    /// Create an update with a custom description
    #[must_use]
    pub fn with_description(stage: ProcessingStage, description: String, start_time: Instant) -> Self {
        Self {
            progress: stage.progress_percentage(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
            stage,
            description,
        }
    }
}

/// Trait for reporting progress during background removal
pub trait ProgressReporter: Send + Sync {
    /// Report a progress update
    fn report_progress(&self, update: ProgressUpdate);

    /// Report processing completion with final timings
    fn report_completion(&self, timings: &ProcessingTimings);

    /// Report an error during processing
    fn report_error(&self, stage: ProcessingStage, error: &str);
}

/// No-op progress reporter that discards all progress updates
pub struct NoOpProgressReporter;

impl ProgressReporter for NoOpProgressReporter {
    fn report_progress(&self, _update: ProgressUpdate) {}

    fn report_completion(&self, _timings: &ProcessingTimings) {}

    fn report_error(&self, _stage: ProcessingStage, _error: &str) {}
}

/// Console reporter: status lines on stdout, everything else through `tracing`
pub struct ConsoleProgressReporter;

impl ProgressReporter for ConsoleProgressReporter {
    fn report_progress(&self, update: ProgressUpdate) {
        if update.stage.is_user_facing() {
            println!("{}", update.description);
        } else {
            tracing::debug!(
                "[{}%] {} ({}ms elapsed)",
                update.progress,
                update.description,
                update.elapsed_ms
            );
        }
    }

    fn report_completion(&self, timings: &ProcessingTimings) {
        tracing::debug!(
            decode_ms = timings.image_decode_ms,
            fill_ms = timings.fill_ms,
            encode_ms = ?timings.image_encode_ms,
            total_ms = timings.total_ms,
            "Background removal completed"
        );
    }

    fn report_error(&self, stage: ProcessingStage, error: &str) {
        tracing::error!("Error during {}: {}", stage.description(), error);
    }
}

/// Progress tracker that manages timing and progress reporting
pub struct ProgressTracker {
    reporter: Box<dyn ProgressReporter>,
    start_time: Instant,
    current_stage: Option<ProcessingStage>,
}

impl ProgressTracker {
    /// Create a tracker reporting through `reporter`
    #[must_use]
    pub fn new(reporter: Box<dyn ProgressReporter>) -> Self {
        Self {
            reporter,
            start_time: Instant::now(),
            current_stage: None,
        }
    }

    /// Create a tracker that discards every update
    #[must_use]
    pub fn no_op() -> Self {
        Self::new(Box::new(NoOpProgressReporter))
    }

    /// Create a tracker that prints status lines to stdout
    #[must_use]
    pub fn console() -> Self {
        Self::new(Box::new(ConsoleProgressReporter))
    }

    /// Restart the clock and forget the current stage
    pub fn reset(&mut self) {
        self.start_time = Instant::now();
        self.current_stage = None;
    }

    /// Report a stage with its default description
    pub fn report_stage(&mut self, stage: ProcessingStage) {
        self.current_stage = Some(stage);
        self.reporter
            .report_progress(ProgressUpdate::new(stage, self.start_time));
    }

    /// Report a stage with a custom description
    pub fn report_stage_with_description(&mut self, stage: ProcessingStage, description: String) {
        self.current_stage = Some(stage);
        self.reporter.report_progress(ProgressUpdate::with_description(
            stage,
            description,
            self.start_time,
        ));
    }

    /// Report the final timings of a successful run
    pub fn report_completion(&self, timings: &ProcessingTimings) {
        self.reporter.report_completion(timings);
    }

    /// Report an error against the most recent stage
    pub fn report_error(&self, error: &str) {
        let stage = self.current_stage.unwrap_or(ProcessingStage::ImageLoading);
        self.reporter.report_error(stage, error);
    }

    /// Most recently reported stage, if any
    #[must_use]
    pub fn current_stage(&self) -> Option<ProcessingStage> {
        self.current_stage
    }
}
