//! Core types for background removal results

use crate::{
    config::OutputFormat,
    error::Result,
    services::{ImageIOService, OutputFormatHandler},
};
use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Counters collected while flood filling one image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillStats {
    /// Distinct corner seeds enqueued (4, or fewer on 1-pixel-wide images)
    pub seeds: usize,
    /// Pixels whose alpha was cleared; equals the final visited set size
    pub cleared_pixels: usize,
    /// Neighbour evaluations the classifier rejected (rejections are not memoized)
    pub rejected_checks: usize,
}

/// Wall-clock breakdown of one removal, in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingTimings {
    /// Image loading and decoding from file
    pub image_decode_ms: u64,
    /// Flood fill traversal
    pub fill_ms: u64,
    /// Final image encoding (only when saved)
    pub image_encode_ms: Option<u64>,
    /// Total end-to-end processing time
    pub total_ms: u64,
}

impl ProcessingTimings {
    /// Create zeroed timings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of removing the background from a single image
#[derive(Debug, Clone)]
pub struct RemovalResult {
    /// RGBA image with background pixels fully transparent
    pub image: RgbaImage,
    /// Traversal counters
    pub stats: FillStats,
    /// Timing breakdown
    pub timings: ProcessingTimings,
}

impl RemovalResult {
    /// Create a new removal result
    #[must_use]
    pub fn new(image: RgbaImage, stats: FillStats, timings: ProcessingTimings) -> Self {
        Self {
            image,
            stats,
            timings,
        }
    }

    /// Width and height of the processed image
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Traversal counters of the fill
    #[must_use]
    pub fn stats(&self) -> &FillStats {
        &self.stats
    }

    /// Get processing timings
    #[must_use]
    pub fn timings(&self) -> &ProcessingTimings {
        &self.timings
    }

    /// Number of pixels with alpha 0, including any that were transparent on input
    #[must_use]
    pub fn transparent_pixel_count(&self) -> usize {
        self.image.pixels().filter(|p| p[3] == 0).count()
    }

    /// Save using the format implied by the path's extension
    ///
    /// # Errors
    /// - `UnsupportedFormat` for extensions without an alpha-capable format
    /// - `Io` if the parent directory is missing or not writable
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let format = OutputFormatHandler::format_from_path(path.as_ref())?;
        ImageIOService::save_image(&self.image, path, format, false)
    }

    /// Save as PNG regardless of extension
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        ImageIOService::save_image(&self.image, path, OutputFormat::Png, false)
    }

    /// Encode the image into an in-memory buffer
    pub fn to_bytes(&self, format: OutputFormat) -> Result<Vec<u8>> {
        ImageIOService::encode_to_bytes(&self.image, format)
    }

    /// Consume the result and return the RGBA buffer
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Consume the result and return a `DynamicImage`
    #[must_use]
    pub fn into_dynamic(self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.image)
    }
}
