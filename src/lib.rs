#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Logo Background Removal
//!
//! Makes the background of a logo-style image transparent. Starting from the
//! four corners, a breadth-first flood fill walks 4-connected neighbours that
//! look like background (bright and close to grey) and clears their alpha.
//! Anything not reachable from a corner through background pixels, such as a
//! saturated logo and any white highlights enclosed by it, is left untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! // Prints "Processing logo.png..." and "Saved transparent logo to logo_final.png"
//! let result = logo_bgremove::remove_background("logo.png", "logo_final.png")?;
//! println!("cleared {} pixels", result.stats.cleared_pixels);
//! # Ok::<(), logo_bgremove::BgRemovalError>(())
//! ```
//!
//! ## In-memory usage
//!
//! ```rust
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use logo_bgremove::remove_background_from_image;
//!
//! let mut logo = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
//! logo.put_pixel(1, 1, Rgba([0, 200, 0, 255]));
//!
//! let result = remove_background_from_image(&DynamicImage::ImageRgba8(logo));
//! assert_eq!(result.transparent_pixel_count(), 8);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): command-line interface and tracing subscriber setup
//! - `webp-support` (default): WebP output
//! - `tracing-json`: JSON log output for the CLI

pub mod classifier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod flood_fill;
pub mod processor;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod types;

use std::path::Path;

pub use classifier::is_background_candidate;
pub use config::{OutputFormat, RemovalConfig, RemovalConfigBuilder};
pub use error::{BgRemovalError, Result};
pub use flood_fill::{corner_seeds, flood_fill_background};
pub use processor::BackgroundRemover;
pub use services::{
    ConsoleProgressReporter, ImageIOService, NoOpProgressReporter, OutputFormatHandler,
    ProcessingStage, ProgressReporter, ProgressTracker, ProgressUpdate,
};
pub use types::{FillStats, ProcessingTimings, RemovalResult};

#[cfg(feature = "cli")]
pub use tracing_config::{init_cli_tracing, TracingConfig, TracingFormat};

/// Remove the border-connected background of `input_path` and save to `output_path`
///
/// Prints `Processing {input_path}...` before and
/// `Saved transparent logo to {output_path}` after processing. The output
/// format follows the extension of `output_path` and must support
/// transparency.
///
/// # Errors
/// - `Io` if the input is missing or the output is not writable
/// - `Image` if the input cannot be decoded
/// - `UnsupportedFormat` for output formats without an alpha channel
pub fn remove_background<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<RemovalResult> {
    remove_background_with_config(input_path, output_path, &RemovalConfig::default())
}

/// Same as [`remove_background`] with explicit configuration
pub fn remove_background_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    config: &RemovalConfig,
) -> Result<RemovalResult> {
    BackgroundRemover::new(config.clone())?.process_file(input_path, output_path)
}

/// Remove the background of a `DynamicImage` without any file I/O
#[must_use]
pub fn remove_background_from_image(image: &image::DynamicImage) -> RemovalResult {
    BackgroundRemover::silent().process_image(image)
}

/// Remove the background of an encoded image held in memory
///
/// # Errors
/// - `Image` if the bytes cannot be decoded
///
/// ```rust
/// use logo_bgremove::{remove_background_from_bytes, OutputFormat};
///
/// # fn main() -> logo_bgremove::Result<()> {
/// let white = image::RgbaImage::from_pixel(4, 4, image::Rgba([250, 250, 250, 255]));
/// let mut png = std::io::Cursor::new(Vec::new());
/// white.write_to(&mut png, image::ImageFormat::Png)?;
///
/// let result = remove_background_from_bytes(png.get_ref())?;
/// assert_eq!(result.transparent_pixel_count(), 16);
/// let encoded = result.to_bytes(OutputFormat::Png)?;
/// assert!(!encoded.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn remove_background_from_bytes(image_bytes: &[u8]) -> Result<RemovalResult> {
    let image = ImageIOService::load_from_bytes(image_bytes)?;
    Ok(remove_background_from_image(&image))
}
