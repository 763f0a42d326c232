//! Error types for background removal operations

use std::path::Path;
use thiserror::Error;

/// Result type alias for background removal operations
pub type Result<T> = std::result::Result<T, BgRemovalError>;

/// Error types surfaced by loading, filling and saving an image
#[derive(Error, Debug)]
pub enum BgRemovalError {
    /// Input/output errors (file not found, permission denied, disk full)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Output format cannot be written or cannot carry transparency
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Stage-annotated processing failure
    #[error("Processing error: {0}")]
    Processing(String),
}

impl BgRemovalError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a new unsupported format error
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<Path>>(operation: &str, path: P, error: &std::io::Error) -> Self {
        Self::Io(std::io::Error::new(
            error.kind(),
            format!(
                "Failed to {} '{}': {}",
                operation,
                path.as_ref().display(),
                error
            ),
        ))
    }

    /// Create image decoding error with format context
    ///
    /// Only used once the file contents have been read, so every failure here
    /// is reported as undecodable data, including truncated streams.
    pub fn image_load_error<P: AsRef<Path>>(path: P, error: image::ImageError) -> Self {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        Self::Image(image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Failed to decode image '{}' (format: {}): {}",
                path_ref.display(),
                extension,
                error
            ),
        )))
    }

    /// Create processing error with stage context
    pub fn processing_stage_error(stage: &str, details: &str, input_info: Option<&str>) -> Self {
        let input_context = match input_info {
            Some(info) => format!(" (input: {})", info),
            None => String::new(),
        };

        Self::Processing(format!(
            "Processing failed at stage '{}'{}: {}",
            stage, input_context, details
        ))
    }

    /// Whether this error came from decoding the input rather than writing output
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Image(image::ImageError::Decoding(_)))
            || matches!(
                self,
                Self::Image(image::ImageError::IoError(e)) if e.kind() == std::io::ErrorKind::InvalidData
            )
            || matches!(self, Self::Image(image::ImageError::Unsupported(_)))
    }
}
