//! Configuration types for background removal operations
//!
//! The classifier thresholds are deliberately absent here; they live as
//! constants in [`crate::classifier`]. Configuration only covers how the
//! result is written and reported.

use crate::error::{BgRemovalError, Result};
use serde::{Deserialize, Serialize};

/// Output image format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG with alpha channel transparency
    Png,
    /// WebP (lossless) with alpha channel transparency
    WebP,
    /// TIFF with alpha channel transparency
    Tiff,
    /// JPEG (no alpha channel; rejected as an output target)
    Jpeg,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Png
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::WebP => write!(f, "webp"),
            Self::Tiff => write!(f, "tiff"),
            Self::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Configuration for a single background removal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalConfig {
    /// Explicit output format; `None` infers it from the output path extension
    pub output_format: Option<OutputFormat>,

    /// Create missing parent directories of the output path (default: false)
    pub create_output_dirs: bool,

    /// Print the human-readable status messages (default: true)
    pub report_progress: bool,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            output_format: None,
            create_output_dirs: false,
            report_progress: true,
        }
    }
}

impl RemovalConfig {
    /// Create a new configuration builder
    ///
    /// # Examples
    /// ```rust
    /// use logo_bgremove::{OutputFormat, RemovalConfig};
    ///
    /// let config = RemovalConfig::builder()
    ///     .output_format(OutputFormat::Png)
    ///     .create_output_dirs(true)
    ///     .build()
    ///     .unwrap();
    /// assert!(config.create_output_dirs);
    /// ```
    #[must_use]
    pub fn builder() -> RemovalConfigBuilder {
        RemovalConfigBuilder::default()
    }

    /// Validate configuration parameters
    ///
    /// # Errors
    /// - An explicit output format that cannot store transparency
    ///
    /// ```rust
    /// use logo_bgremove::{OutputFormat, RemovalConfig};
    ///
    /// let mut config = RemovalConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.output_format = Some(OutputFormat::Jpeg);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = self.output_format {
            if !crate::services::OutputFormatHandler::supports_transparency(format) {
                return Err(BgRemovalError::invalid_config(format!(
                    "output format '{}' has no alpha channel; use png, webp or tiff",
                    format
                )));
            }
        }

        Ok(())
    }
}

/// Builder for `RemovalConfig`
#[derive(Debug, Default)]
pub struct RemovalConfigBuilder {
    config: RemovalConfig,
}

impl RemovalConfigBuilder {
    /// Force an output format instead of inferring it from the extension
    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = Some(format);
        self
    }

    /// Create missing parent directories of the output path
    #[must_use]
    pub fn create_output_dirs(mut self, create: bool) -> Self {
        self.config.create_output_dirs = create;
        self
    }

    /// Print the start and finish status lines
    #[must_use]
    pub fn report_progress(mut self, report: bool) -> Self {
        self.config.report_progress = report;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<RemovalConfig> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}
