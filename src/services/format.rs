//! Output format handling service
//!
//! Maps output paths to encoder formats and decides whether a format can
//! carry the transparency the fill produces.

use crate::{
    config::OutputFormat,
    error::{BgRemovalError, Result},
};
use image::ImageFormat;
use std::path::Path;

/// Service for handling output format selection
pub struct OutputFormatHandler;

impl OutputFormatHandler {
    /// Infer the output format from a path's extension (case-insensitive)
    ///
    /// # Errors
    /// - Missing extension or an extension with no known encoder
    ///
    /// # Examples
    /// ```rust
    /// use logo_bgremove::{services::OutputFormatHandler, OutputFormat};
    ///
    /// let format = OutputFormatHandler::format_from_path("logo_final.PNG").unwrap();
    /// assert_eq!(format, OutputFormat::Png);
    /// ```
    pub fn format_from_path<P: AsRef<Path>>(path: P) -> Result<OutputFormat> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                BgRemovalError::unsupported_format(format!(
                    "cannot infer output format for '{}': missing file extension",
                    path_ref.display()
                ))
            })?;

        match extension.as_str() {
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            other => Err(BgRemovalError::unsupported_format(format!(
                "unknown output extension '{}' for '{}'",
                other,
                path_ref.display()
            ))),
        }
    }

    /// Pick the format for an output path, honouring an explicit override,
    /// and reject formats that cannot store an alpha channel.
    pub fn resolve<P: AsRef<Path>>(explicit: Option<OutputFormat>, path: P) -> Result<OutputFormat> {
        let format = match explicit {
            Some(format) => format,
            None => Self::format_from_path(path.as_ref())?,
        };
        Self::ensure_transparency(format)?;
        Ok(format)
    }

    /// Error unless `format` supports per-pixel transparency
    pub fn ensure_transparency(format: OutputFormat) -> Result<()> {
        if Self::supports_transparency(format) {
            Ok(())
        } else {
            Err(BgRemovalError::unsupported_format(format!(
                "{} cannot store transparency; choose png, webp or tiff",
                format
            )))
        }
    }

    /// Encoder format used by the `image` crate
    #[must_use]
    pub fn image_format(format: OutputFormat) -> ImageFormat {
        match format {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Preferred file extension (without the dot)
    #[must_use]
    pub fn get_extension(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Jpeg => "jpg",
        }
    }

    #[must_use]
    pub fn supports_transparency(format: OutputFormat) -> bool {
        match format {
            OutputFormat::Png | OutputFormat::WebP | OutputFormat::Tiff => true,
            OutputFormat::Jpeg => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormatHandler::format_from_path("a/b/logo.png").unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormatHandler::format_from_path("logo.WebP").unwrap(),
            OutputFormat::WebP
        );
        assert_eq!(
            OutputFormatHandler::format_from_path("scan.tif").unwrap(),
            OutputFormat::Tiff
        );
        assert_eq!(
            OutputFormatHandler::format_from_path("photo.jpeg").unwrap(),
            OutputFormat::Jpeg
        );
    }

    #[test]
    fn test_format_from_path_errors() {
        let err = OutputFormatHandler::format_from_path("no_extension").unwrap_err();
        assert!(matches!(err, BgRemovalError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("missing file extension"));

        let err = OutputFormatHandler::format_from_path("logo.gif").unwrap_err();
        assert!(err.to_string().contains("gif"));
    }

    #[test]
    fn test_resolve_rejects_jpeg() {
        assert!(OutputFormatHandler::resolve(None, "out.jpg").is_err());
        assert!(OutputFormatHandler::resolve(Some(OutputFormat::Jpeg), "out.png").is_err());
    }

    #[test]
    fn test_resolve_explicit_overrides_extension() {
        let format = OutputFormatHandler::resolve(Some(OutputFormat::Tiff), "out.png").unwrap();
        assert_eq!(format, OutputFormat::Tiff);

        // Explicit format also covers paths without a usable extension
        let format = OutputFormatHandler::resolve(Some(OutputFormat::Png), "out").unwrap();
        assert_eq!(format, OutputFormat::Png);
    }

    #[test]
    fn test_supports_transparency() {
        assert!(OutputFormatHandler::supports_transparency(OutputFormat::Png));
        assert!(OutputFormatHandler::supports_transparency(OutputFormat::WebP));
        assert!(OutputFormatHandler::supports_transparency(OutputFormat::Tiff));
        assert!(!OutputFormatHandler::supports_transparency(OutputFormat::Jpeg));
    }

    #[test]
    fn test_extension_and_image_format() {
        for format in [OutputFormat::Png, OutputFormat::WebP, OutputFormat::Tiff] {
            let ext = OutputFormatHandler::get_extension(format);
            assert_eq!(OutputFormatHandler::format_from_path(format!("x.{ext}")).unwrap(), format);
        }
        assert_eq!(
            OutputFormatHandler::image_format(OutputFormat::Png),
            ImageFormat::Png
        );
    }
}
