//! Image I/O operations service
//!
//! Decoding and encoding live here so the fill never touches the filesystem.
//! Output is encoded fully in memory before anything is written, so a failed
//! encode never leaves a partial file behind.

use crate::{
    config::OutputFormat,
    error::{BgRemovalError, Result},
    services::OutputFormatHandler,
};
use image::{DynamicImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Service for handling image file input/output operations
pub struct ImageIOService;

impl ImageIOService {
    /// Load an image from a file path
    ///
    /// Tries extension-based detection first and falls back to sniffing the
    /// file contents.
    ///
    /// # Errors
    /// - `Io` when the file does not exist or cannot be read
    /// - `Image` when the contents cannot be decoded
    ///
    /// # Examples
    /// ```rust,no_run
    /// use logo_bgremove::services::ImageIOService;
    ///
    /// let image = ImageIOService::load_image("logo.png")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let path_ref = path.as_ref();

        if !path_ref.is_file() {
            return Err(BgRemovalError::file_io_error(
                "read image file",
                path_ref,
                &std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
            ));
        }

        match image::open(path_ref) {
            Ok(img) => Ok(img),
            Err(e) => {
                tracing::debug!(
                    path = %path_ref.display(),
                    error = %e,
                    "Extension-based loading failed, attempting content-based detection"
                );

                let data = std::fs::read(path_ref).map_err(|io_err| {
                    BgRemovalError::file_io_error("read image data", path_ref, &io_err)
                })?;

                image::load_from_memory(&data)
                    .map_err(|content_err| BgRemovalError::image_load_error(path_ref, content_err))
            },
        }
    }

    /// Load an image and convert it to 8-bit RGBA
    pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
        Self::load_image(path).map(|image| image.to_rgba8())
    }

    /// Decode an image from raw bytes
    pub fn load_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).map_err(BgRemovalError::from)
    }

    /// Encode an RGBA image into memory
    ///
    /// # Errors
    /// - `UnsupportedFormat` if `format` cannot store transparency
    /// - `Processing` (stage `image encode`) if the encoder rejects the buffer,
    ///   e.g. a zero-sized image or WebP without the `webp-support` feature
    pub fn encode_to_bytes(image: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>> {
        OutputFormatHandler::ensure_transparency(format)?;

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, OutputFormatHandler::image_format(format))
            .map_err(|e| {
                let (width, height) = image.dimensions();
                BgRemovalError::processing_stage_error(
                    "image encode",
                    &format!("Failed to encode as {}: {}", format, e),
                    Some(&format!("{}x{} RGBA", width, height)),
                )
            })?;

        Ok(buffer.into_inner())
    }

    /// Save an RGBA image to `path` in the given format
    ///
    /// Missing parent directories are an error unless `create_parent_dirs` is set.
    pub fn save_image<P: AsRef<Path>>(
        image: &RgbaImage,
        path: P,
        format: OutputFormat,
        create_parent_dirs: bool,
    ) -> Result<()> {
        let path_ref = path.as_ref();
        let bytes = Self::encode_to_bytes(image, format)?;

        if create_parent_dirs {
            if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BgRemovalError::file_io_error("create output directory", parent, &e)
                })?;
            }
        }

        std::fs::write(path_ref, &bytes)
            .map_err(|e| BgRemovalError::file_io_error("write image", path_ref, &e))?;

        tracing::trace!(
            path = %path_ref.display(),
            format = %format,
            bytes = bytes.len(),
            "Image written"
        );

        Ok(())
    }
}
