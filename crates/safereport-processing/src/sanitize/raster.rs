//! Raster image sanitizer: decode to pixels, re-encode into a fresh container.
//!
//! The output holds only freshly rendered pixel data. EXIF (GPS, device, capture
//! time), XMP, ICC and embedded thumbnails are never copied over.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use image::codecs::jpeg::JpegEncoder;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use safereport_core::{SanitizationLevel, SanitizedFile, SelectedFile};
use std::io::Cursor;

use super::SanitizeError;
use crate::traits::FileSanitizer;

/// Re-encoding quality for lossy formats (the 0.95 factor).
pub const DEFAULT_QUALITY: u8 = 95;

pub struct ImageSanitizer {
    quality: u8,
}

impl Default for ImageSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY)
    }
}

impl ImageSanitizer {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encoder format for a declared media type.
    ///
    /// `None` for `image/heic` and `image/svg+xml`, which pass validation but
    /// cannot be re-encoded. Those files always end in `UnsupportedFormat`.
    pub fn output_format(media_type: &str) -> Option<ImageFormat> {
        match media_type.trim().to_lowercase().as_str() {
            "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
            other => ImageFormat::from_mime_type(other),
        }
    }

    /// Decode `data` and re-encode it as `format`.
    ///
    /// The EXIF orientation is applied to the pixels first so the re-rendered
    /// image displays the same way without the tag.
    pub fn rerender(
        data: &[u8],
        filename: &str,
        format: ImageFormat,
        quality: u8,
    ) -> Result<Vec<u8>, SanitizeError> {
        let decode_err = |e: image::ImageError| SanitizeError::Decode {
            filename: filename.to_string(),
            reason: e.to_string(),
        };
        let encode_err = |e: image::ImageError| SanitizeError::Encode {
            filename: filename.to_string(),
            reason: e.to_string(),
        };

        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| SanitizeError::Decode {
                filename: filename.to_string(),
                reason: e.to_string(),
            })?;
        let mut decoder = reader.into_decoder().map_err(decode_err)?;
        let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
        let mut img = DynamicImage::from_decoder(decoder).map_err(decode_err)?;
        img.apply_orientation(orientation);

        let mut out = Cursor::new(Vec::new());
        match format {
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel.
                let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
                let encoder = JpegEncoder::new_with_quality(&mut out, quality);
                rgb.write_with_encoder(encoder).map_err(encode_err)?;
            }
            ImageFormat::Png => img.write_to(&mut out, ImageFormat::Png).map_err(encode_err)?,
            other => DynamicImage::ImageRgba8(img.to_rgba8())
                .write_to(&mut out, other)
                .map_err(encode_err)?,
        }

        Ok(out.into_inner())
    }
}

#[async_trait]
impl FileSanitizer for ImageSanitizer {
    async fn sanitize(&self, file: SelectedFile) -> Result<SanitizedFile, SanitizeError> {
        let format =
            Self::output_format(&file.media_type).ok_or_else(|| SanitizeError::UnsupportedFormat {
                filename: file.name.clone(),
                media_type: file.media_type.clone(),
            })?;

        let quality = self.quality;
        let data = file.data.clone();
        let filename = file.name.clone();
        // Decode and encode are CPU-bound; run off the async pool.
        let rendered = tokio::task::spawn_blocking(move || {
            Self::rerender(&data, &filename, format, quality)
        })
        .await
        .map_err(|e| SanitizeError::Task(e.to_string()))??;

        tracing::debug!(
            filename = %file.name,
            original_size = file.size(),
            sanitized_size = rendered.len(),
            "Image re-rendered without metadata"
        );

        Ok(SanitizedFile {
            name: file.name,
            media_type: file.media_type,
            data: Bytes::from(rendered),
            sanitized_at: Utc::now(),
            level: SanitizationLevel::Stripped,
        })
    }
}
