//! Attachment sanitization
//!
//! A small closed set of strategies selected by declared media type:
//! - [`ImageSanitizer`]: decode and re-render raster images, dropping every metadata block
//! - [`DocumentSanitizer`]: PDF and Office files, copied into a fresh container
//! - [`PassthroughSanitizer`]: everything else, copied into a fresh container
//!
//! Document and passthrough copies do not strip embedded metadata; the backend
//! applies a second, authoritative pass.

pub mod passthrough;
pub mod raster;

pub use raster::ImageSanitizer;
pub use passthrough::{DocumentSanitizer, PassthroughSanitizer};

use safereport_core::{
    AppError, Config, SanitizationLevel, SanitizeFailurePolicy, SanitizedFile, SelectedFile,
};

use crate::traits::FileSanitizer;

/// Media types handled by [`DocumentSanitizer`].
const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("Failed to decode image {filename}: {reason}")]
    Decode { filename: String, reason: String },

    #[error("Failed to encode image {filename}: {reason}")]
    Encode { filename: String, reason: String },

    #[error("Unsupported image type {media_type} for {filename}")]
    UnsupportedFormat { filename: String, media_type: String },

    #[error("Sanitizer task failed: {0}")]
    Task(String),
}

impl From<SanitizeError> for AppError {
    fn from(err: SanitizeError) -> Self {
        AppError::Sanitization(err.to_string())
    }
}

/// Strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizerKind {
    Image,
    Document,
    Passthrough,
}

impl SanitizerKind {
    pub fn for_media_type(media_type: &str) -> Self {
        let normalized = media_type.trim().to_lowercase();
        if normalized.starts_with("image/") {
            SanitizerKind::Image
        } else if DOCUMENT_TYPES.contains(&normalized.as_str()) {
            SanitizerKind::Document
        } else {
            SanitizerKind::Passthrough
        }
    }
}

/// Type-dispatching sanitizer with an explicit failure policy.
pub struct Sanitizer {
    image: ImageSanitizer,
    document: DocumentSanitizer,
    passthrough: PassthroughSanitizer,
    policy: SanitizeFailurePolicy,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(raster::DEFAULT_QUALITY, SanitizeFailurePolicy::default())
    }
}

impl Sanitizer {
    pub fn new(image_quality: u8, policy: SanitizeFailurePolicy) -> Self {
        Self {
            image: ImageSanitizer::new(image_quality),
            document: DocumentSanitizer,
            passthrough: PassthroughSanitizer,
            policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.image_quality, config.sanitize_failure_policy)
    }

    pub fn policy(&self) -> SanitizeFailurePolicy {
        self.policy
    }

    fn strategy(&self, kind: SanitizerKind) -> &dyn FileSanitizer {
        match kind {
            SanitizerKind::Image => &self.image,
            SanitizerKind::Document => &self.document,
            SanitizerKind::Passthrough => &self.passthrough,
        }
    }

    /// Produce a cleaned copy of `file`.
    ///
    /// Under [`SanitizeFailurePolicy::FailOpen`] a strategy failure resolves to the
    /// original bytes marked [`SanitizationLevel::Unsanitized`] and is logged as a
    /// privacy-relevant warning. Under `FailClosed` the error is returned.
    pub async fn sanitize(&self, file: SelectedFile) -> Result<SanitizedFile, SanitizeError> {
        let kind = SanitizerKind::for_media_type(&file.media_type);
        tracing::debug!(
            filename = %file.name,
            media_type = %file.media_type,
            size = file.size(),
            kind = ?kind,
            "Sanitizing attachment"
        );

        match self.strategy(kind).sanitize(file.clone()).await {
            Ok(sanitized) => Ok(sanitized),
            Err(err) => match self.policy {
                SanitizeFailurePolicy::FailClosed => Err(err),
                SanitizeFailurePolicy::FailOpen => {
                    tracing::warn!(
                        filename = %file.name,
                        media_type = %file.media_type,
                        error = %err,
                        privacy = true,
                        "Sanitization failed; keeping original bytes for backend sanitization"
                    );
                    Ok(passthrough::fresh_copy(&file, SanitizationLevel::Unsanitized))
                }
            },
        }
    }
}
