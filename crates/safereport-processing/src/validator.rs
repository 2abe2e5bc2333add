use safereport_core::{AppError, SelectedFile};
use std::path::Path;

/// Default upper bound for one attachment.
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Media families accepted with any subtype.
const ALLOWED_MEDIA_PREFIXES: &[&str] = &["image/", "video/", "audio/"];

/// Exact types accepted outside the media families.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "text/plain",
    "text/csv",
];

/// Why a selected file was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid content type: {content_type}")]
    InvalidContentType { content_type: String },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// `true` when the file fits within `max_megabytes`.
pub fn is_size_valid(file: &SelectedFile, max_megabytes: usize) -> bool {
    file.size() <= max_megabytes * 1024 * 1024
}

/// `true` for any image/video/audio type and for the document allow-list.
///
/// Acceptance does not imply the type can be re-encoded: `image/heic` and
/// `image/svg+xml` pass here but have no raster encoder, so they always take
/// the sanitizer's failure policy.
pub fn is_type_allowed(file: &SelectedFile) -> bool {
    is_media_type_allowed(&file.media_type)
}

fn is_media_type_allowed(media_type: &str) -> bool {
    let normalized = media_type.trim().to_lowercase();

    if ALLOWED_MEDIA_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
    {
        return true;
    }

    ALLOWED_CONTENT_TYPES.iter().any(|ct| *ct == normalized)
}

/// Attachment validator
///
/// Stateless apart from the size limit; rejection reporting is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct MediaValidator {
    max_file_size_mb: usize,
}

impl Default for MediaValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE_MB)
    }
}

impl MediaValidator {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self { max_file_size_mb }
    }

    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size_mb
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size() {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size(),
            });
        }

        Ok(())
    }

    /// Validate content type
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        if !is_media_type_allowed(content_type) {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
            });
        }

        Ok(())
    }

    /// Validate a selected file: size first, then declared type.
    pub fn validate(&self, file: &SelectedFile) -> Result<(), ValidationError> {
        self.validate_file_size(file.size())?;
        self.validate_content_type(&file.media_type)?;
        Ok(())
    }
}

/// Media type for a filename's extension, for callers that pick files from disk
/// and have no declared type.
pub fn content_type_for_extension(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    let content_type = match extension.as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        // Videos
        "mp4" => "video/mp4",
        "mpeg" | "mpg" => "video/mpeg",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "ogv" => "video/ogg",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/x-m4a",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => {
            tracing::debug!(extension = %extension, "Unknown extension, no media type inferred");
            return None;
        }
    };

    Some(content_type)
}
