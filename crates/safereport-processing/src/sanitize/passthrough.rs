//! Copy-only sanitizers for documents and opaque media.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use safereport_core::{SanitizationLevel, SanitizedFile, SelectedFile};

use super::SanitizeError;
use crate::traits::FileSanitizer;

/// Copy the bytes into a new buffer with a fresh timestamp.
pub(crate) fn fresh_copy(file: &SelectedFile, level: SanitizationLevel) -> SanitizedFile {
    SanitizedFile {
        name: file.name.clone(),
        media_type: file.media_type.clone(),
        data: Bytes::copy_from_slice(&file.data),
        sanitized_at: Utc::now(),
        level,
    }
}

/// PDF and Office documents. Embedded document properties are left for the
/// backend pass.
pub struct DocumentSanitizer;

#[async_trait]
impl FileSanitizer for DocumentSanitizer {
    async fn sanitize(&self, file: SelectedFile) -> Result<SanitizedFile, SanitizeError> {
        tracing::debug!(
            filename = %file.name,
            media_type = %file.media_type,
            "Document copied; embedded metadata deferred to backend"
        );
        Ok(fresh_copy(&file, SanitizationLevel::CopiedOnly))
    }
}

/// Audio, video, text and anything else without a client-side parser.
pub struct PassthroughSanitizer;

#[async_trait]
impl FileSanitizer for PassthroughSanitizer {
    async fn sanitize(&self, file: SelectedFile) -> Result<SanitizedFile, SanitizeError> {
        Ok(fresh_copy(&file, SanitizationLevel::CopiedOnly))
    }
}
