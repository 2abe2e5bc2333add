//! Traits for the intake pipeline.

use async_trait::async_trait;
use safereport_core::{SanitizedFile, SelectedFile};

use crate::sanitize::SanitizeError;

/// One sanitization strategy: produce a cleaned copy with the same name and declared type.
#[async_trait]
pub trait FileSanitizer: Send + Sync {
    async fn sanitize(&self, file: SelectedFile) -> Result<SanitizedFile, SanitizeError>;
}
