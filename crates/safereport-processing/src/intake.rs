//! Intake batch helpers: validate → sanitize.
//!
//! Validation rejects files individually and never stops the batch. Sanitization
//! fans out over every accepted file and joins them all before returning, so a
//! caller only ever sees a whole batch or an error.

use futures::future::try_join_all;
use safereport_core::{AppError, SanitizedFile, SelectedFile};

use crate::sanitize::{SanitizeError, Sanitizer};
use crate::validator::{MediaValidator, ValidationError};

/// A file refused by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub filename: String,
    pub error: ValidationError,
}

/// Validation result for one selection, in selection order.
#[derive(Debug, Default)]
pub struct ScreenedBatch {
    pub accepted: Vec<SelectedFile>,
    pub rejected: Vec<Rejection>,
}

/// Split a selection into accepted files and per-file rejections.
pub fn screen_batch(files: Vec<SelectedFile>, validator: &MediaValidator) -> ScreenedBatch {
    let mut batch = ScreenedBatch::default();

    for file in files {
        match validator.validate(&file) {
            Ok(()) => batch.accepted.push(file),
            Err(error) => {
                AppError::from(error.clone()).log(&format!("Attachment rejected: {}", file.name));
                batch.rejected.push(Rejection {
                    filename: file.name,
                    error,
                });
            }
        }
    }

    batch
}

/// Sanitize every file concurrently; all-or-nothing.
pub async fn sanitize_batch(
    files: Vec<SelectedFile>,
    sanitizer: &Sanitizer,
) -> Result<Vec<SanitizedFile>, SanitizeError> {
    try_join_all(files.into_iter().map(|file| sanitizer.sanitize(file))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use safereport_core::SanitizeFailurePolicy;

    fn file(name: &str, media_type: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, media_type, vec![b'a'; size])
    }

    #[test]
    fn test_screen_batch_keeps_order_and_reports_each_rejection() {
        let validator = MediaValidator::new(1);
        let batch = screen_batch(
            vec![
                file("a.txt", "text/plain", 10),
                file("big.pdf", "application/pdf", 2 * 1024 * 1024),
                file("b.csv", "text/csv", 10),
                file("evil.exe", "application/x-msdownload", 10),
            ],
            &validator,
        );

        let accepted: Vec<_> = batch.accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(accepted, vec!["a.txt", "b.csv"]);
        assert_eq!(batch.rejected.len(), 2);
        assert_eq!(batch.rejected[0].filename, "big.pdf");
        assert!(matches!(
            batch.rejected[0].error,
            ValidationError::FileTooLarge { .. }
        ));
        assert_eq!(batch.rejected[1].filename, "evil.exe");
        assert!(matches!(
            batch.rejected[1].error,
            ValidationError::InvalidContentType { .. }
        ));
    }

    #[tokio::test]
    async fn test_sanitize_batch_preserves_order() {
        let sanitizer = Sanitizer::default();
        let out = sanitize_batch(
            vec![
                file("1.txt", "text/plain", 3),
                file("2.pdf", "application/pdf", 4),
                file("3.mp3", "audio/mpeg", 5),
            ],
            &sanitizer,
        )
        .await
        .unwrap();

        let names: Vec<_> = out.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1.txt", "2.pdf", "3.mp3"]);
    }

    #[tokio::test]
    async fn test_sanitize_batch_empty() {
        let out = sanitize_batch(vec![], &Sanitizer::default()).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_batch_when_closed() {
        let sanitizer = Sanitizer::new(95, SanitizeFailurePolicy::FailClosed);
        let result = sanitize_batch(
            vec![
                file("ok.txt", "text/plain", 3),
                SelectedFile::new("broken.png", "image/png", b"nope".to_vec()),
            ],
            &sanitizer,
        )
        .await;
        assert!(result.is_err());
    }
}
