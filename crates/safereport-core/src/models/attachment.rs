//! File and attachment types for the intake pipeline.
//!
//! A [`SelectedFile`] is raw user input. It becomes a [`SanitizedFile`] once the
//! sanitizer has produced a cleaned copy, and an [`Attachment`] once it is staged
//! in the attachment store.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A file picked by the reporter, before validation and sanitization.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    /// Declared MIME type, as reported by the picker.
    pub media_type: String,
    pub data: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// How strongly a file was cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizationLevel {
    /// Pixels were re-rendered into a fresh container; no source metadata survives.
    Stripped,
    /// Bytes were copied into a fresh container; embedded metadata is left for the backend pass.
    CopiedOnly,
    /// Sanitization failed and the original bytes were kept (fail-open fallback).
    Unsanitized,
}

/// Output of the sanitizer: same name and declared type, cleaned bytes.
#[derive(Clone, Debug)]
pub struct SanitizedFile {
    pub name: String,
    pub media_type: String,
    pub data: Bytes,
    /// Fresh last-modified time assigned when the copy was produced.
    pub sanitized_at: DateTime<Utc>,
    pub level: SanitizationLevel,
}

/// Opaque identifier used to address an attachment for removal. Never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sanitized file staged for submission.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    /// Byte length of the sanitized payload.
    pub size: usize,
    pub media_type: String,
    pub payload: Bytes,
    pub sanitized_at: DateTime<Utc>,
    pub level: SanitizationLevel,
}

impl From<SanitizedFile> for Attachment {
    fn from(file: SanitizedFile) -> Self {
        Self {
            id: AttachmentId::new(),
            name: file.name,
            size: file.data.len(),
            media_type: file.media_type,
            payload: file.data,
            sanitized_at: file.sanitized_at,
            level: file.level,
        }
    }
}

/// Human-readable file size ("0 Bytes", "1.5 KB", "10 MB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
