//! SafeReport Core Library
//!
//! This crate provides the domain models, localized messages, static directories,
//! configuration and error types shared by the intake, submission and CLI crates.

pub mod config;
pub mod directory;
pub mod error;
pub mod i18n;
pub mod models;

// Re-export commonly used types
pub use config::{Config, SanitizeFailurePolicy};
pub use error::{AppError, LogLevel};
pub use i18n::Message;
pub use models::{
    format_file_size, Attachment, AttachmentId, EncodedAttachment, FormField, Language, Notice,
    ReportForm, ReportPayload, SanitizationLevel, SanitizedFile, SelectedFile, Severity, Theme,
};
