//! Domain models for report intake and submission.

pub mod attachment;
pub mod form;
pub mod language;
pub mod notice;
pub mod report;

pub use attachment::{
    format_file_size, Attachment, AttachmentId, SanitizationLevel, SanitizedFile, SelectedFile,
};
pub use form::{FormField, ReportForm};
pub use language::{Language, Theme};
pub use notice::{Notice, Severity};
pub use report::{EncodedAttachment, ReportPayload};
