//! SafeReport attachment processing
//!
//! Validation, metadata sanitization and transport encoding for report attachments.

pub mod encoder;
pub mod intake;
pub mod sanitize;
pub mod traits;
pub mod validator;

// Re-export commonly used types
pub use encoder::{encode_all, encode_for_transport, EncodeError};
pub use intake::{sanitize_batch, screen_batch, Rejection, ScreenedBatch};
pub use sanitize::{
    DocumentSanitizer, ImageSanitizer, PassthroughSanitizer, SanitizeError, Sanitizer,
    SanitizerKind,
};
pub use traits::FileSanitizer;
pub use validator::{
    content_type_for_extension, is_size_valid, is_type_allowed, MediaValidator, ValidationError,
};
