//! Transport encoding for staged attachments.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use safereport_core::{AppError, Attachment, EncodedAttachment};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Attachment has no filename")]
    MissingFilename,

    #[error("Invalid file type for {filename}")]
    MissingContentType { filename: String },
}

impl From<EncodeError> for AppError {
    fn from(err: EncodeError) -> Self {
        AppError::Encoding(err.to_string())
    }
}

/// Encode one attachment as `{filename, content (base64), contentType}`.
pub fn encode_for_transport(attachment: &Attachment) -> Result<EncodedAttachment, EncodeError> {
    if attachment.name.trim().is_empty() {
        return Err(EncodeError::MissingFilename);
    }
    if attachment.media_type.trim().is_empty() {
        return Err(EncodeError::MissingContentType {
            filename: attachment.name.clone(),
        });
    }

    Ok(EncodedAttachment {
        filename: attachment.name.clone(),
        content: STANDARD.encode(&attachment.payload),
        content_type: attachment.media_type.clone(),
    })
}

/// Encode every attachment, or none: the first failure aborts the whole list.
pub fn encode_all(attachments: &[Attachment]) -> Result<Vec<EncodedAttachment>, EncodeError> {
    attachments.iter().map(encode_for_transport).collect()
}
