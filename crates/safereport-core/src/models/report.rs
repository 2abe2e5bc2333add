//! Outbound report payload.

use serde::{Deserialize, Serialize};

use super::form::ReportForm;
use super::language::Language;
use crate::directory;
use crate::i18n::Message;

/// Transport-safe form of one attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedAttachment {
    pub filename: String,
    /// Base64 of the sanitized payload.
    pub content: String,
    pub content_type: String,
}

/// JSON body of one report submission. Built at submit time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub name: String,
    pub email: String,
    pub site: String,
    pub site_name: String,
    pub department: String,
    pub department_name: String,
    pub message: String,
    pub language: Language,
    pub attachments: Vec<EncodedAttachment>,
    pub recipient_email: String,
}

impl ReportPayload {
    /// Assemble the payload from the current form, resolving display names,
    /// identity fallbacks and the recipient address.
    pub fn assemble(
        form: &ReportForm,
        language: Language,
        attachments: Vec<EncodedAttachment>,
        default_recipient: &str,
    ) -> Self {
        let name = non_blank(&form.name).unwrap_or_else(|| Message::Anonymous.render(language));
        let email =
            non_blank(&form.email).unwrap_or_else(|| Message::NotProvided.render(language));

        Self {
            name,
            email,
            site: form.site.clone(),
            site_name: directory::site_name(language, &form.site),
            department: form.department.clone(),
            department_name: directory::department_name(language, &form.department),
            message: form.message.clone(),
            language,
            attachments,
            recipient_email: directory::recipient_for(&form.department, default_recipient),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
