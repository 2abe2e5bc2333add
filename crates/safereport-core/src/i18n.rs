//! Localized user-facing messages (English / Arabic).

use crate::models::Language;

/// Every message the intake and submission flows can show to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    FileTooLarge { filename: &'a str, max_mb: usize },
    FileTypeNotAllowed { filename: &'a str },
    /// Metadata could not be stripped; the file is staged as selected.
    SanitizationSkipped { filename: &'a str },
    ProcessingError,
    SelectSite,
    SubmitSuccess,
    /// Submission failed; `detail` is the best available reason, if any.
    SubmitError { detail: Option<&'a str> },
    Anonymous,
    NotProvided,
}

impl Message<'_> {
    pub fn render(&self, language: Language) -> String {
        match (self, language) {
            (Message::FileTooLarge { filename, max_mb }, Language::En) => {
                format!("File \"{}\" exceeds the {}MB limit", filename, max_mb)
            }
            (Message::FileTooLarge { filename, max_mb }, Language::Ar) => {
                format!("الملف \"{}\" يتجاوز حد {} ميجابايت", filename, max_mb)
            }
            (Message::FileTypeNotAllowed { filename }, Language::En) => {
                format!("File type not allowed: \"{}\"", filename)
            }
            (Message::FileTypeNotAllowed { filename }, Language::Ar) => {
                format!("نوع الملف غير مسموح به: \"{}\"", filename)
            }
            (Message::SanitizationSkipped { filename }, Language::En) => format!(
                "File \"{}\" could not be cleaned of metadata and will be sent as-is",
                filename
            ),
            (Message::SanitizationSkipped { filename }, Language::Ar) => format!(
                "تعذر إزالة البيانات الوصفية من الملف \"{}\" وسيتم إرساله كما هو",
                filename
            ),
            (Message::ProcessingError, Language::En) => {
                "Error processing files. Please try again.".to_string()
            }
            (Message::ProcessingError, Language::Ar) => {
                "خطأ في معالجة الملفات. يرجى المحاولة مرة أخرى.".to_string()
            }
            (Message::SelectSite, Language::En) => "Please select a site".to_string(),
            (Message::SelectSite, Language::Ar) => "يرجى اختيار موقع".to_string(),
            (Message::SubmitSuccess, Language::En) => {
                "Report submitted securely! You will receive a confirmation shortly.".to_string()
            }
            (Message::SubmitSuccess, Language::Ar) => {
                "تم تقديم البلاغ بأمان! سوف تتلقى تأكيدًا قريبًا.".to_string()
            }
            (Message::SubmitError { detail }, Language::En) => format!(
                "Error submitting report: {}",
                detail.unwrap_or("Please try again.")
            ),
            (Message::SubmitError { detail }, Language::Ar) => format!(
                "خطأ في تقديم البلاغ: {}",
                detail.unwrap_or("يرجى المحاولة مرة أخرى.")
            ),
            (Message::Anonymous, Language::En) => "Anonymous".to_string(),
            (Message::Anonymous, Language::Ar) => "مجهول".to_string(),
            (Message::NotProvided, Language::En) => "Not provided".to_string(),
            (Message::NotProvided, Language::Ar) => "غير مقدم".to_string(),
        }
    }
}
