//! Submission controller
//!
//! Drives the two pipelines against the shared [`AppState`]:
//! - intake: validate, sanitize the accepted files concurrently, then append the
//!   whole batch to the attachment store
//! - submit: encode attachments, assemble the payload, send it, then reset on success
//!
//! Each pipeline owns one busy flag. The flag is set and cleared under the state
//! lock, and the lock is released before any await so the front end stays
//! responsive. Every completed operation raises exactly one notice per outcome.

use std::sync::Arc;
use std::time::Duration;

use safereport_client::ReportTransport;
use safereport_core::{
    AppError, Attachment, AttachmentId, Config, Language, Message, Notice, ReportForm,
    ReportPayload, SanitizationLevel, SelectedFile,
};
use safereport_processing::{
    encode_all, sanitize_batch, screen_batch, MediaValidator, Sanitizer, ValidationError,
};
use tokio::sync::Mutex;

use crate::notices::NoticeSink;
use crate::state::AppState;

const INTAKE_NOTICE: Duration = Duration::from_millis(4000);
const MISSING_SITE_NOTICE: Duration = Duration::from_millis(3000);
const SUBMIT_SUCCESS_NOTICE: Duration = Duration::from_millis(4000);
const SUBMIT_ERROR_NOTICE: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Accepted files were sanitized and appended, in selection order.
    Completed {
        added: Vec<AttachmentId>,
        rejected: usize,
    },
    /// Sanitization failed; nothing from this batch was appended.
    Failed { rejected: usize },
    /// Another intake or a submission is in flight; the selection was discarded.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    /// No site selected; nothing was sent.
    MissingSite,
    /// Encoding or delivery failed; form and attachments are untouched.
    Failed {
        error_code: &'static str,
        detail: Option<String>,
    },
    /// Intake or another submission is in flight.
    Busy,
}

pub struct SubmissionController {
    state: Arc<Mutex<AppState>>,
    validator: MediaValidator,
    sanitizer: Sanitizer,
    transport: Arc<dyn ReportTransport>,
    notices: Arc<dyn NoticeSink>,
    default_recipient: String,
}

impl SubmissionController {
    pub fn new(
        state: Arc<Mutex<AppState>>,
        validator: MediaValidator,
        sanitizer: Sanitizer,
        transport: Arc<dyn ReportTransport>,
        notices: Arc<dyn NoticeSink>,
        default_recipient: impl Into<String>,
    ) -> Self {
        Self {
            state,
            validator,
            sanitizer,
            transport,
            notices,
            default_recipient: default_recipient.into(),
        }
    }

    pub fn from_config(
        config: &Config,
        state: Arc<Mutex<AppState>>,
        transport: Arc<dyn ReportTransport>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self::new(
            state,
            MediaValidator::new(config.max_file_size_mb),
            Sanitizer::from_config(config),
            transport,
            notices,
            config.default_recipient.clone(),
        )
    }

    pub fn state(&self) -> &Arc<Mutex<AppState>> {
        &self.state
    }

    /// Run one file selection through validation and sanitization.
    ///
    /// The selection is consumed, so picking the same file again starts a new
    /// intake. Rejections raise one warning each and do not stop the batch.
    /// Files staged without metadata stripping raise one warning each as well.
    pub async fn intake(&self, files: Vec<SelectedFile>) -> IntakeOutcome {
        let (language, theme) = {
            let mut state = self.state.lock().await;
            if state.uploading || state.submitting {
                tracing::debug!(files = files.len(), "Intake ignored while busy");
                return IntakeOutcome::Busy;
            }
            state.uploading = true;
            (state.language, state.theme)
        };

        let batch = screen_batch(files, &self.validator);
        for rejection in &batch.rejected {
            let message = self.rejection_message(&rejection.filename, &rejection.error);
            self.notices.notify(
                Notice::warning(message.render(language), theme).with_auto_close(INTAKE_NOTICE),
            );
        }
        let rejected = batch.rejected.len();

        let result = sanitize_batch(batch.accepted, &self.sanitizer).await;

        let mut state = self.state.lock().await;
        let outcome = match result {
            Ok(files) => {
                let records: Vec<Attachment> = files.into_iter().map(Attachment::from).collect();
                let added: Vec<AttachmentId> = records.iter().map(|a| a.id).collect();
                for record in records
                    .iter()
                    .filter(|a| a.level == SanitizationLevel::Unsanitized)
                {
                    let message = Message::SanitizationSkipped {
                        filename: &record.name,
                    };
                    self.notices.notify(
                        Notice::warning(message.render(state.language), state.theme)
                            .with_auto_close(INTAKE_NOTICE),
                    );
                }
                tracing::info!(
                    added = added.len(),
                    rejected,
                    total = state.attachments.len() + added.len(),
                    "Attachments staged"
                );
                state.attachments.append(records);
                IntakeOutcome::Completed { added, rejected }
            }
            Err(err) => {
                AppError::from(err).log("Failed to process attachments");
                self.notices.notify(
                    Notice::error(Message::ProcessingError.render(state.language), state.theme)
                        .with_auto_close(INTAKE_NOTICE),
                );
                IntakeOutcome::Failed { rejected }
            }
        };
        state.uploading = false;
        outcome
    }

    fn rejection_message<'a>(&self, filename: &'a str, error: &ValidationError) -> Message<'a> {
        match error {
            ValidationError::FileTooLarge { .. } => Message::FileTooLarge {
                filename,
                max_mb: self.validator.max_file_size_mb(),
            },
            ValidationError::InvalidContentType { .. } => Message::FileTypeNotAllowed { filename },
        }
    }

    /// Remove one staged attachment. Unknown ids are ignored.
    pub async fn remove_attachment(&self, id: &AttachmentId) -> bool {
        let removed = self.state.lock().await.attachments.remove(id);
        if let Some(attachment) = &removed {
            tracing::debug!(filename = %attachment.name, "Attachment removed");
        }
        removed.is_some()
    }

    /// Send the current form and staged attachments as one report.
    pub async fn submit(&self) -> SubmitOutcome {
        let (form, language, attachments) = {
            let mut state = self.state.lock().await;
            if !state.can_submit() {
                tracing::debug!(
                    uploading = state.uploading,
                    submitting = state.submitting,
                    "Submit ignored while busy"
                );
                return SubmitOutcome::Busy;
            }
            if !state.form.has_site() {
                self.notices.notify(
                    Notice::warning(Message::SelectSite.render(state.language), state.theme)
                        .with_auto_close(MISSING_SITE_NOTICE),
                );
                return SubmitOutcome::MissingSite;
            }
            state.submitting = true;
            (
                state.form.clone(),
                state.language,
                state.attachments.as_slice().to_vec(),
            )
        };

        let result = self.deliver(&form, language, &attachments).await;

        let mut state = self.state.lock().await;
        let outcome = match result {
            Ok(()) => {
                tracing::info!(attachments = attachments.len(), "Report delivered");
                self.notices.notify(
                    Notice::success(Message::SubmitSuccess.render(state.language), state.theme)
                        .with_auto_close(SUBMIT_SUCCESS_NOTICE),
                );
                state.form.clear();
                state.attachments.reset();
                SubmitOutcome::Delivered
            }
            Err(err) => {
                err.log("Failed to submit report");
                let detail = err.user_detail().map(str::to_string);
                let message = Message::SubmitError {
                    detail: detail.as_deref(),
                };
                self.notices.notify(
                    Notice::error(message.render(state.language), state.theme)
                        .with_auto_close(SUBMIT_ERROR_NOTICE),
                );
                SubmitOutcome::Failed {
                    error_code: err.error_code(),
                    detail,
                }
            }
        };
        state.submitting = false;
        outcome
    }

    async fn deliver(
        &self,
        form: &ReportForm,
        language: Language,
        attachments: &[Attachment],
    ) -> Result<(), AppError> {
        let encoded = encode_all(attachments)?;
        let payload = ReportPayload::assemble(form, language, encoded, &self.default_recipient);
        self.transport.send_report(&payload).await?;
        Ok(())
    }
}
