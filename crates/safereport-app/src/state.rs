//! Application state shared between the front end and the controller.

use safereport_core::{FormField, Language, ReportForm, Theme};

use crate::store::AttachmentStore;

/// Everything the intake page mirrors: locale, theme, form, staged attachments
/// and the two busy flags.
///
/// Shared as `Arc<tokio::sync::Mutex<AppState>>`. The controller never holds the
/// lock across an await.
#[derive(Debug, Default)]
pub struct AppState {
    pub language: Language,
    pub theme: Theme,
    pub form: ReportForm,
    pub attachments: AttachmentStore,
    pub(crate) uploading: bool,
    pub(crate) submitting: bool,
}

impl AppState {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self {
            language,
            theme,
            ..Default::default()
        }
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        self.language
    }

    /// Flip the theme in memory. Persisting it is up to
    /// [`PreferenceStore::toggle_theme`](crate::preferences::PreferenceStore::toggle_theme).
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// False while either intake or submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.uploading && !self.submitting
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }
}
