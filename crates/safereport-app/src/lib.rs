//! SafeReport application layer
//!
//! Shared state, the attachment store, the notice surface, theme persistence and
//! the [`SubmissionController`] that ties intake and submission together.

pub mod controller;
pub mod notices;
pub mod preferences;
pub mod state;
pub mod store;
pub mod telemetry;

pub use controller::{IntakeOutcome, SubmissionController, SubmitOutcome};
pub use notices::{NoticeSink, RecordingNotices, TerminalNotices};
pub use preferences::{PreferenceError, PreferenceStore};
pub use state::AppState;
pub use store::AttachmentStore;
pub use telemetry::init_tracing;
