#![allow(dead_code)]

use async_trait::async_trait;
use image::{ImageFormat, Rgb, RgbImage};
use safereport_app::{AppState, RecordingNotices, SubmissionController};
use safereport_client::{ReportResponse, ReportTransport, SubmitError};
use safereport_core::directory::DEFAULT_RECIPIENT;
use safereport_core::{Language, ReportPayload, SelectedFile, Theme};
use safereport_processing::{MediaValidator, Sanitizer};
use std::io::Cursor;
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::Notify;

/// In-memory transport with a fixed reply. Records every payload and whether
/// the submitting flag was set while the request was in flight.
pub struct FakeTransport {
    reply: Result<ReportResponse, SubmitError>,
    sent: Mutex<Vec<ReportPayload>>,
    submitting_seen: Mutex<Vec<bool>>,
    state: OnceLock<Arc<tokio::sync::Mutex<AppState>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    pub fn with_reply(reply: Result<ReportResponse, SubmitError>) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
            submitting_seen: Mutex::new(Vec::new()),
            state: OnceLock::new(),
            gate: None,
        }
    }

    pub fn succeeding() -> Self {
        Self::with_reply(Ok(ReportResponse {
            success: Some(true),
            message: Some("Report sent".to_string()),
            details: None,
        }))
    }

    pub fn rejecting(status: u16, details: Option<&str>) -> Self {
        Self::with_reply(Err(SubmitError::Rejected {
            status: Some(status),
            details: details.map(str::to_string),
            message: format!("HTTP error! status: {}", status),
        }))
    }

    /// Hold every request open until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn watch(&self, state: Arc<tokio::sync::Mutex<AppState>>) {
        let _ = self.state.set(state);
    }

    pub fn sent(&self) -> Vec<ReportPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn submitting_seen(&self) -> Vec<bool> {
        self.submitting_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportTransport for FakeTransport {
    async fn send_report(&self, payload: &ReportPayload) -> Result<ReportResponse, SubmitError> {
        if let Some(state) = self.state.get() {
            let submitting = state.lock().await.is_submitting();
            self.submitting_seen.lock().unwrap().push(submitting);
        }
        self.sent.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.reply.clone()
    }
}

pub struct Harness {
    pub controller: SubmissionController,
    pub state: Arc<tokio::sync::Mutex<AppState>>,
    pub transport: Arc<FakeTransport>,
    pub notices: Arc<RecordingNotices>,
}

pub fn harness(transport: FakeTransport) -> Harness {
    harness_in(Language::En, transport)
}

pub fn harness_in(language: Language, transport: FakeTransport) -> Harness {
    let state = Arc::new(tokio::sync::Mutex::new(AppState::new(language, Theme::Dark)));
    let transport = Arc::new(transport);
    transport.watch(state.clone());
    let notices = Arc::new(RecordingNotices::new());

    let controller = SubmissionController::new(
        state.clone(),
        MediaValidator::default(),
        Sanitizer::default(),
        transport.clone(),
        notices.clone(),
        DEFAULT_RECIPIENT,
    );

    Harness {
        controller,
        state,
        transport,
        notices,
    }
}

/// A noisy JPEG, so it does not compress down to nothing.
pub fn jpeg_file(name: &str, width: u32, height: u32) -> SelectedFile {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x.wrapping_mul(31) ^ y.wrapping_mul(17)) as u8,
            (x.wrapping_mul(7) + y.wrapping_mul(13)) as u8,
            (x ^ y) as u8,
        ])
    });
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .unwrap();
    SelectedFile::new(name, "image/jpeg", buffer)
}

pub fn pdf_file(name: &str, size: usize) -> SelectedFile {
    let mut data = b"%PDF-1.7\n".to_vec();
    data.resize(size, b' ');
    SelectedFile::new(name, "application/pdf", data)
}

pub fn text_file(name: &str, body: &str) -> SelectedFile {
    SelectedFile::new(name, "text/plain", body.as_bytes().to_vec())
}

pub const MB: usize = 1024 * 1024;
