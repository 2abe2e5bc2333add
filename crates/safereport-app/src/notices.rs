//! Notice surface: transient, theme-matched messages shown to the reporter.

use safereport_core::{Notice, Severity};
use std::sync::Mutex;

pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal: info and success to stdout, warnings and
/// errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotices;

impl TerminalNotices {
    fn label(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl NoticeSink for TerminalNotices {
    fn notify(&self, notice: Notice) {
        tracing::debug!(
            severity = ?notice.severity,
            theme = %notice.theme,
            auto_close_ms = notice.auto_close.as_millis() as u64,
            "Notice raised"
        );
        let line = format!("[{}] {}", Self::label(notice.severity), notice.message);
        match notice.severity {
            Severity::Info | Severity::Success => println!("{}", line),
            Severity::Warning | Severity::Error => eprintln!("{}", line),
        }
    }
}

/// Keeps every notice in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn last(&self) -> Option<Notice> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A panic while pushing cannot leave the Vec inconsistent.
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: Notice) {
        self.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safereport_core::Theme;

    #[test]
    fn test_recording_keeps_order() {
        let sink = RecordingNotices::new();
        sink.notify(Notice::warning("first", Theme::Dark));
        sink.notify(Notice::success("second", Theme::Light));

        let notices = sink.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "first");
        assert_eq!(sink.last().unwrap().severity, Severity::Success);

        sink.clear();
        assert!(sink.is_empty());
    }
}
