use serde::Serialize;
use std::time::Duration;

use super::language::Theme;

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient, non-blocking, localized message shown to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub theme: Theme,
    #[serde(with = "duration_millis")]
    pub auto_close: Duration,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>, theme: Theme) -> Self {
        let auto_close = match severity {
            Severity::Info | Severity::Success => Duration::from_millis(4000),
            Severity::Warning => Duration::from_millis(3000),
            Severity::Error => Duration::from_millis(4000),
        };
        Self {
            severity,
            message: message.into(),
            theme,
            auto_close,
        }
    }

    pub fn success(message: impl Into<String>, theme: Theme) -> Self {
        Self::new(Severity::Success, message, theme)
    }

    pub fn warning(message: impl Into<String>, theme: Theme) -> Self {
        Self::new(Severity::Warning, message, theme)
    }

    pub fn error(message: impl Into<String>, theme: Theme) -> Self {
        Self::new(Severity::Error, message, theme)
    }

    pub fn with_auto_close(mut self, auto_close: Duration) -> Self {
        self.auto_close = auto_close;
        self
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }
}
