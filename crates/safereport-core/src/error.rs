//! Error types module
//!
//! Each layer owns a focused error enum (validation, sanitization, encoding,
//! submission). They are unified under [`AppError`] at the controller so failures
//! can be logged at the right level and turned into exactly one notice.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation rejections
    Debug,
    /// Warning level - for recoverable issues the reporter can retry
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Sanitization failed: {0}")]
    Sanitization(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// The report could not be delivered. `details` is the backend-provided reason, if any.
    #[error("Submission failed: {message}")]
    Submission {
        message: String,
        details: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preference error: {0}")]
    Preference(String),
}

impl AppError {
    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Sanitization(_) => "SANITIZATION_ERROR",
            AppError::Encoding(_) => "ENCODING_ERROR",
            AppError::Submission { .. } => "SUBMISSION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Preference(_) => "PREFERENCE_ERROR",
        }
    }

    /// Whether the reporter can retry from an interactive state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Config(_))
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::Validation(_) => LogLevel::Debug,
            AppError::Sanitization(_)
            | AppError::Encoding(_)
            | AppError::Submission { .. }
            | AppError::Preference(_) => LogLevel::Warn,
            AppError::Config(_) => LogLevel::Error,
        }
    }

    /// Detail worth showing to the reporter, when there is one.
    pub fn user_detail(&self) -> Option<&str> {
        match self {
            AppError::Submission { details, message } => {
                Some(details.as_deref().unwrap_or(message.as_str()))
            }
            AppError::Encoding(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Emit this error through `tracing` at its log level.
    pub fn log(&self, context: &str) {
        match self.log_level() {
            LogLevel::Debug => {
                tracing::debug!(code = self.error_code(), error = %self, "{}", context)
            }
            LogLevel::Warn => {
                tracing::warn!(code = self.error_code(), error = %self, "{}", context)
            }
            LogLevel::Error => {
                tracing::error!(code = self.error_code(), error = %self, "{}", context)
            }
        }
    }
}
