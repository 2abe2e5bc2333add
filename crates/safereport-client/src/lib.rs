//! HTTP client for the report endpoint.
//!
//! One operation: POST the assembled [`ReportPayload`] as JSON and interpret the
//! reply. Submission is abstracted behind [`ReportTransport`] so the controller
//! can be driven by a fake in tests.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use safereport_core::{AppError, Config, ReportPayload};
use serde::Deserialize;
use std::time::Duration;

/// Body returned by the report endpoint. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered but did not accept the report.
    #[error("{message}")]
    Rejected {
        status: Option<u16>,
        details: Option<String>,
        message: String,
    },

    /// A success status with a body that is not a report response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Best reason to show the reporter.
    pub fn detail(&self) -> &str {
        match self {
            SubmitError::Rejected {
                details: Some(details),
                ..
            } => details,
            SubmitError::Rejected { message, .. } => message,
            SubmitError::Network(msg) | SubmitError::InvalidResponse(msg) => msg,
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Rejected {
                details, message, ..
            } => AppError::Submission { message, details },
            other => AppError::Submission {
                message: other.to_string(),
                details: None,
            },
        }
    }
}

/// Delivery seam between the controller and the network.
#[async_trait]
pub trait ReportTransport: Send + Sync {
    async fn send_report(&self, payload: &ReportPayload) -> Result<ReportResponse, SubmitError>;
}

/// HTTP client for the report endpoint.
#[derive(Clone, Debug)]
pub struct ReportClient {
    client: Client,
    report_url: String,
}

impl ReportClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(report_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            report_url: report_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.report_url(), config.request_timeout)
    }

    pub fn report_url(&self) -> &str {
        &self.report_url
    }
}

#[async_trait]
impl ReportTransport for ReportClient {
    async fn send_report(&self, payload: &ReportPayload) -> Result<ReportResponse, SubmitError> {
        tracing::debug!(
            url = %self.report_url,
            attachments = payload.attachments.len(),
            "Sending report"
        );

        let response = self
            .client
            .post(&self.report_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !status.is_success() {
            // Error bodies are best effort; a missing or malformed body still
            // yields the status-based message.
            let body: ReportResponse = serde_json::from_str(&text).unwrap_or_default();
            return Err(SubmitError::Rejected {
                status: Some(status.as_u16()),
                details: body.details,
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        let body: ReportResponse = serde_json::from_str(&text)
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

        if body.success == Some(false) {
            return Err(SubmitError::Rejected {
                status: Some(status.as_u16()),
                message: body
                    .message
                    .clone()
                    .unwrap_or_else(|| "Report was not accepted".to_string()),
                details: body.details,
            });
        }

        Ok(body)
    }
}
