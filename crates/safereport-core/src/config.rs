//! Configuration module
//!
//! Settings for the intake pipeline, the report endpoint and local preferences,
//! read from the environment (and an optional `.env` file).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::directory::DEFAULT_RECIPIENT;
use crate::models::Language;

const API_URL: &str = "http://localhost:5000";
const REPORT_ENDPOINT_PATH: &str = "/api/sendReport";
const MAX_FILE_SIZE_MB: usize = 10;
const IMAGE_QUALITY: u8 = 95;

/// What the sanitizer does when a strategy fails on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SanitizeFailurePolicy {
    /// Keep the original bytes, log a privacy warning, rely on the backend pass.
    #[default]
    FailOpen,
    /// Propagate the error and abort the intake batch.
    FailClosed,
}

impl FromStr for SanitizeFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "fail-open" | "fail_open" => Ok(SanitizeFailurePolicy::FailOpen),
            "closed" | "fail-closed" | "fail_closed" => Ok(SanitizeFailurePolicy::FailClosed),
            other => Err(format!("Invalid sanitize failure policy: {}", other)),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub report_endpoint_path: String,
    pub max_file_size_mb: usize,
    /// Re-encoding quality for raster images (1-100).
    pub image_quality: u8,
    pub sanitize_failure_policy: SanitizeFailurePolicy,
    pub default_recipient: String,
    pub default_language: Language,
    /// Transport timeout; `None` leaves it to the HTTP stack.
    pub request_timeout: Option<Duration>,
    /// Theme preference file; `None` uses the platform config directory.
    pub preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            report_endpoint_path: REPORT_ENDPOINT_PATH.to_string(),
            max_file_size_mb: MAX_FILE_SIZE_MB,
            image_quality: IMAGE_QUALITY,
            sanitize_failure_policy: SanitizeFailurePolicy::default(),
            default_recipient: DEFAULT_RECIPIENT.to_string(),
            default_language: Language::default(),
            request_timeout: None,
            preferences_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup (environment, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let report_endpoint_path = lookup("REPORT_ENDPOINT_PATH")
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.report_endpoint_path);

        let max_file_size_mb = match lookup("MAX_FILE_SIZE_MB") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("MAX_FILE_SIZE_MB must be a number: {}", e))?,
            None => defaults.max_file_size_mb,
        };

        let image_quality = match lookup("IMAGE_QUALITY") {
            Some(v) => v
                .trim()
                .parse::<u8>()
                .map_err(|e| anyhow::anyhow!("IMAGE_QUALITY must be 1-100: {}", e))?,
            None => defaults.image_quality,
        };

        let sanitize_failure_policy = match lookup("SANITIZE_FAILURE_POLICY") {
            Some(v) => v.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            None => defaults.sanitize_failure_policy,
        };

        let default_recipient = lookup("DEFAULT_RECIPIENT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.default_recipient);

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(v) => v.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            None => defaults.default_language,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Some(Duration::from_secs(v.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a number: {}", e)
            })?)),
            None => None,
        };

        let preferences_path = lookup("PREFERENCES_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            api_url,
            report_endpoint_path,
            max_file_size_mb,
            image_quality,
            sanitize_failure_policy,
            default_recipient,
            default_language,
            request_timeout,
            preferences_path,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if !(1..=100).contains(&self.image_quality) {
            return Err(anyhow::anyhow!("IMAGE_QUALITY must be between 1 and 100"));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "API_URL must be an http(s) URL, got {}",
                self.api_url
            ));
        }

        if !self.report_endpoint_path.starts_with('/') {
            return Err(anyhow::anyhow!("REPORT_ENDPOINT_PATH must start with '/'"));
        }

        Ok(())
    }

    /// Maximum accepted file size in bytes.
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Full URL of the report endpoint.
    pub fn report_url(&self) -> String {
        format!("{}{}", self.api_url, self.report_endpoint_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.max_file_size_mb, 10);
        assert_eq!(config.max_file_size_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.image_quality, 95);
        assert_eq!(config.sanitize_failure_policy, SanitizeFailurePolicy::FailOpen);
        assert_eq!(config.report_url(), "http://localhost:5000/api/sendReport");
        assert_eq!(config.default_recipient, DEFAULT_RECIPIENT);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_URL", "https://reports.example.com/"),
            ("MAX_FILE_SIZE_MB", "25"),
            ("SANITIZE_FAILURE_POLICY", "closed"),
            ("DEFAULT_LANGUAGE", "ar"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.report_url(), "https://reports.example.com/api/sendReport");
        assert_eq!(config.max_file_size_mb, 25);
        assert_eq!(config.sanitize_failure_policy, SanitizeFailurePolicy::FailClosed);
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_FILE_SIZE_MB", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("MAX_FILE_SIZE_MB", "ten")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("IMAGE_QUALITY", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("API_URL", "ftp://host")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("REPORT_ENDPOINT_PATH", "api")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SANITIZE_FAILURE_POLICY", "maybe")])).is_err());
    }
}
