//! Persisted theme preference.
//!
//! Stored as `{"theme": "dark"}` under the user's config directory. A missing
//! or unreadable file is never fatal: the default theme is used instead.

use safereport_core::{AppError, Config, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("No config directory available for preferences")]
    NoLocation,

    #[error("Failed to write preferences to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<PreferenceError> for AppError {
    fn from(err: PreferenceError) -> Self {
        AppError::Preference(err.to_string())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Theme,
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/safereport/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("safereport").join("preferences.json"))
    }

    pub fn from_config(config: &Config) -> Result<Self, PreferenceError> {
        config
            .preferences_path
            .clone()
            .or_else(Self::default_path)
            .map(Self::new)
            .ok_or(PreferenceError::NoLocation)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load_theme(&self) -> Theme {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Theme::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read preferences");
                return Theme::default();
            }
        };

        match serde_json::from_str::<Preferences>(&raw) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt preferences");
                Theme::default()
            }
        }
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        let body = serde_json::to_string_pretty(&Preferences { theme })?;
        let write_err = |source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        tokio::fs::write(&self.path, body).await.map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), theme = %theme, "Theme preference saved");
        Ok(())
    }

    /// Flip the theme in `state` and persist the new value.
    pub async fn toggle_theme(&self, state: &Mutex<AppState>) -> Result<Theme, PreferenceError> {
        let theme = state.lock().await.toggle_theme();
        self.save_theme(theme).await?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::new(dir.path().join("nested").join("preferences.json"))
    }

    #[tokio::test]
    async fn test_missing_file_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load_theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_save_creates_parents_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save_theme(Theme::Light).await.unwrap();
        assert_eq!(store.load_theme().await, Theme::Light);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"light\""));
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(PreferenceStore::new(path).load_theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_toggle_updates_state_and_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let state = Mutex::new(AppState::default());

        assert_eq!(store.toggle_theme(&state).await.unwrap(), Theme::Light);
        assert_eq!(state.lock().await.theme, Theme::Light);
        assert_eq!(store.load_theme().await, Theme::Light);
    }

    #[test]
    fn test_config_path_wins() {
        let config = Config {
            preferences_path: Some(PathBuf::from("/tmp/sr/prefs.json")),
            ..Default::default()
        };
        let store = PreferenceStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/sr/prefs.json"));
    }

    #[tokio::test]
    async fn test_write_failure_is_a_recoverable_warning() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let store = PreferenceStore::new(blocker.join("preferences.json"));

        let err = AppError::from(store.save_theme(Theme::Light).await.unwrap_err());
        assert_eq!(err.error_code(), "PREFERENCE_ERROR");
        assert_eq!(err.log_level(), safereport_core::LogLevel::Warn);
        assert!(err.is_recoverable());
    }
}
