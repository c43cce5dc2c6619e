//! User settings stored as settings.json in the app data directory

use crate::constants::{DEFAULT_EXCLUDED_SUBJECTS, ENV_ENDPOINT, ENV_TOKEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Record feed
    pub endpoint: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,

    // Subjects hidden from the filter dropdown
    pub excluded_subjects: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            endpoint: String::new(),
            token: String::new(),
            excluded_subjects: DEFAULT_EXCLUDED_SUBJECTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Settings file merged with the environment overrides.
    pub fn load(data_dir: &Path) -> Self {
        Self::load_file(&data_dir.join("settings.json"))
            .with_overrides(std::env::var(ENV_ENDPOINT).ok(), std::env::var(ENV_TOKEN).ok())
    }

    /// Settings file alone; a missing or unreadable file gives defaults.
    fn load_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    /// Apply environment overrides for the feed endpoint and token.
    /// Overridden values are kept in memory only.
    pub fn with_overrides(mut self, endpoint: Option<String>, token: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            debug!("Record endpoint taken from environment");
            self.endpoint = endpoint;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = token;
        }
        self
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        // Never persist a token that came from the environment
        let mut on_disk = Self::load_raw(&path).unwrap_or_default();
        on_disk.window_x = self.window_x;
        on_disk.window_y = self.window_y;
        on_disk.window_w = self.window_w;
        on_disk.window_h = self.window_h;

        match serde_json::to_string_pretty(&on_disk) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    fn load_raw(path: &Path) -> Option<Self> {
        let s = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&s).ok()
    }
}

/// Per-user data directory (settings, logs)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(crate::constants::APP_NAME)
}

/// Cache directory for downloaded cover images
pub fn cache_dir() -> PathBuf {
    data_dir().join("cache")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_file(&dir.path().join("settings.json"));
        assert_eq!(
            settings.excluded_subjects,
            vec!["Environmentalism and Nature", "Political - Police"]
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "endpoint": "https://example.org/zines", "excluded_subjects": [] }"#,
        )
        .unwrap();
        let settings = Settings::load_file(&dir.path().join("settings.json"));
        assert_eq!(settings.endpoint, "https://example.org/zines");
        assert!(settings.excluded_subjects.is_empty());
        assert_eq!(settings.window_w, None);

        let settings = settings.with_overrides(None, Some("from-env".into()));
        assert_eq!(settings.endpoint, "https://example.org/zines");
        assert_eq!(settings.token, "from-env");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        let settings = Settings::load_file(&dir.path().join("settings.json"));
        assert_eq!(settings.excluded_subjects.len(), 2);
    }

    #[test]
    fn environment_overrides_win_but_blank_ones_are_ignored() {
        let base = Settings {
            endpoint: "https://file.example/zines".into(),
            token: "from-file".into(),
            ..Default::default()
        };
        let s = base
            .clone()
            .with_overrides(Some("https://env.example/zines".into()), Some("from-env".into()));
        assert_eq!(s.endpoint, "https://env.example/zines");
        assert_eq!(s.token, "from-env");

        let s = base.with_overrides(Some("  ".into()), Some(String::new()));
        assert_eq!(s.endpoint, "https://file.example/zines");
        assert_eq!(s.token, "from-file");
    }

    #[test]
    fn save_only_touches_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "endpoint": "https://file.example/zines" }"#).unwrap();

        let settings = Settings {
            window_w: Some(1200.0),
            token: "from-env".into(),
            endpoint: "https://env.example/zines".into(),
            ..Default::default()
        };
        settings.save(dir.path());

        let saved = Settings::load_raw(&path).unwrap();
        assert_eq!(saved.window_w, Some(1200.0));
        assert_eq!(saved.endpoint, "https://file.example/zines");
        assert!(saved.token.is_empty());
    }
}
