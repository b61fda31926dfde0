use crate::error::ConfigError;
use crate::services::Latency;
use crate::upload::UploadSettings;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "DROPZONE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "dropzone.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Multiplier applied to every simulated service delay. `0` disables them.
    pub latency_scale: f32,
    pub tick_interval_ms: u64,
    pub completed_display_ms: u64,
    pub toast_ms: u64,
    pub default_tags: Vec<String>,
    pub recent_files: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 800.0,
            latency_scale: 1.0,
            tick_interval_ms: 500,
            completed_display_ms: 2000,
            toast_ms: 4000,
            default_tags: vec!["recent".to_string()],
            recent_files: 6,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `DROPZONE_CONFIG`, else `dropzone.json` in the
    /// working directory, else falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::from_path(&path),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn latency(&self) -> Latency {
        Latency::scaled(self.latency_scale)
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms.max(1)),
            completed_display: Duration::from_millis(self.completed_display_ms),
            default_tags: self.default_tags.clone(),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = AppConfig::from_json(r#"{ "latencyScale": 0.0, "recentFiles": 3 }"#).unwrap();
        assert_eq!(config.latency_scale, 0.0);
        assert_eq!(config.recent_files, 3);
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.default_tags, vec!["recent"]);
    }

    #[test]
    fn upload_settings_follow_config() {
        let config = AppConfig {
            tick_interval_ms: 0,
            completed_display_ms: 750,
            ..AppConfig::default()
        };
        let settings = config.upload_settings();
        assert_eq!(settings.tick_interval, Duration::from_millis(1));
        assert_eq!(settings.completed_display, Duration::from_millis(750));
    }

    #[test]
    fn from_path_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = AppConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_path_reports_missing_files() {
        let err = AppConfig::from_path(Path::new("/definitely/missing/dropzone.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
