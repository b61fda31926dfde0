use super::mime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file handed to the orchestrator by a drop, the picker or a folder walk.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSource {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: Option<PathBuf>,
}

impl UploadSource {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            path: None,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid filename"))?
            .to_string_lossy()
            .to_string();

        Ok(Self {
            mime_type: mime::for_name(&name),
            name,
            size: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the user, rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadSettings {
    pub tick_interval: Duration,
    /// How long a completed upload stays on screen before it is dropped.
    pub completed_display: Duration,
    pub default_tags: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            completed_display: Duration::from_millis(2000),
            default_tags: vec!["recent".to_string()],
        }
    }
}
