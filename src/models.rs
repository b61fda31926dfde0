use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl FileRecord {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Caller-supplied fields for a new file record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDraft {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
}

/// Shallow-merge update for a file record. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilePatch {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub mime_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UploadStatus::Uploading)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: String,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub file_name: String,
    pub progress: f32,
    pub speed: f32,
    pub status: UploadStatus,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadDraft {
    pub file_id: Option<String>,
    pub file_name: String,
    pub progress: f32,
    pub speed: f32,
    pub status: UploadStatus,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self {
            file_id: None,
            file_name: String::new(),
            progress: 0.0,
            speed: 0.0,
            status: UploadStatus::Uploading,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPatch {
    pub file_id: Option<Option<String>>,
    pub progress: Option<f32>,
    pub speed: Option<f32>,
    pub status: Option<UploadStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub shared_with: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionDraft {
    pub name: String,
    pub files: Vec<String>,
    pub shared_with: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPatch {
    pub name: Option<String>,
    pub files: Option<Vec<String>>,
    pub shared_with: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_record_reads_seed_field_names() {
        let json = r#"{
            "id": "1",
            "name": "photo.png",
            "size": 1024,
            "type": "image/png",
            "tags": ["photos"],
            "thumbnail": null,
            "uploadDate": "2024-01-15T10:30:00Z",
            "lastModified": "2024-01-15T10:30:00Z"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mime_type, "image/png");
        assert!(record.is_image());
        assert_eq!(record.upload_date, record.last_modified);
    }

    #[test]
    fn only_uploading_is_non_terminal() {
        assert!(!UploadStatus::Uploading.is_terminal());
        assert!(UploadStatus::Completed.is_terminal());
        assert!(UploadStatus::Error.is_terminal());
    }
}
