use crate::models::{
    CollectionDraft, CollectionPatch, CollectionRecord, FileDraft, FilePatch, FileRecord,
    UploadDraft, UploadPatch, UploadRecord,
};
use chrono::{DateTime, Duration, Utc};

/// An entity that can live in a [`Collection`](super::Collection).
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// Human-readable entity name, used in `NotFound` messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, now: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow merge: fields absent from `patch` keep their stored value.
    fn merge(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

impl Record for FileRecord {
    type Draft = FileDraft;
    type Patch = FilePatch;
    const KIND: &'static str = "File";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: FileDraft) -> Self {
        Self {
            id,
            name: draft.name,
            size: draft.size,
            mime_type: draft.mime_type,
            tags: draft.tags,
            thumbnail: draft.thumbnail,
            upload_date: now,
            last_modified: now,
        }
    }

    fn merge(&mut self, patch: FilePatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(mime_type) = patch.mime_type {
            self.mime_type = mime_type;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        // Must move forward even when two updates land on the same clock tick.
        self.last_modified = now.max(self.last_modified + Duration::milliseconds(1));
    }
}

impl Record for UploadRecord {
    type Draft = UploadDraft;
    type Patch = UploadPatch;
    const KIND: &'static str = "Upload";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: UploadDraft) -> Self {
        Self {
            id,
            file_id: draft.file_id,
            file_name: draft.file_name,
            progress: draft.progress,
            speed: draft.speed,
            status: draft.status,
            start_time: now,
        }
    }

    fn merge(&mut self, patch: UploadPatch, _now: DateTime<Utc>) {
        if let Some(file_id) = patch.file_id {
            self.file_id = file_id;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(speed) = patch.speed {
            self.speed = speed;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Record for CollectionRecord {
    type Draft = CollectionDraft;
    type Patch = CollectionPatch;
    const KIND: &'static str = "Collection";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, now: DateTime<Utc>, draft: CollectionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            created_date: now,
            files: draft.files,
            shared_with: draft.shared_with,
        }
    }

    fn merge(&mut self, patch: CollectionPatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(files) = patch.files {
            self.files = files;
        }
        if let Some(shared_with) = patch.shared_with {
            self.shared_with = shared_with;
        }
    }
}
