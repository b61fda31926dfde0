//! In-memory collections standing in for a backend.
//!
//! Every read hands out clones, so nothing outside this module can reach the
//! stored vectors.

mod record;
mod seed;

pub use record::Record;
pub use seed::SeedData;

use crate::error::ServiceError;
use crate::models::{CollectionRecord, FileRecord, UploadRecord};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

pub struct Collection<R> {
    seed: Vec<R>,
    records: Mutex<Vec<R>>,
}

impl<R: Record> Collection<R> {
    pub fn new(seed: Vec<R>) -> Self {
        Self {
            records: Mutex::new(seed.clone()),
            seed,
        }
    }

    fn records(&self) -> MutexGuard<'_, Vec<R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn all(&self) -> Vec<R> {
        self.records().clone()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn find(&self, id: &str) -> Result<R, ServiceError> {
        self.records()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))
    }

    /// Stores a new record at the front of the collection.
    pub fn insert(&self, draft: R::Draft) -> R {
        let mut records = self.records();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
        };
        let record = R::from_draft(id, Utc::now(), draft);
        records.insert(0, record.clone());
        record
    }

    pub fn update(&self, id: &str, patch: R::Patch) -> Result<R, ServiceError> {
        let mut records = self.records();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        record.merge(patch, Utc::now());
        Ok(record.clone())
    }

    pub fn remove(&self, id: &str) -> Result<R, ServiceError> {
        let mut records = self.records();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(R::KIND, id))?;
        Ok(records.remove(index))
    }

    /// Restores the collection to the data it was built with.
    pub fn reset(&self) {
        *self.records() = self.seed.clone();
    }
}

/// The three mock collections, built from injected seed data.
pub struct MockStore {
    pub files: Collection<FileRecord>,
    pub uploads: Collection<UploadRecord>,
    pub collections: Collection<CollectionRecord>,
}

impl MockStore {
    pub fn new(seed: SeedData) -> Self {
        Self {
            files: Collection::new(seed.files),
            uploads: Collection::new(seed.uploads),
            collections: Collection::new(seed.collections),
        }
    }

    pub fn seeded() -> Result<Self, serde_json::Error> {
        Ok(Self::new(SeedData::bundled()?))
    }

    pub fn empty() -> Self {
        Self::new(SeedData::default())
    }

    pub fn reset(&self) {
        self.files.reset();
        self.uploads.reset();
        self.collections.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileDraft, FilePatch};

    fn draft(name: &str) -> FileDraft {
        FileDraft {
            name: name.to_string(),
            size: 10,
            mime_type: "text/plain".to_string(),
            tags: vec!["recent".to_string()],
            thumbnail: None,
        }
    }

    #[test]
    fn insert_puts_new_records_first() {
        let store = MockStore::empty();
        store.files.insert(draft("a.txt"));
        store.files.insert(draft("b.txt"));

        let names: Vec<_> = store.files.all().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn snapshots_do_not_alias_stored_records() {
        let store = MockStore::empty();
        let created = store.files.insert(draft("a.txt"));

        let mut snapshot = store.files.all();
        snapshot[0].name = "changed".to_string();
        snapshot.clear();

        assert_eq!(store.files.find(&created.id).unwrap().name, "a.txt");
        assert_eq!(store.files.len(), 1);
    }

    #[test]
    fn update_keeps_fields_missing_from_patch() {
        let store = MockStore::empty();
        let created = store.files.insert(draft("a.txt"));

        let updated = store
            .files
            .update(
                &created.id,
                FilePatch {
                    tags: Some(vec!["work".to_string()]),
                    ..FilePatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "a.txt");
        assert_eq!(updated.size, 10);
        assert_eq!(updated.tags, vec!["work"]);
        assert!(updated.last_modified > created.last_modified);
    }

    #[test]
    fn reset_restores_seed_contents() {
        let store = MockStore::seeded().unwrap();
        let before = store.files.all();
        let first = before[0].id.clone();

        store.files.remove(&first).unwrap();
        store.files.insert(draft("extra.txt"));
        store.reset();

        assert_eq!(store.files.all(), before);
    }

    #[test]
    fn missing_ids_are_reported_per_entity() {
        let store = MockStore::empty();
        let err = store.uploads.remove("nope").unwrap_err();
        assert_eq!(err.to_string(), "Upload not found");
        assert!(store.collections.find("nope").is_err());
    }
}
