//! Asynchronous CRUD services over the mock store.
//!
//! Each call waits for a fixed, per-operation delay before touching the store
//! so callers go through the same suspension points a networked backend would
//! give them. The delay is scaled by an injectable [`Latency`].

mod latency;

pub use latency::{Latency, OperationDelays};

use crate::error::ServiceError;
use crate::models::{CollectionRecord, FileDraft, FilePatch, FileRecord, UploadRecord};
use crate::store::{Collection, MockStore, Record};
use log::debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Object-safe boxed future returned by [`FileApi`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// File operations the upload orchestrator depends on.
pub trait FileApi: Send + Sync {
    fn list(&self) -> ServiceFuture<'_, Result<Vec<FileRecord>, ServiceError>>;

    fn get<'a>(&'a self, id: &'a str) -> ServiceFuture<'a, Result<FileRecord, ServiceError>>;

    fn create(&self, draft: FileDraft) -> ServiceFuture<'_, Result<FileRecord, ServiceError>>;

    fn update<'a>(
        &'a self,
        id: &'a str,
        patch: FilePatch,
    ) -> ServiceFuture<'a, Result<FileRecord, ServiceError>>;

    fn delete<'a>(&'a self, id: &'a str) -> ServiceFuture<'a, Result<FileRecord, ServiceError>>;
}

pub struct RecordService<R> {
    store: Arc<MockStore>,
    select: fn(&MockStore) -> &Collection<R>,
    delays: OperationDelays,
    latency: Latency,
}

pub type FileService = RecordService<FileRecord>;
pub type UploadService = RecordService<UploadRecord>;
pub type CollectionService = RecordService<CollectionRecord>;

impl<R> Clone for RecordService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            select: self.select,
            delays: self.delays,
            latency: self.latency,
        }
    }
}

impl RecordService<FileRecord> {
    pub fn files(store: Arc<MockStore>, latency: Latency) -> Self {
        Self::new(store, |s| &s.files, OperationDelays::FILES, latency)
    }
}

impl RecordService<UploadRecord> {
    pub fn uploads(store: Arc<MockStore>, latency: Latency) -> Self {
        Self::new(store, |s| &s.uploads, OperationDelays::UPLOADS, latency)
    }
}

impl RecordService<CollectionRecord> {
    pub fn collections(store: Arc<MockStore>, latency: Latency) -> Self {
        Self::new(
            store,
            |s| &s.collections,
            OperationDelays::COLLECTIONS,
            latency,
        )
    }
}

impl<R: Record> RecordService<R> {
    pub fn new(
        store: Arc<MockStore>,
        select: fn(&MockStore) -> &Collection<R>,
        delays: OperationDelays,
        latency: Latency,
    ) -> Self {
        Self {
            store,
            select,
            delays,
            latency,
        }
    }

    fn collection(&self) -> &Collection<R> {
        (self.select)(&self.store)
    }

    pub async fn get_all(&self) -> Vec<R> {
        self.latency.wait(self.delays.get_all).await;
        self.collection().all()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R, ServiceError> {
        self.latency.wait(self.delays.get_by_id).await;
        self.collection().find(id)
    }

    pub async fn create(&self, draft: R::Draft) -> Result<R, ServiceError> {
        self.latency.wait(self.delays.create).await;
        let record = self.collection().insert(draft);
        debug!("Created {} {}", R::KIND, record.id());
        Ok(record)
    }

    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R, ServiceError> {
        self.latency.wait(self.delays.update).await;
        let record = self.collection().update(id, patch)?;
        debug!("Updated {} {}", R::KIND, id);
        Ok(record)
    }

    pub async fn delete(&self, id: &str) -> Result<R, ServiceError> {
        self.latency.wait(self.delays.delete).await;
        let record = self.collection().remove(id)?;
        debug!("Deleted {} {}", R::KIND, id);
        Ok(record)
    }
}

impl FileApi for RecordService<FileRecord> {
    fn list(&self) -> ServiceFuture<'_, Result<Vec<FileRecord>, ServiceError>> {
        Box::pin(async move { Ok(self.get_all().await) })
    }

    fn get<'a>(&'a self, id: &'a str) -> ServiceFuture<'a, Result<FileRecord, ServiceError>> {
        Box::pin(self.get_by_id(id))
    }

    fn create(&self, draft: FileDraft) -> ServiceFuture<'_, Result<FileRecord, ServiceError>> {
        Box::pin(RecordService::create(self, draft))
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        patch: FilePatch,
    ) -> ServiceFuture<'a, Result<FileRecord, ServiceError>> {
        Box::pin(RecordService::update(self, id, patch))
    }

    fn delete<'a>(&'a self, id: &'a str) -> ServiceFuture<'a, Result<FileRecord, ServiceError>> {
        Box::pin(RecordService::delete(self, id))
    }
}
