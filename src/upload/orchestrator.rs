use crate::error::ServiceError;
use crate::models::{FileDraft, FileRecord, UploadRecord, UploadStatus};
use crate::services::FileApi;
use crate::upload::types::{Notification, UploadSettings, UploadSource};
use chrono::Utc;
use derivative::Derivative;
use log::{debug, error, info};
use rand::Rng;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Simulated progress never passes this on its own; only completion sets 100.
pub const PROGRESS_CAP: f32 = 90.0;
const MAX_PROGRESS_STEP: f32 = 20.0;

/// Everything the upload zone and file browser render from.
#[derive(Debug, Clone, Default)]
pub struct UploadBoard {
    /// In display order, oldest first.
    pub uploads: Vec<UploadRecord>,
    /// Committed files as last fetched from the file service.
    pub files: Vec<FileRecord>,
    pub selected: Vec<String>,
    pub drag_active: bool,
}

impl UploadBoard {
    pub fn is_selected(&self, file_id: &str) -> bool {
        self.selected.iter().any(|id| id == file_id)
    }

    pub fn upload(&self, upload_id: &str) -> Option<&UploadRecord> {
        self.uploads.iter().find(|u| u.id == upload_id)
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct UploadOrchestrator {
    #[derivative(Debug = "ignore")]
    api: Arc<dyn FileApi>,
    board: Arc<Mutex<UploadBoard>>,
    settings: UploadSettings,
    #[derivative(Debug = "ignore")]
    notifier: Sender<Notification>,
    #[derivative(Debug = "ignore")]
    runtime: Handle,
}

impl UploadOrchestrator {
    pub fn new(
        api: Arc<dyn FileApi>,
        settings: UploadSettings,
        runtime: Handle,
    ) -> (Self, Receiver<Notification>) {
        let (notifier, receiver) = channel();
        let orchestrator = Self {
            api,
            board: Arc::new(Mutex::new(UploadBoard::default())),
            settings,
            notifier,
            runtime,
        };
        (orchestrator, receiver)
    }

    fn board(&self) -> MutexGuard<'_, UploadBoard> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> UploadBoard {
        self.board().clone()
    }

    pub fn set_drag_active(&self, active: bool) {
        self.board().drag_active = active;
    }

    /// Replaces the committed file list with a fresh copy from the service.
    pub async fn refresh(&self) -> Result<(), ServiceError> {
        let files = self.api.list().await?;
        debug!("Fetched {} files", files.len());
        self.board().files = files;
        Ok(())
    }

    /// Starts one independent upload pipeline per source.
    ///
    /// The returned handles finish once each upload has either failed or been
    /// cleared from the board after its display delay.
    pub fn submit_files(&self, sources: Vec<UploadSource>) -> Vec<JoinHandle<()>> {
        if sources.is_empty() {
            return Vec::new();
        }
        info!("Submitting {} file(s) for upload", sources.len());

        sources
            .into_iter()
            .map(|source| {
                let upload_id = Uuid::new_v4().to_string();
                self.board().uploads.push(UploadRecord {
                    id: upload_id.clone(),
                    file_id: None,
                    file_name: source.name.clone(),
                    progress: 0.0,
                    speed: 0.0,
                    status: UploadStatus::Uploading,
                    start_time: Utc::now(),
                });
                self.runtime
                    .spawn(self.clone().run_upload(upload_id, source))
            })
            .collect()
    }

    async fn run_upload(self, upload_id: String, source: UploadSource) {
        info!("Uploading {} ({} bytes)", source.name, source.size);
        let ticker = self
            .runtime
            .spawn(self.clone().tick_progress(upload_id.clone()));

        let draft = self.draft_for(&upload_id, &source);
        let result = self.commit_upload(&upload_id, draft).await;
        ticker.abort();

        match result {
            Ok(saved) => {
                info!("Uploaded {} as {}", source.name, saved.id);
                self.notify(Notification::success(format!(
                    "{} uploaded successfully!",
                    source.name
                )));

                tokio::time::sleep(self.settings.completed_display).await;
                self.board().uploads.retain(|u| u.id != upload_id);
            }
            Err(e) => {
                self.with_upload(&upload_id, |upload| {
                    upload.status = UploadStatus::Error;
                });
                error!("Failed to upload {}: {}", source.name, e);
                self.notify(Notification::error(format!(
                    "Failed to upload {}",
                    source.name
                )));
            }
        }
    }

    /// Creates the file record and re-fetches the file list. A failed
    /// re-fetch fails the whole upload.
    async fn commit_upload(
        &self,
        upload_id: &str,
        draft: FileDraft,
    ) -> Result<FileRecord, ServiceError> {
        let saved = self.api.create(draft).await?;
        self.with_upload(upload_id, |upload| {
            upload.progress = 100.0;
            upload.status = UploadStatus::Completed;
            upload.file_id = Some(saved.id.clone());
        });
        self.refresh().await?;
        Ok(saved)
    }

    async fn tick_progress(self, upload_id: String) {
        let period = self.settings.tick_interval.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval(period);
        // The first tick fires immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let advanced = self.with_upload(&upload_id, |upload| {
                if upload.status != UploadStatus::Uploading || upload.progress >= PROGRESS_CAP {
                    return false;
                }
                let mut rng = rand::thread_rng();
                upload.progress =
                    (upload.progress + rng.gen::<f32>() * MAX_PROGRESS_STEP).min(PROGRESS_CAP);
                upload.speed = rng.gen::<f32>() * 5.0 + 1.0;
                upload.progress < PROGRESS_CAP
            });

            if advanced != Some(true) {
                break;
            }
        }
    }

    fn draft_for(&self, upload_id: &str, source: &UploadSource) -> FileDraft {
        let thumbnail = source.is_image().then(|| match &source.path {
            Some(path) => format!("file://{}", path.display()),
            None => format!("preview://{}", upload_id),
        });

        FileDraft {
            name: source.name.clone(),
            size: source.size,
            mime_type: source.mime_type.clone(),
            tags: self.settings.default_tags.clone(),
            thumbnail,
        }
    }

    fn with_upload<T>(
        &self,
        upload_id: &str,
        update: impl FnOnce(&mut UploadRecord) -> T,
    ) -> Option<T> {
        self.board()
            .uploads
            .iter_mut()
            .find(|u| u.id == upload_id)
            .map(update)
    }

    /// Removes a finished upload row. Rows still uploading are left alone.
    pub fn dismiss_upload(&self, upload_id: &str) -> bool {
        let mut board = self.board();
        let before = board.uploads.len();
        board
            .uploads
            .retain(|u| u.id != upload_id || !u.status.is_terminal());
        board.uploads.len() != before
    }

    pub fn toggle_selection(&self, file_id: &str) {
        let mut board = self.board();
        if let Some(index) = board.selected.iter().position(|id| id == file_id) {
            board.selected.remove(index);
        } else {
            board.selected.push(file_id.to_string());
        }
    }

    pub fn clear_selection(&self) {
        self.board().selected.clear();
    }

    /// Deletes every selected file, one after another.
    ///
    /// Stops at the first failure. Files deleted before it stay deleted and
    /// the selection is kept.
    pub async fn bulk_delete(&self) -> Result<usize, ServiceError> {
        let selected = self.board().selected.clone();
        if selected.is_empty() {
            return Ok(0);
        }
        info!("Deleting {} selected file(s)", selected.len());

        match self.delete_all(&selected).await {
            Ok(files) => {
                {
                    let mut board = self.board();
                    board.files = files;
                    board.selected.clear();
                }
                self.notify(Notification::success(format!(
                    "{} files deleted successfully!",
                    selected.len()
                )));
                Ok(selected.len())
            }
            Err(e) => {
                error!("Bulk delete failed: {}", e);
                self.notify(Notification::error("Failed to delete files"));
                Err(e)
            }
        }
    }

    async fn delete_all(&self, ids: &[String]) -> Result<Vec<FileRecord>, ServiceError> {
        for id in ids {
            self.api.delete(id).await?;
        }
        self.api.list().await
    }

    fn notify(&self, notification: Notification) {
        self.notifier.send(notification).unwrap_or_default();
    }
}
