mod browser_ui;
mod state;
mod thumbnails;
mod ui;

use crate::config::AppConfig;
use crate::models::FileRecord;
use crate::services::{FileService, Latency};
use crate::store::MockStore;
use crate::upload::{FileProcessor, Notification, UploadOrchestrator, UploadSource};
use crate::utils::Palette;
use eframe::{egui, App};
use log::{error, info, warn};
pub use state::{Route, UiState};
use std::path::PathBuf;
use std::sync::mpsc::{self as std_mpsc, Receiver};
use std::sync::Arc;
use std::time::Duration;
use thumbnails::ThumbnailCache;
use tokio::runtime::Runtime;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Things a click asks for, applied once the frame's widgets are laid out.
#[derive(Debug, Clone)]
pub(crate) enum UiAction {
    Preview(FileRecord),
    ToggleSelection(String),
    DeleteSelected,
    DismissUpload(String),
    PickFiles,
    PickFolder,
    GoHome,
    ResetDemo,
}

pub struct DropZone {
    runtime: Runtime,
    store: Arc<MockStore>,
    files: FileService,
    orchestrator: UploadOrchestrator,
    notifications: Receiver<Notification>,
    processor: FileProcessor,
    thumbnails: ThumbnailCache,
    state: UiState,
    config: AppConfig,
    palette: Palette,
}

impl DropZone {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        store: Arc<MockStore>,
        config: AppConfig,
        route: Route,
    ) -> Self {
        info!("Initializing DropZone");
        let latency: Latency = config.latency();
        let files = FileService::files(Arc::clone(&store), latency);
        let (orchestrator, notifications) = UploadOrchestrator::new(
            Arc::new(files.clone()),
            config.upload_settings(),
            runtime.handle().clone(),
        );

        let thumbnails = ThumbnailCache::new(runtime.handle().clone());

        let mut app = Self {
            runtime,
            store,
            files,
            orchestrator,
            notifications,
            processor: FileProcessor::new(),
            thumbnails,
            state: UiState {
                route,
                ..UiState::default()
            },
            config,
            palette: Palette::new(),
        };
        app.load_initial_data();
        app
    }

    fn load_initial_data(&mut self) {
        let orchestrator = self.orchestrator.clone();
        self.runtime.spawn(async move {
            if let Err(e) = orchestrator.refresh().await {
                warn!("Initial file load failed: {}", e);
            }
        });

        let (sender, receiver) = std_mpsc::channel();
        self.state.recent_receiver = Some(receiver);
        self.state.recent_loading = true;

        let files = self.files.clone();
        let limit = self.config.recent_files;
        self.runtime.spawn(async move {
            let mut recent = files.get_all().await;
            recent.truncate(limit);
            sender.send(recent).unwrap_or_default();
        });
    }

    /// Drops every file and upload back to the bundled data.
    pub fn reset_demo_data(&mut self) {
        info!("Resetting demo data");
        self.store.reset();
        self.orchestrator.clear_selection();
        self.state.reset_content();
        self.load_initial_data();
    }

    pub fn submit(&mut self, sources: Vec<UploadSource>) {
        if sources.is_empty() {
            return;
        }
        self.orchestrator.submit_files(sources);
    }

    fn pick_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new().pick_files() {
            let sources = self.processor.collect(paths);
            self.submit(sources);
        }
    }

    fn pick_folder(&mut self) {
        if let Some(folder) = rfd::FileDialog::new().pick_folder() {
            info!(
                "Found {} file(s) in {}",
                self.processor.count_files(&folder),
                folder.display()
            );
            let sources = self.processor.walk_folder(&folder);
            if sources.is_empty() {
                self.state.error_message =
                    Some(format!("No files found in {}", folder.display()));
                return;
            }
            self.state.error_message = None;
            self.submit(sources);
        }
    }

    fn delete_selected(&mut self) {
        let orchestrator = self.orchestrator.clone();
        self.runtime.spawn(async move {
            if let Err(e) = orchestrator.bulk_delete().await {
                error!("Bulk delete stopped: {}", e);
            }
        });
    }

    pub(crate) fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Preview(file) => self.state.open_preview(file),
            UiAction::ToggleSelection(id) => self.orchestrator.toggle_selection(&id),
            UiAction::DeleteSelected => self.delete_selected(),
            UiAction::DismissUpload(id) => {
                self.orchestrator.dismiss_upload(&id);
            }
            UiAction::PickFiles => self.pick_files(),
            UiAction::PickFolder => self.pick_folder(),
            UiAction::GoHome => self.state.route = Route::Home,
            UiAction::ResetDemo => self.reset_demo_data(),
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        self.orchestrator.set_drag_active(hovering);

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        self.orchestrator.set_drag_active(false);

        let mut paths: Vec<PathBuf> = Vec::new();
        let mut sources = Vec::new();
        for file in dropped {
            match (file.path, file.bytes) {
                (Some(path), _) => paths.push(path),
                (None, Some(bytes)) => sources.push(UploadSource::new(
                    file.name.clone(),
                    bytes.len() as u64,
                    crate::upload::mime::for_name(&file.name),
                )),
                (None, None) => warn!("Dropped file {} has no content", file.name),
            }
        }
        sources.extend(self.processor.collect(paths));
        self.submit(sources);
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        ctx.request_repaint_after(REPAINT_INTERVAL);

        while let Ok(notification) = self.notifications.try_recv() {
            self.state.push_toast(notification);
        }
        self.state.expire_toasts(self.config.toast_duration());

        if let Some(receiver) = &self.state.recent_receiver {
            if let Ok(files) = receiver.try_recv() {
                self.state.recent_files = files;
                self.state.recent_loading = false;
                self.state.recent_receiver = None;
            }
        }

        self.thumbnails.receive(ctx);
        self.handle_file_drops(ctx);
    }
}

impl App for DropZone {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
