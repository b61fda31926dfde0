use crate::browser::{SortBy, ViewMode};
use crate::models::FileRecord;
use crate::upload::Notification;
use derivative::Derivative;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path.trim() {
            "" | "/" => Route::Home,
            other => Route::NotFound(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Window-side state: everything the orchestrator does not own.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct UiState {
    pub route: Route,
    pub view_mode: ViewMode,
    pub sort_by: SortBy,
    pub preview: Option<FileRecord>,
    pub recent_files: Vec<FileRecord>,
    pub recent_loading: bool,
    pub error_message: Option<String>,
    pub toasts: Vec<Toast>,
    #[derivative(Debug = "ignore")]
    pub recent_receiver: Option<Receiver<Vec<FileRecord>>>,
}

impl UiState {
    /// Forgets everything derived from the data store. Route, view mode and
    /// sort order are kept.
    pub fn reset_content(&mut self) {
        self.preview = None;
        self.recent_files.clear();
        self.recent_loading = false;
        self.recent_receiver = None;
        self.error_message = None;
    }

    pub fn push_toast(&mut self, notification: Notification) {
        self.toasts.push(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }

    pub fn expire_toasts(&mut self, ttl: Duration) {
        self.toasts.retain(|toast| toast.shown_at.elapsed() < ttl);
    }

    pub fn open_preview(&mut self, file: FileRecord) {
        self.preview = Some(file);
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_root_paths_route_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(
            Route::parse("/missing"),
            Route::NotFound("/missing".to_string())
        );
    }

    #[test]
    fn content_reset_keeps_navigation_and_view_choices() {
        let mut state = UiState {
            route: Route::NotFound("/old".to_string()),
            view_mode: ViewMode::List,
            sort_by: SortBy::Size,
            recent_loading: true,
            error_message: Some("No files found".to_string()),
            ..UiState::default()
        };
        state.reset_content();

        assert_eq!(state.route, Route::NotFound("/old".to_string()));
        assert_eq!(state.view_mode, ViewMode::List);
        assert_eq!(state.sort_by, SortBy::Size);
        assert!(!state.recent_loading);
        assert!(state.preview.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn toasts_expire_after_their_ttl() {
        let mut state = UiState::default();
        state.push_toast(Notification::success("done"));
        state.expire_toasts(Duration::from_secs(60));
        assert_eq!(state.toasts.len(), 1);
        state.expire_toasts(Duration::ZERO);
        assert!(state.toasts.is_empty());
    }
}
