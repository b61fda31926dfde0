mod file_processor;
pub mod mime;
mod orchestrator;
mod types;

pub use file_processor::FileProcessor;
pub use orchestrator::{UploadBoard, UploadOrchestrator, PROGRESS_CAP};
pub use types::{Notification, NotificationLevel, UploadSettings, UploadSource};
