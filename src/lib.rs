pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod upload;
pub mod utils;

pub use app::{DropZone, Route};
pub use config::AppConfig;
pub use error::{AppError, ConfigError, ServiceError};
