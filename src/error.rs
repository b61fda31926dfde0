use thiserror::Error;

/// Failures raised by the mock data services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("Window error: {0}")]
    Window(String),
}
