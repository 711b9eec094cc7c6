use std::time::Duration;
use thiserror::Error;

/// Failures reported by a [`LocationProvider`](crate::services::location::LocationProvider).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("position request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Position unavailable: {0}")]
    PositionUnavailable(#[from] LocationError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Log the error at a level matching its kind and hand it back.
    pub fn logged(self) -> Self {
        match &self {
            AppError::PositionUnavailable(e) => tracing::warn!("Position unavailable: {}", e),
            AppError::InvalidParameter(e) => tracing::debug!("Invalid parameter: {}", e),
            AppError::Catalog(e) => tracing::error!("Catalog error: {}", e),
            AppError::Storage(e) => tracing::error!("Storage error: {}", e),
            AppError::NotFound(e) => tracing::info!("Not found: {}", e),
            AppError::Io(e) => tracing::error!("I/O error: {}", e),
            AppError::Serialization(e) => tracing::error!("Serialization error: {}", e),
        }
        self
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
