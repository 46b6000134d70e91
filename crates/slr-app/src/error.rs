//! Error types for the slr-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives front ends a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Model(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Failed to write export file: {path}")]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for slr-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<slr_catalog::CatalogError> for AppError {
    fn from(err: slr_catalog::CatalogError) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<slr_core::SlrError> for AppError {
    fn from(err: slr_core::SlrError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<slr_noaa::ProviderError> for AppError {
    fn from(err: slr_noaa::ProviderError) -> Self {
        AppError::Provider(err.to_string())
    }
}
