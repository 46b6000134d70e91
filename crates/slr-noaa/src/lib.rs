//! slr-noaa: provider seam, NOAA projection adapter, and historical trends.

pub mod cache;
pub mod historical;
pub mod noaa;
pub mod provider;
pub mod recorded;
pub mod text;
pub mod types;

pub use cache::CachedProvider;
pub use historical::{HistoricalTrend, fetch_trend, station_for};
pub use noaa::{NOAA_SCENARIOS, build_collection, fetch_collection};
pub use provider::SlrProvider;
pub use recorded::RecordedProvider;
pub use types::*;

use slr_core::SlrError;

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("Provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("No recorded response at {path}")]
    NotRecorded { path: String },

    #[error("Response is missing '{what}'")]
    MissingPayload { what: String },

    #[error("Unparseable date '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid data: {0}")]
    Record(#[from] SlrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
