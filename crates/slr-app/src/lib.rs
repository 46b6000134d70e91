//! Shared application service layer for the sea-level-rise tools.
//!
//! Front ends go through these services for catalog access, projections,
//! exports, and provider-backed data.

pub mod catalog_service;
pub mod config;
pub mod error;
pub mod projection_service;
pub mod remote_service;

pub use catalog_service::{
    ScenarioSummary, describe_scenarios, list_collections, load_collection, open_catalog,
};
pub use config::{AppConfig, load_config};
pub use error::{AppError, AppResult};
pub use projection_service::{ProjectOptions, converted_table, export_csv, in_units, project};
pub use remote_service::{AppProvider, historical_trend, noaa_collection, open_provider};
