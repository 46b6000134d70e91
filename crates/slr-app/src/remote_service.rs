//! NOAA projections and historical trends through the configured provider.

use slr_core::LengthUnit;
use slr_model::ScenarioCollection;
use slr_noaa::{
    CachedProvider, DataUnits, HistoricalTrend, ProjectionRequest, RecordedProvider,
    fetch_collection, fetch_trend,
};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

pub type AppProvider = CachedProvider<RecordedProvider>;

/// Provider over the configured recordings directory.
pub fn open_provider(config: &AppConfig) -> AppResult<AppProvider> {
    let dir = config.recordings_dir.as_ref().ok_or_else(|| {
        AppError::Config("recordings_dir must be set to use provider data".to_string())
    })?;
    Ok(CachedProvider::new(RecordedProvider::new(dir)))
}

pub fn noaa_collection(
    provider: &AppProvider,
    station: &str,
    units: DataUnits,
    report_year: i32,
) -> ScenarioCollection {
    let request = ProjectionRequest::new(station)
        .with_units(units)
        .with_report_year(report_year);
    fetch_collection(provider, &request)
}

pub fn historical_trend(
    provider: &AppProvider,
    station: &str,
    unit: LengthUnit,
) -> AppResult<HistoricalTrend> {
    fetch_trend(provider, station, unit)
        .ok_or_else(|| AppError::NoData(format!("no historical trend for station {station}")))
}
