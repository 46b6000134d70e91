//! Horizon-year projection, unit conversion, and export.

use std::path::Path;

use slr_core::LengthUnit;
use slr_model::{Projection, ProjectionMode, ScenarioCollection, Table};
use tracing::info;

use crate::error::{AppError, AppResult};

/// What to project and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectOptions {
    pub horizon_year: f64,
    pub units: Option<LengthUnit>,
    pub mode: ProjectionMode,
    pub merge: bool,
}

/// `collection` in `units`, or itself when no unit is requested.
pub fn in_units(collection: &ScenarioCollection, units: Option<LengthUnit>) -> ScenarioCollection {
    match units {
        Some(unit) => collection.converted(unit),
        None => collection.clone(),
    }
}

pub fn project(collection: &ScenarioCollection, options: &ProjectOptions) -> AppResult<Projection> {
    if collection.is_empty() {
        return Err(AppError::NoData(format!(
            "no scenarios available for station {}",
            collection.station_id()
        )));
    }
    let view = in_units(collection, options.units);
    Ok(view.project_at(options.horizon_year, options.merge, options.mode)?)
}

pub fn converted_table(collection: &ScenarioCollection, units: LengthUnit) -> Table {
    collection.converted(units).tabular_view()
}

/// Render the collection as CSV; writes to `output` when given.
pub fn export_csv(
    collection: &ScenarioCollection,
    units: Option<LengthUnit>,
    output: Option<&Path>,
) -> AppResult<String> {
    let csv = in_units(collection, units).tabular_view().to_csv();
    if let Some(path) = output {
        std::fs::write(path, &csv).map_err(|e| AppError::ExportWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "exported table");
    }
    Ok(csv)
}
