//! Record validation: raw document records into typed records.

use serde_json::Value;
use slr_core::{LengthUnit, Probability, SlrError, SlrResult};

use crate::schema::{CollectionRecord, RawCollectionRecord, RawScenarioRecord, ScenarioRecord};
use crate::CatalogResult;

/// Issuer recorded when an entry does not name one.
pub const UNSPECIFIED_ISSUER: &str = "unspecified";

fn required<'a, T>(value: &'a Option<T>, field: &str, context: &str) -> SlrResult<&'a T> {
    value.as_ref().ok_or_else(|| SlrError::MissingField {
        field: field.to_string(),
        context: context.to_string(),
    })
}

pub fn validate_collection(raw: &RawCollectionRecord, context: &str) -> SlrResult<CollectionRecord> {
    let location_name = required(&raw.location_name, "location name", context)?;
    let station_id = required(&raw.station_id, "station ID (CO-OPS)", context)?;
    let raw_scenarios = required(&raw.scenarios, "scenarios", context)?;

    let mut scenarios = Vec::with_capacity(raw_scenarios.len());
    for (i, raw_scenario) in raw_scenarios.iter().enumerate() {
        let scenario_context = format!("scenario #{i} of {context}");
        scenarios.push(validate_scenario(raw_scenario, &scenario_context)?);
    }

    Ok(CollectionRecord {
        location_name: location_name.clone(),
        station_id: station_id.clone(),
        issuer: raw
            .issuer
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_ISSUER.to_string()),
        url: raw.url.clone(),
        scenarios,
    })
}

pub fn validate_scenario(raw: &RawScenarioRecord, context: &str) -> SlrResult<ScenarioRecord> {
    let description = required(&raw.description, "description", context)?;
    let short_name = required(&raw.short_name, "short name", context)?;
    let units = required(&raw.units, "units", context)?;
    let baseline_year = required(&raw.baseline_year, "baseline year", context)?;
    let data = required(&raw.data, "data", context)?;
    let x = required(&data.x, "x", context)?;
    let y = required(&data.y, "y", context)?;

    let unit = LengthUnit::parse(units)?;
    let probability = Probability::new(raw.probability)?;

    Ok(ScenarioRecord {
        description: description.clone(),
        short_name: short_name.clone(),
        unit,
        probability,
        baseline_year: *baseline_year,
        x: x.clone(),
        y: y.clone(),
    })
}

/// Decode and validate a collection record held as a loose JSON value.
pub fn record_from_value(value: &Value) -> CatalogResult<CollectionRecord> {
    let raw: RawCollectionRecord = serde_json::from_value(value.clone())?;
    Ok(validate_collection(&raw, "record")?)
}
