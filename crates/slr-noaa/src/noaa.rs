//! Builds scenario collections from NOAA `slr_projections` rows.

use slr_model::{Scenario, ScenarioCollection};
use tracing::{info, warn};

use crate::ProviderResult;
use crate::provider::SlrProvider;
use crate::text::station_label;
use crate::types::{ProjectionRecord, ProjectionRequest, TECH_REPORT_URL};

/// The five NOAA scenarios, in presentation order.
pub const NOAA_SCENARIOS: [&str; 5] = [
    "Low",
    "Intermediate-Low",
    "Intermediate",
    "Intermediate-High",
    "High",
];

pub const NOAA_BASELINE_YEAR: i32 = 2005;

pub fn issuer(report_year: i32) -> String {
    format!(
        "National Oceanographic and Atmospheric Administration, Sea Level Rise Projections, {report_year}"
    )
}

/// Collection with no scenarios, tagged with the requested station.
pub fn empty_collection(request: &ProjectionRequest) -> ScenarioCollection {
    ScenarioCollection::new(
        Vec::new(),
        request.station.clone(),
        request.station.clone(),
        issuer(request.report_year),
        Some(TECH_REPORT_URL.to_string()),
    )
}

/// Group `rows` into the NOAA scenarios. Scenarios without rows are skipped.
pub fn build_collection(
    request: &ProjectionRequest,
    rows: &[ProjectionRecord],
) -> ProviderResult<ScenarioCollection> {
    let unit = request.units.length_unit();
    let mut scenarios = Vec::with_capacity(NOAA_SCENARIOS.len());

    for name in NOAA_SCENARIOS {
        let mut points: Vec<(f64, f64)> = rows
            .iter()
            .filter(|row| row.scenario == name)
            .map(|row| (row.projection_year, row.projection_rsl))
            .collect();
        if points.is_empty() {
            warn!(station = %request.station, scenario = name, "no rows for scenario; skipping");
            continue;
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        scenarios.push(Scenario::new(
            format!("NOAA {name}"),
            name,
            unit,
            None,
            NOAA_BASELINE_YEAR,
            x,
            y,
        )?);
    }

    let location_name = rows
        .iter()
        .find_map(|row| row.station_name.as_deref())
        .map(station_label)
        .unwrap_or_else(|| request.station.clone());

    Ok(ScenarioCollection::new(
        scenarios,
        location_name,
        request.station.clone(),
        issuer(request.report_year),
        Some(TECH_REPORT_URL.to_string()),
    ))
}

/// Fetch and build a collection. Provider failures degrade to an empty collection.
pub fn fetch_collection<P: SlrProvider>(
    provider: &P,
    request: &ProjectionRequest,
) -> ScenarioCollection {
    info!(url = %request.url(), "requesting NOAA projections");
    let rows = match provider.projections(request) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(station = %request.station, error = %err, "projection fetch failed");
            return empty_collection(request);
        }
    };
    match build_collection(request, &rows) {
        Ok(collection) => collection,
        Err(err) => {
            warn!(station = %request.station, error = %err, "projection rows rejected");
            empty_collection(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataUnits;
    use slr_core::{LengthUnit, Probability};

    fn row(scenario: &str, year: f64, rsl: f64) -> ProjectionRecord {
        ProjectionRecord {
            scenario: scenario.to_string(),
            projection_year: year,
            projection_rsl: rsl,
            station_name: Some("SAN_FRANCISCO".to_string()),
        }
    }

    #[test]
    fn groups_rows_in_noaa_order() {
        let rows = vec![
            row("High", 2050.0, 60.0),
            row("Low", 2050.0, 20.0),
            row("High", 2030.0, 30.0),
            row("Low", 2030.0, 10.0),
            row("Intermediate", 2030.0, 15.0),
        ];
        let request = ProjectionRequest::new("9414290");
        let collection = build_collection(&request, &rows).unwrap();

        let names: Vec<&str> = collection.iter().map(|s| s.short_name()).collect();
        assert_eq!(names, vec!["Low", "Intermediate", "High"]);

        let high = collection.find("High").unwrap();
        assert_eq!(high.series().x(), &[2030.0, 2050.0]);
        assert_eq!(high.unit(), LengthUnit::Centimeter);
        assert_eq!(high.description(), "NOAA High");
        assert_eq!(high.baseline_year(), 2005);
        assert_eq!(high.probability(), Probability::Unknown);

        assert_eq!(collection.location_name(), "San Francisco");
        assert_eq!(
            collection.issuer(),
            "National Oceanographic and Atmospheric Administration, Sea Level Rise Projections, 2022"
        );
    }

    #[test]
    fn english_rows_are_inches() {
        let request = ProjectionRequest::new("1").with_units(DataUnits::English);
        let collection = build_collection(&request, &[row("Low", 2030.0, 4.0)]).unwrap();
        assert_eq!(collection.item_at(0).unwrap().unit(), LengthUnit::Inch);
    }

    #[test]
    fn no_rows_gives_empty_collection() {
        let request = ProjectionRequest::new("8518750");
        let collection = build_collection(&request, &[]).unwrap();
        assert!(collection.is_empty());
        assert_eq!(collection.station_id(), "8518750");
    }
}
