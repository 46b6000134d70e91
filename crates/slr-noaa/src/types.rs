//! Wire types for the NOAA CO-OPS data products.

use core::fmt;

use serde::{Deserialize, Serialize};
use slr_core::LengthUnit;

pub const PRODUCT_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov/dpapi/prod/webapi/product";

pub const TECH_REPORT_URL: &str =
    "https://oceanservice.noaa.gov/hazards/sealevelrise/sealevelrise-tech-report.html";

pub const DEFAULT_REPORT_YEAR: i32 = 2022;

/// Unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataUnits {
    #[default]
    Metric,
    English,
}

impl DataUnits {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::English => "english",
        }
    }

    /// Unit the provider reports projections in.
    pub fn length_unit(self) -> LengthUnit {
        match self {
            Self::Metric => LengthUnit::Centimeter,
            Self::English => LengthUnit::Inch,
        }
    }
}

impl fmt::Display for DataUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectionRequest {
    pub station: String,
    pub units: DataUnits,
    pub report_year: i32,
}

impl ProjectionRequest {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            units: DataUnits::default(),
            report_year: DEFAULT_REPORT_YEAR,
        }
    }

    pub fn with_units(mut self, units: DataUnits) -> Self {
        self.units = units;
        self
    }

    pub fn with_report_year(mut self, report_year: i32) -> Self {
        self.report_year = report_year;
        self
    }

    pub fn url(&self) -> String {
        format!(
            "{PRODUCT_BASE_URL}/slr_projections.json/?station={}&units={}&report_year={}",
            self.station, self.units, self.report_year
        )
    }
}

pub fn trend_url(station: &str) -> String {
    format!("{PRODUCT_BASE_URL}/sealvltrends.json/?station={station}&affil=US")
}

/// One row of the `slr_projections` product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRecord {
    pub scenario: String,
    pub projection_year: f64,
    pub projection_rsl: f64,
    #[serde(default)]
    pub station_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionsResponse {
    #[serde(rename = "SlrProjections")]
    pub projections: Option<Vec<ProjectionRecord>>,
}

/// One row of the `sealvltrends` product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub trend: f64,
    pub trend_error: f64,
    /// Rate unit such as `mm/yr`.
    pub units: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsResponse {
    #[serde(rename = "SeaLvlTrends")]
    pub trends: Option<Vec<TrendRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_url_carries_query() {
        let request = ProjectionRequest::new("9414290")
            .with_units(DataUnits::English)
            .with_report_year(2017);
        assert_eq!(
            request.url(),
            "https://api.tidesandcurrents.noaa.gov/dpapi/prod/webapi/product/slr_projections.json/?station=9414290&units=english&report_year=2017"
        );
    }

    #[test]
    fn defaults_to_metric_2022() {
        let request = ProjectionRequest::new("1");
        assert_eq!(request.units, DataUnits::Metric);
        assert_eq!(request.report_year, 2022);
        assert_eq!(request.units.length_unit(), LengthUnit::Centimeter);
    }

    #[test]
    fn projection_rows_decode() {
        let response: ProjectionsResponse = serde_json::from_str(
            r#"{"SlrProjections": [{"scenario": "Low", "projectionYear": 2030,
                "projectionRsl": 12.5, "stationName": "SAN_FRANCISCO", "extra": 1}]}"#,
        )
        .unwrap();
        let rows = response.projections.unwrap();
        assert_eq!(rows[0].projection_year, 2030.0);
        assert_eq!(rows[0].station_name.as_deref(), Some("SAN_FRANCISCO"));
    }
}
