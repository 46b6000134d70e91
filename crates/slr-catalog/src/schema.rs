//! Catalog record definitions.
//!
//! `Raw*` types mirror the on-disk document and keep every field optional so that
//! missing keys surface as [`SlrError::MissingField`](slr_core::SlrError) during
//! validation instead of as opaque decode failures. The typed records produced by
//! [`crate::validate`] are what entity constructors consume.

use serde::{Deserialize, Serialize};
use slr_core::{LengthUnit, Probability};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawCollectionRecord {
    #[serde(
        rename = "location name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_name: Option<String>,
    #[serde(
        rename = "station ID (CO-OPS)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub station_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<RawScenarioRecord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawScenarioRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "short name", default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(rename = "probability (CDF)", default)]
    pub probability: Option<f64>,
    #[serde(
        rename = "baseline year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub baseline_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RawSeriesData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawSeriesData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
}

/// Validated catalog entry for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRecord {
    pub location_name: String,
    pub station_id: String,
    pub issuer: String,
    pub url: Option<String>,
    pub scenarios: Vec<ScenarioRecord>,
}

/// Validated scenario entry. `x`/`y` are checked when the series is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub description: String,
    pub short_name: String,
    pub unit: LengthUnit,
    pub probability: Probability,
    pub baseline_year: i32,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl From<&ScenarioRecord> for RawScenarioRecord {
    fn from(record: &ScenarioRecord) -> Self {
        Self {
            description: Some(record.description.clone()),
            short_name: Some(record.short_name.clone()),
            units: Some(record.unit.symbol().to_string()),
            probability: record.probability.value(),
            baseline_year: Some(record.baseline_year),
            data: Some(RawSeriesData {
                x: Some(record.x.clone()),
                y: Some(record.y.clone()),
            }),
        }
    }
}

impl From<&CollectionRecord> for RawCollectionRecord {
    fn from(record: &CollectionRecord) -> Self {
        Self {
            location_name: Some(record.location_name.clone()),
            station_id: Some(record.station_id.clone()),
            issuer: Some(record.issuer.clone()),
            url: record.url.clone(),
            scenarios: Some(record.scenarios.iter().map(RawScenarioRecord::from).collect()),
        }
    }
}
