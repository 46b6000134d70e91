//! Catalog loading, listing, and collection lookup.

use slr_catalog::{Catalog, CatalogSummary, Identifier};
use slr_model::ScenarioCollection;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Summary of one scenario for `show`-style listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub short_name: String,
    pub description: String,
    pub probability: String,
    pub unit: String,
    pub first_year: f64,
    pub last_year: f64,
}

/// The configured catalog file, or the bundled one.
pub fn open_catalog(config: &AppConfig) -> AppResult<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Ok(slr_catalog::load_path(path)?)
        }
        None => Ok(Catalog::builtin()?),
    }
}

pub fn list_collections(catalog: &Catalog, filter: Option<&str>) -> Vec<CatalogSummary> {
    match filter {
        Some(query) => catalog.filter(query),
        None => catalog.summaries(),
    }
}

pub fn load_collection(
    catalog: &Catalog,
    identifier: impl Into<Identifier>,
) -> AppResult<ScenarioCollection> {
    Ok(ScenarioCollection::from_catalog(catalog, identifier)?)
}

pub fn describe_scenarios(collection: &ScenarioCollection) -> Vec<ScenarioSummary> {
    collection
        .iter()
        .map(|scenario| ScenarioSummary {
            short_name: scenario.short_name().to_string(),
            description: scenario.description().to_string(),
            probability: scenario.probability().to_string(),
            unit: scenario.unit().to_string(),
            first_year: scenario.series().first_year(),
            last_year: scenario.series().last_year(),
        })
        .collect()
}
