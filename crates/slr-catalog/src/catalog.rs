//! In-memory catalog of curated projection bundles.

use indexmap::IndexMap;
use slr_core::SlrResult;
use tracing::debug;

use crate::resolver::{CatalogResolver, Identifier};
use crate::schema::{CollectionRecord, RawCollectionRecord};
use crate::validate::validate_collection;
use crate::{CatalogError, CatalogResult};

const BUILTIN_SCENARIOS: &str = include_str!("../data/scenarios.json");

/// Canonical key → validated record, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: IndexMap<String, CollectionRecord>,
}

/// One line of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub key: String,
    pub location_name: String,
    pub station_id: String,
    pub issuer: String,
    pub scenario_count: usize,
}

impl CatalogSummary {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.key.to_ascii_lowercase().contains(&query)
            || self.location_name.to_ascii_lowercase().contains(&query)
            || self.station_id.to_ascii_lowercase().contains(&query)
            || self.issuer.to_ascii_lowercase().contains(&query)
    }
}

impl Catalog {
    /// Validate every raw entry. The first invalid entry fails the whole catalog.
    pub fn from_raw(raw: IndexMap<String, RawCollectionRecord>) -> CatalogResult<Self> {
        let mut entries = IndexMap::with_capacity(raw.len());
        for (key, record) in raw {
            let context = format!("catalog entry '{key}'");
            let typed = validate_collection(&record, &context)
                .map_err(|source| CatalogError::InvalidEntry {
                    key: key.clone(),
                    source,
                })?;
            entries.insert(key, typed);
        }
        debug!(entries = entries.len(), "catalog validated");
        Ok(Self { entries })
    }

    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        let raw: IndexMap<String, RawCollectionRecord> = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    pub fn from_yaml_str(content: &str) -> CatalogResult<Self> {
        let raw: IndexMap<String, RawCollectionRecord> = serde_yaml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// The dataset bundled with this crate.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_SCENARIOS)
    }

    /// Add or replace an entry. Replacing keeps the entry's original position.
    pub fn insert(&mut self, key: impl Into<String>, record: CollectionRecord) {
        self.entries.insert(key.into(), record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollectionRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&CollectionRecord> {
        self.entries.get(key)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &CollectionRecord)> {
        self.entries.get_index(index).map(|(k, v)| (k.as_str(), v))
    }

    pub fn resolver(&self) -> CatalogResolver<'_> {
        CatalogResolver::new(self)
    }

    /// Resolve `identifier` and return the canonical key with its record.
    pub fn lookup(&self, identifier: impl Into<Identifier>) -> SlrResult<(&str, &CollectionRecord)> {
        let key = self.resolver().resolve(identifier)?;
        let (key, record) = self
            .entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| slr_core::SlrError::UnknownIdentifier {
                identifier: key.to_string(),
            })?;
        Ok((key, record))
    }

    pub fn summaries(&self) -> Vec<CatalogSummary> {
        self.entries
            .iter()
            .map(|(key, record)| CatalogSummary {
                key: key.clone(),
                location_name: record.location_name.clone(),
                station_id: record.station_id.clone(),
                issuer: record.issuer.clone(),
                scenario_count: record.scenarios.len(),
            })
            .collect()
    }

    pub fn filter(&self, query: &str) -> Vec<CatalogSummary> {
        self.summaries()
            .into_iter()
            .filter(|summary| summary.matches_query(query))
            .collect()
    }
}
