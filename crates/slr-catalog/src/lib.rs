//! slr-catalog: curated projection catalog, record validation, and identifier resolution.

pub mod catalog;
pub mod resolver;
pub mod schema;
pub mod validate;

pub use catalog::{Catalog, CatalogSummary};
pub use resolver::{CatalogResolver, Identifier};
pub use schema::*;
pub use validate::{record_from_value, validate_collection, validate_scenario};

use slr_core::SlrError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog entry '{key}': {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: SlrError,
    },

    #[error("Invalid record: {0}")]
    Record(#[from] SlrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_json(path: &std::path::Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    Catalog::from_json_str(&content)
}

pub fn load_yaml(path: &std::path::Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    Catalog::from_yaml_str(&content)
}

/// Load a catalog file, picking the format from the extension (`.yaml`/`.yml` or JSON).
pub fn load_path(path: &std::path::Path) -> CatalogResult<Catalog> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_yaml(path),
        _ => load_json(path),
    }
}

pub fn save_json(path: &std::path::Path, catalog: &Catalog) -> CatalogResult<()> {
    let raw: indexmap::IndexMap<&str, RawCollectionRecord> = catalog
        .iter()
        .map(|(key, record)| (key, RawCollectionRecord::from(record)))
        .collect();
    let content = serde_json::to_string_pretty(&raw)?;
    std::fs::write(path, content)?;
    Ok(())
}
