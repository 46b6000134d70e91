//! Identifier resolution against a [`Catalog`].

use core::fmt;

use slr_core::{SlrError, SlrResult};

use crate::catalog::Catalog;

/// What a caller may use to name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Position in catalog order.
    Index(usize),
    /// Canonical key, location name, or station ID.
    Text(String),
}

impl From<usize> for Identifier {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Identifier {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Maps identifiers to canonical keys.
///
/// Text lookup precedence: canonical key, then location name, then station ID.
/// Within a category the first entry in catalog order wins.
#[derive(Debug, Clone, Copy)]
pub struct CatalogResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, identifier: impl Into<Identifier>) -> SlrResult<&'a str> {
        match identifier.into() {
            Identifier::Index(index) => self
                .catalog
                .get_index(index)
                .map(|(key, _)| key)
                .ok_or(SlrError::IndexOutOfRange {
                    what: "catalog entries",
                    index,
                    len: self.catalog.len(),
                }),
            Identifier::Text(text) => {
                self.resolve_text(&text)
                    .ok_or(SlrError::UnknownIdentifier { identifier: text })
            }
        }
    }

    fn resolve_text(&self, text: &str) -> Option<&'a str> {
        let catalog = self.catalog;
        if let Some(key) = catalog.keys().find(|key| *key == text) {
            return Some(key);
        }
        if let Some((key, _)) = catalog.iter().find(|(_, r)| r.location_name == text) {
            return Some(key);
        }
        catalog
            .iter()
            .find(|(_, r)| r.station_id == text)
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colliding_catalog() -> Catalog {
        // "8518750" is both the key of the second entry and the station of the first.
        let json = r#"{
            "first": {
                "location name": "Battery, NY",
                "station ID (CO-OPS)": "8518750",
                "scenarios": []
            },
            "8518750": {
                "location name": "first",
                "station ID (CO-OPS)": "0000000",
                "scenarios": []
            },
            "third": {
                "location name": "Battery, NY",
                "station ID (CO-OPS)": "1111111",
                "scenarios": []
            }
        }"#;
        Catalog::from_json_str(json).unwrap()
    }

    #[test]
    fn index_resolves_in_catalog_order() {
        let catalog = colliding_catalog();
        let resolver = catalog.resolver();
        assert_eq!(resolver.resolve(0usize).unwrap(), "first");
        assert_eq!(resolver.resolve(2usize).unwrap(), "third");
    }

    #[test]
    fn index_out_of_range() {
        let catalog = colliding_catalog();
        let err = catalog.resolver().resolve(catalog.len() + 5).unwrap_err();
        assert_eq!(
            err,
            SlrError::IndexOutOfRange {
                what: "catalog entries",
                index: 8,
                len: 3
            }
        );
    }

    #[test]
    fn key_wins_over_location_and_station() {
        let catalog = colliding_catalog();
        let resolver = catalog.resolver();
        // "first" is a key and also the location name of "8518750".
        assert_eq!(resolver.resolve("first").unwrap(), "first");
        // "8518750" is a key and also the station of "first".
        assert_eq!(resolver.resolve("8518750").unwrap(), "8518750");
    }

    #[test]
    fn location_name_takes_first_match() {
        let catalog = colliding_catalog();
        assert_eq!(catalog.resolver().resolve("Battery, NY").unwrap(), "first");
    }

    #[test]
    fn location_name_wins_over_station_id() {
        let catalog = Catalog::from_json_str(
            r#"{
                "a": {"location name": "Alpha", "station ID (CO-OPS)": "Shared", "scenarios": []},
                "b": {"location name": "Shared", "station ID (CO-OPS)": "2222222", "scenarios": []}
            }"#,
        )
        .unwrap();
        let resolver = catalog.resolver();
        assert_eq!(resolver.resolve("Shared").unwrap(), "b");
        assert_eq!(resolver.resolve(0usize).unwrap(), resolver.resolve("a").unwrap());
    }

    #[test]
    fn station_id_resolves() {
        let catalog = colliding_catalog();
        assert_eq!(catalog.resolver().resolve("1111111").unwrap(), "third");
    }

    #[test]
    fn unknown_text_is_reported() {
        let catalog = colliding_catalog();
        let err = catalog.resolver().resolve("Atlantis").unwrap_err();
        assert_eq!(
            err,
            SlrError::UnknownIdentifier {
                identifier: "Atlantis".to_string()
            }
        );
    }
}
