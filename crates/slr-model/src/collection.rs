//! Scenario bundles for a single location.

use core::fmt;
use std::collections::BTreeSet;

use serde_json::Value;
use slr_catalog::{Catalog, CatalogResult, CollectionRecord, Identifier, record_from_value};
use slr_core::{LengthUnit, SlrError, SlrResult};
use tracing::debug;

use crate::scenario::Scenario;
use crate::table::Table;

/// Unit introspection result for a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitsSummary {
    /// No scenarios to inspect.
    Empty,
    /// Every scenario shares this unit.
    Uniform(LengthUnit),
    /// Per-scenario units, in scenario order.
    Mixed(Vec<LengthUnit>),
}

impl UnitsSummary {
    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    pub fn distinct(&self) -> BTreeSet<LengthUnit> {
        match self {
            Self::Empty => BTreeSet::new(),
            Self::Uniform(unit) => BTreeSet::from([*unit]),
            Self::Mixed(units) => units.iter().copied().collect(),
        }
    }
}

impl fmt::Display for UnitsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Uniform(unit) => write!(f, "{unit}"),
            Self::Mixed(units) => {
                let symbols: Vec<&str> = units.iter().map(|u| u.symbol()).collect();
                f.write_str(&symbols.join(", "))
            }
        }
    }
}

/// How horizon-year projections treat scenarios that do not cover the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// The first out-of-range scenario fails the whole projection.
    #[default]
    Strict,
    /// Out-of-range scenarios yield an empty value.
    Lenient,
}

/// Projected values of every scenario at one horizon year.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    pub name: String,
    pub year: f64,
    /// `(short name, value)` in scenario order.
    pub values: Vec<(String, Option<f64>)>,
}

impl ProjectionRow {
    pub fn get(&self, short_name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == short_name)
            .and_then(|(_, v)| *v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Row(ProjectionRow),
    Table(Table),
}

/// Ordered scenarios describing one physical location.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCollection {
    location_name: String,
    station_id: String,
    issuer: String,
    url: Option<String>,
    scenarios: Vec<Scenario>,
}

impl ScenarioCollection {
    pub fn new(
        scenarios: Vec<Scenario>,
        location_name: impl Into<String>,
        station_id: impl Into<String>,
        issuer: impl Into<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            location_name: location_name.into(),
            station_id: station_id.into(),
            issuer: issuer.into(),
            url,
            scenarios,
        }
    }

    pub fn from_record(record: &CollectionRecord) -> SlrResult<Self> {
        let scenarios = record
            .scenarios
            .iter()
            .map(Scenario::from_record)
            .collect::<SlrResult<Vec<_>>>()?;
        Ok(Self::new(
            scenarios,
            record.location_name.clone(),
            record.station_id.clone(),
            record.issuer.clone(),
            record.url.clone(),
        ))
    }

    /// Build from a loose JSON object using the catalog document keys.
    pub fn from_value(value: &Value) -> CatalogResult<Self> {
        let record = record_from_value(value)?;
        Ok(Self::from_record(&record)?)
    }

    /// Resolve `identifier` in `catalog` and build its collection.
    pub fn from_catalog(catalog: &Catalog, identifier: impl Into<Identifier>) -> SlrResult<Self> {
        let (key, record) = catalog.lookup(identifier)?;
        debug!(key, scenarios = record.scenarios.len(), "building collection");
        Self::from_record(record)
    }

    pub fn to_record(&self) -> CollectionRecord {
        CollectionRecord {
            location_name: self.location_name.clone(),
            station_id: self.station_id.clone(),
            issuer: self.issuer.clone(),
            url: self.url.clone(),
            scenarios: self.scenarios.iter().map(Scenario::to_record).collect(),
        }
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn item_at(&self, index: usize) -> SlrResult<&Scenario> {
        self.scenarios.get(index).ok_or(SlrError::IndexOutOfRange {
            what: "scenarios",
            index,
            len: self.scenarios.len(),
        })
    }

    pub fn find(&self, short_name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.short_name() == short_name)
    }

    pub fn units_summary(&self) -> UnitsSummary {
        let units: Vec<LengthUnit> = self.scenarios.iter().map(Scenario::unit).collect();
        match units.first() {
            None => UnitsSummary::Empty,
            Some(&first) if units.iter().all(|&u| u == first) => UnitsSummary::Uniform(first),
            Some(_) => UnitsSummary::Mixed(units),
        }
    }

    /// The one unit shared by every scenario.
    pub fn single_unit(&self) -> SlrResult<LengthUnit> {
        match self.units_summary() {
            UnitsSummary::Uniform(unit) => Ok(unit),
            UnitsSummary::Empty => Err(SlrError::NoScenarios {
                station_id: self.station_id.clone(),
            }),
            mixed @ UnitsSummary::Mixed(_) => Err(SlrError::MixedUnitsAmbiguous {
                units: mixed.to_string(),
            }),
        }
    }

    /// Outer join of every scenario's column on the year index.
    pub fn tabular_view(&self) -> Table {
        Table::join(self.scenarios.iter().map(Scenario::to_table))
    }

    /// Interpolate every scenario at `horizon_year`.
    pub fn row_at(&self, horizon_year: f64, mode: ProjectionMode) -> SlrResult<ProjectionRow> {
        let mut values = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            let value = match scenario.interpolate_at(horizon_year) {
                Ok(v) => Some(v),
                Err(SlrError::OutOfRange { .. }) if mode == ProjectionMode::Lenient => {
                    debug!(
                        scenario = scenario.short_name(),
                        horizon_year, "horizon outside scenario range"
                    );
                    None
                }
                Err(err) => return Err(err),
            };
            values.push((scenario.short_name().to_string(), value));
        }

        Ok(ProjectionRow {
            name: format!(
                "SLR at {} by {} [{}]",
                self.location_name,
                horizon_year,
                self.units_summary()
            ),
            year: horizon_year,
            values,
        })
    }

    /// The full tabular view with the projected row merged in at its year.
    pub fn merged_at(&self, horizon_year: f64, mode: ProjectionMode) -> SlrResult<Table> {
        let row = self.row_at(horizon_year, mode)?;
        let mut table = self.tabular_view();
        table.upsert_row(horizon_year, row.values.into_iter().map(|(_, v)| v).collect())?;
        Ok(table)
    }

    pub fn project_at(
        &self,
        horizon_year: f64,
        merge: bool,
        mode: ProjectionMode,
    ) -> SlrResult<Projection> {
        if merge {
            self.merged_at(horizon_year, mode).map(Projection::Table)
        } else {
            self.row_at(horizon_year, mode).map(Projection::Row)
        }
    }

    /// Convert every scenario in place and return the updated view.
    pub fn convert_all_in_place(&mut self, to: LengthUnit) -> Table {
        for scenario in &mut self.scenarios {
            scenario.convert_in_place(to);
        }
        self.tabular_view()
    }

    /// Independent deep copy in `to`; `self` is left unchanged.
    pub fn converted(&self, to: LengthUnit) -> ScenarioCollection {
        let mut copy = self.clone();
        copy.convert_all_in_place(to);
        copy
    }
}

impl fmt::Display for ScenarioCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sea level rise projections for {} issued by {}; there are {} scenario(s) available.",
            self.location_name,
            self.issuer,
            self.scenarios.len()
        )
    }
}
