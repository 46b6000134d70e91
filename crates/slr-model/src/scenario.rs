//! One named sea-level-rise trajectory.

use core::fmt;

use slr_catalog::ScenarioRecord;
use slr_core::{LengthUnit, Probability, SlrResult};

use crate::series::Series;
use crate::table::Table;

/// A probability-tagged, baseline-anchored trajectory (e.g. "Medium-High Risk Aversion").
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    description: String,
    short_name: String,
    probability: Probability,
    baseline_year: i32,
    series: Series,
}

impl Scenario {
    pub fn new(
        description: impl Into<String>,
        short_name: impl Into<String>,
        unit: LengthUnit,
        probability: Option<f64>,
        baseline_year: i32,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> SlrResult<Self> {
        let probability = Probability::new(probability)?;
        let series = Series::new(x, y, unit)?;
        Ok(Self {
            description: description.into(),
            short_name: short_name.into(),
            probability,
            baseline_year,
            series,
        })
    }

    pub fn from_record(record: &ScenarioRecord) -> SlrResult<Self> {
        Self::new(
            record.description.clone(),
            record.short_name.clone(),
            record.unit,
            record.probability.value(),
            record.baseline_year,
            record.x.clone(),
            record.y.clone(),
        )
    }

    pub fn to_record(&self) -> ScenarioRecord {
        ScenarioRecord {
            description: self.description.clone(),
            short_name: self.short_name.clone(),
            unit: self.unit(),
            probability: self.probability,
            baseline_year: self.baseline_year,
            x: self.series.x().to_vec(),
            y: self.series.y().to_vec(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn probability(&self) -> Probability {
        self.probability
    }

    pub fn baseline_year(&self) -> i32 {
        self.baseline_year
    }

    pub fn unit(&self) -> LengthUnit {
        self.series.unit()
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Projected rise at `horizon_year`, in [`Self::unit`].
    pub fn interpolate_at(&self, horizon_year: f64) -> SlrResult<f64> {
        self.series.interpolate_at(horizon_year)
    }

    pub fn convert_in_place(&mut self, to: LengthUnit) {
        self.series.convert_in_place(to);
    }

    /// Header used for this scenario's column, e.g. `"Low, 83.00% [ft]"`.
    pub fn column_label(&self) -> String {
        match self.probability.percent_label() {
            Some(pct) => format!("{}, {} [{}]", self.short_name, pct, self.unit()),
            None => format!("{} [{}]", self.short_name, self.unit()),
        }
    }

    pub fn index_label(&self) -> String {
        format!("Year (baseline: {})", self.baseline_year)
    }

    /// Single-column table indexed by year.
    pub fn to_table(&self) -> Table {
        Table::from_column(
            self.index_label(),
            self.column_label(),
            self.series.x(),
            self.series.y(),
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenario '{}', values are given in {} and years range from {} to {}",
            self.short_name,
            self.unit(),
            self.series.first_year(),
            self.series.last_year()
        )
    }
}
