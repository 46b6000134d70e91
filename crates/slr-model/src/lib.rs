//! slr-model: scenario data model and projection engine.
//!
//! Series → Scenario → ScenarioCollection, plus the year-indexed [`Table`]
//! they render into.

pub mod collection;
pub mod scenario;
pub mod series;
pub mod table;

pub use collection::{Projection, ProjectionMode, ProjectionRow, ScenarioCollection, UnitsSummary};
pub use scenario::Scenario;
pub use series::Series;
pub use table::{Table, TableRow};
