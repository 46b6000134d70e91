//! slr-core: stable foundation for the sea-level-rise workspace.
//!
//! Contains:
//! - units (length units backed by uom + conversion)
//! - numeric (Real + tolerances + interpolation helpers)
//! - probability (CDF probability with explicit "unknown")
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod probability;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SlrError, SlrResult};
pub use numeric::*;
pub use probability::Probability;
pub use units::*;
