//! Source of remote projection and trend data.

use crate::ProviderResult;
use crate::types::{ProjectionRecord, ProjectionRequest, TrendRecord};

/// Fetches raw provider rows. Implementations never build model types.
pub trait SlrProvider {
    fn projections(&self, request: &ProjectionRequest) -> ProviderResult<Vec<ProjectionRecord>>;

    fn trends(&self, station: &str) -> ProviderResult<Vec<TrendRecord>>;
}

impl<P: SlrProvider + ?Sized> SlrProvider for &P {
    fn projections(&self, request: &ProjectionRequest) -> ProviderResult<Vec<ProjectionRecord>> {
        (**self).projections(request)
    }

    fn trends(&self, station: &str) -> ProviderResult<Vec<TrendRecord>> {
        (**self).trends(station)
    }
}
