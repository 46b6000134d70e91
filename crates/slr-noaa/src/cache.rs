//! Per-request memoization of provider responses.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::ProviderResult;
use crate::provider::SlrProvider;
use crate::types::{ProjectionRecord, ProjectionRequest, TrendRecord};

/// Wraps a provider and keeps successful responses. Failures are not cached.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    projections: Mutex<HashMap<ProjectionRequest, Vec<ProjectionRecord>>>,
    trends: Mutex<HashMap<String, Vec<TrendRecord>>>,
}

impl<P: SlrProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            projections: Mutex::new(HashMap::new()),
            trends: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn clear(&self) {
        self.projections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.trends
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<P: SlrProvider> SlrProvider for CachedProvider<P> {
    fn projections(&self, request: &ProjectionRequest) -> ProviderResult<Vec<ProjectionRecord>> {
        let mut cache = self
            .projections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(rows) = cache.get(request) {
            debug!(station = %request.station, "projection cache hit");
            return Ok(rows.clone());
        }
        let rows = self.inner.projections(request)?;
        cache.insert(request.clone(), rows.clone());
        Ok(rows)
    }

    fn trends(&self, station: &str) -> ProviderResult<Vec<TrendRecord>> {
        let mut cache = self.trends.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rows) = cache.get(station) {
            debug!(station, "trend cache hit");
            return Ok(rows.clone());
        }
        let rows = self.inner.trends(station)?;
        cache.insert(station.to_string(), rows.clone());
        Ok(rows)
    }
}
