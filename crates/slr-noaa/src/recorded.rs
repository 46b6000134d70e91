//! Replay provider backed by response files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::provider::SlrProvider;
use crate::types::{
    ProjectionRecord, ProjectionRequest, ProjectionsResponse, TrendRecord, TrendsResponse,
};
use crate::{ProviderError, ProviderResult};

/// Serves provider responses saved as JSON documents:
/// `{station}_{units}_{report_year}.json` and `{station}_trend.json`.
#[derive(Debug, Clone)]
pub struct RecordedProvider {
    root_dir: PathBuf,
}

impl RecordedProvider {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn projections_path(&self, request: &ProjectionRequest) -> PathBuf {
        self.root_dir.join(format!(
            "{}_{}_{}.json",
            request.station, request.units, request.report_year
        ))
    }

    pub fn trend_path(&self, station: &str) -> PathBuf {
        self.root_dir.join(format!("{station}_trend.json"))
    }

    pub fn has_projections(&self, request: &ProjectionRequest) -> bool {
        self.projections_path(request).exists()
    }

    /// Store a projections response for later replay.
    pub fn record_projections(
        &self,
        request: &ProjectionRequest,
        rows: &[ProjectionRecord],
    ) -> ProviderResult<()> {
        fs::create_dir_all(&self.root_dir)?;
        let response = ProjectionsResponse {
            projections: Some(rows.to_vec()),
        };
        fs::write(
            self.projections_path(request),
            serde_json::to_string_pretty(&response)?,
        )?;
        Ok(())
    }

    pub fn record_trends(&self, station: &str, rows: &[TrendRecord]) -> ProviderResult<()> {
        fs::create_dir_all(&self.root_dir)?;
        let response = TrendsResponse {
            trends: Some(rows.to_vec()),
        };
        fs::write(
            self.trend_path(station),
            serde_json::to_string_pretty(&response)?,
        )?;
        Ok(())
    }

    fn read(&self, path: &Path) -> ProviderResult<String> {
        if !path.exists() {
            return Err(ProviderError::NotRecorded {
                path: path.display().to_string(),
            });
        }
        debug!(path = %path.display(), "replaying recorded response");
        Ok(fs::read_to_string(path)?)
    }
}

impl SlrProvider for RecordedProvider {
    fn projections(&self, request: &ProjectionRequest) -> ProviderResult<Vec<ProjectionRecord>> {
        let content = self.read(&self.projections_path(request))?;
        let response: ProjectionsResponse = serde_json::from_str(&content)?;
        response.projections.ok_or_else(|| ProviderError::MissingPayload {
            what: "SlrProjections".to_string(),
        })
    }

    fn trends(&self, station: &str) -> ProviderResult<Vec<TrendRecord>> {
        let content = self.read(&self.trend_path(station))?;
        let response: TrendsResponse = serde_json::from_str(&content)?;
        response.trends.ok_or_else(|| ProviderError::MissingPayload {
            what: "SeaLvlTrends".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataUnits;

    #[test]
    fn paths_follow_naming_scheme() {
        let provider = RecordedProvider::new("/data/noaa");
        let request = ProjectionRequest::new("9414290").with_units(DataUnits::English);
        assert_eq!(
            provider.projections_path(&request),
            PathBuf::from("/data/noaa/9414290_english_2022.json")
        );
        assert_eq!(
            provider.trend_path("9414290"),
            PathBuf::from("/data/noaa/9414290_trend.json")
        );
    }

    #[test]
    fn missing_file_is_not_recorded() {
        let provider = RecordedProvider::new(std::env::temp_dir().join("slr_noaa_missing_dir"));
        let err = provider.trends("0000000").unwrap_err();
        assert!(matches!(err, ProviderError::NotRecorded { .. }));
    }

    #[test]
    fn record_then_replay() {
        let dir = std::env::temp_dir().join(format!("slr_noaa_recorded_{}", std::process::id()));
        let provider = RecordedProvider::new(&dir);
        let request = ProjectionRequest::new("42");
        let rows = vec![ProjectionRecord {
            scenario: "Low".to_string(),
            projection_year: 2030.0,
            projection_rsl: 10.0,
            station_name: Some("TEST_HARBOR".to_string()),
        }];

        provider.record_projections(&request, &rows).unwrap();
        assert!(provider.has_projections(&request));
        assert_eq!(provider.projections(&request).unwrap(), rows);

        fs::remove_dir_all(&dir).ok();
    }
}
