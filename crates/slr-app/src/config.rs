//! Application configuration loaded from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slr_core::LengthUnit;
use slr_model::ProjectionMode;
use slr_noaa::DEFAULT_REPORT_YEAR;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Replaces the bundled catalog when set.
    pub catalog_path: Option<PathBuf>,
    /// Directory of recorded provider responses.
    pub recordings_dir: Option<PathBuf>,
    pub default_units: Option<LengthUnit>,
    pub lenient: bool,
    pub report_year: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recordings_dir: None,
            default_units: None,
            lenient: false,
            report_year: DEFAULT_REPORT_YEAR,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        if self.lenient {
            ProjectionMode::Lenient
        } else {
            ProjectionMode::Strict
        }
    }
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    AppConfig::from_yaml_str(&content)
}
