//! TOML settings for standalone runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calibration::CalibrationVector;

/// Settings file contents.
///
/// ```toml
/// [calibrate]
/// initial = [1.2, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.15]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub calibrate: CalibrateConfig,
}

/// Calibrate-module settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalibrateConfig {
    /// Vector the mock vision link starts out with.
    pub initial: CalibrationVector,
}

impl ToolConfig {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
