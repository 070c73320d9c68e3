//! Main GatiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::trajectory::TrajectoryConstraints;

use super::error::ConfigLoadError;
use super::persistence::LogSection;
use super::trajectory::TrajectorySection;

/// Full Gati configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GatiConfig {
    /// Trajectory limits and sampling
    #[serde(default)]
    pub trajectory: TrajectorySection,

    /// Sample log output
    #[serde(default)]
    pub log: LogSection,
}

impl GatiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/gati.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/gati.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and sample period are positive and finite
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.constraints()
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;

        let period = self.trajectory.sample_period;
        if !(period.is_finite() && period > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "sample_period must be positive, got {}",
                period
            )));
        }

        if self.log.path.trim().is_empty() {
            return Err(ConfigLoadError::Invalid("log.path is empty".to_string()));
        }
        Ok(())
    }

    /// Get the trajectory constraints
    pub fn constraints(&self) -> TrajectoryConstraints {
        self.trajectory.to_constraints()
    }

    /// Get the sample period (s)
    pub fn sample_period(&self) -> f64 {
        self.trajectory.sample_period
    }

    /// Get the sample log path
    pub fn log_path(&self) -> &Path {
        Path::new(&self.log.path)
    }
}
