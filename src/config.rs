//! Configuration management and validation.
//!
//! Holds the target station and the knobs for the concurrent file
//! pipeline. Sector geometry and report patterns are fixed.

use crate::constants::DEFAULT_STATION;
use crate::error::{Result, WindsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Global configuration for a wind-distribution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindsConfig {
    /// ICAO identifier of the station whose reports are counted
    pub station: String,

    /// Maximum number of bulletin files processed at once
    pub max_concurrent_files: usize,

    /// Descend into subdirectories of the input directory
    pub recursive: bool,

    /// Draw a progress bar while files are processed
    pub show_progress: bool,
}

impl Default for WindsConfig {
    fn default() -> Self {
        Self {
            station: DEFAULT_STATION.to_string(),
            max_concurrent_files: num_cpus::get(),
            recursive: false,
            show_progress: true,
        }
    }
}

impl WindsConfig {
    /// Set the target station
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    /// Set the worker limit
    pub fn with_max_concurrent_files(mut self, max_concurrent_files: usize) -> Self {
        self.max_concurrent_files = max_concurrent_files;
        self
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.station.is_empty() {
            return Err(WindsError::configuration("station identifier is empty"));
        }

        if !self
            .station
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(WindsError::configuration(format!(
                "station identifier '{}' must contain only uppercase letters and digits",
                self.station
            )));
        }

        if self.max_concurrent_files == 0 {
            return Err(WindsError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }

        debug!(
            "Configuration valid: station={}, max_concurrent_files={}, recursive={}",
            self.station, self.max_concurrent_files, self.recursive
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WindsConfig::default();
        assert_eq!(config.station, "EGLL");
        assert!(config.max_concurrent_files >= 1);
        assert!(!config.recursive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_station() {
        let config = WindsConfig::default().with_station("");
        assert!(matches!(
            config.validate(),
            Err(WindsError::Configuration { .. })
        ));
    }

    #[test]
    fn test_rejects_lowercase_station() {
        let config = WindsConfig::default().with_station("egll");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let config = WindsConfig::default().with_max_concurrent_files(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_alphanumeric_station() {
        let config = WindsConfig::default().with_station("K1G4");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = WindsConfig::default().with_station("LFPG");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WindsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.station, "LFPG");
        assert_eq!(parsed.max_concurrent_files, config.max_concurrent_files);
    }
}
