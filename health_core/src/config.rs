//! Configuration file support for the health tracker.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/health_tracker/config.toml`.
//! Every section is optional.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the metrics table inside the data directory
pub const DATA_FILE_NAME: &str = "health_data.csv";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub hydration: HydrationConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Hydration reminder configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HydrationConfig {
    #[serde(default = "default_min_liters")]
    pub min_liters: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            min_liters: default_min_liters(),
        }
    }
}

/// Weekly report configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_min_liters() -> f64 {
    crate::hydration::DEFAULT_MIN_WATER_LITERS
}

fn default_window_days() -> u32 {
    crate::report::DEFAULT_WINDOW_DAYS
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("health_tracker").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the report and hydration check cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.report.window_days == 0 {
            return Err(Error::Config("report.window_days must be at least 1".into()));
        }
        if !self.hydration.min_liters.is_finite() || self.hydration.min_liters < 0.0 {
            return Err(Error::Config(format!(
                "hydration.min_liters must be a non-negative number, got {}",
                self.hydration.min_liters
            )));
        }
        Ok(())
    }

    /// Path of the metrics table
    pub fn data_file(&self) -> PathBuf {
        self.data.data_dir.join(DATA_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.data_dir, PathBuf::from("data"));
        assert_eq!(config.hydration.min_liters, 2.0);
        assert_eq!(config.report.window_days, 7);
        assert_eq!(config.data_file(), PathBuf::from("data").join("health_data.csv"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.report.window_days = 14;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.report.window_days, 14);
        assert_eq!(parsed.hydration.min_liters, config.hydration.min_liters);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[hydration]
min_liters = 2.5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.hydration.min_liters, 2.5);
        assert_eq!(config.report.window_days, 7); // default
        assert_eq!(config.data.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[report]\nwindow_days = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[report\nwindow_days = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
