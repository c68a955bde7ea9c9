// config.rs - Configuration for a hexlife run
// Loaded from YAML; every section falls back to defaults when missing.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Grid shape and initial population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Probability that a cell starts alive (0.0 - 1.0)
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Generations to simulate
    pub generations: u64,
    /// Random seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Generations between population summaries
    pub stats_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 10,
            density: 0.3,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval: 10,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.world.size;
        if size == 0 {
            return Err(ConfigError::InvalidSize { rows: size, cols: size });
        }
        if !(0.0..=1.0).contains(&self.world.density) {
            return Err(ConfigError::InvalidDensity(self.world.density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.size, 10);
        assert_eq!(config.run.generations, 100);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.world.size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize { .. })));

        let mut config = Config::default();
        config.world.density = 1.01;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDensity(_))));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.run.seed = Some(99);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loaded: Config = serde_yaml::from_str("world:\n  size: 24\n").unwrap();
        assert_eq!(loaded.world.size, 24);
        assert_eq!(loaded.world.density, 0.3);
        assert_eq!(loaded.run, RunConfig::default());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join("hexlife_config_roundtrip.yaml");
        let mut config = Config::default();
        config.world.size = 16;
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.world.size, 16);

        std::fs::remove_file(&path).ok();
    }
}
