//! Configuration system for LNSForge.
//!
//! Load neighborhood configuration from TOML or YAML files to tune the
//! fixing proportion, relaxation period and seed without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use lnsforge_config::{LnsConfig, NeighborConfig};
//!
//! let config = LnsConfig::from_toml_str(r#"
//!     random_seed = 42
//!
//!     [neighbor]
//!     type = "random_grouped_by_value"
//!     prop_fix_values = 0.3
//!     level = 5
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! let NeighborConfig::RandomGroupedByValue(grouped) = &config.neighbor;
//! assert_eq!(grouped.level, 5);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use lnsforge_config::LnsConfig;
//!
//! let config = LnsConfig::load("lns.toml").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main LNS configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LnsConfig {
    /// Random seed for reproducible fragments. `None` draws a fresh seed.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Neighborhood configuration.
    #[serde(default)]
    pub neighbor: NeighborConfig,
}

impl LnsConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replaces the neighborhood configuration.
    pub fn with_neighbor(mut self, neighbor: NeighborConfig) -> Self {
        self.neighbor = neighbor;
        self
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.neighbor.validate()
    }
}

/// Neighborhood configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NeighborConfig {
    /// Freeze every variable sharing one of a random subset of values.
    RandomGroupedByValue(RandomGroupedByValueConfig),
}

impl Default for NeighborConfig {
    fn default() -> Self {
        NeighborConfig::RandomGroupedByValue(RandomGroupedByValueConfig::default())
    }
}

impl NeighborConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            NeighborConfig::RandomGroupedByValue(c) => c.validate(),
        }
    }
}

/// Random grouped-by-value neighborhood configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RandomGroupedByValueConfig {
    /// Proportion of used values whose variables get fixed, in (0, 1].
    #[serde(default = "default_prop_fix_values")]
    pub prop_fix_values: f64,

    /// Number of fixing cycles between two resamples of the fragment size.
    #[serde(default = "default_level")]
    pub level: u32,
}

fn default_prop_fix_values() -> f64 {
    0.5
}

fn default_level() -> u32 {
    10
}

impl Default for RandomGroupedByValueConfig {
    fn default() -> Self {
        Self {
            prop_fix_values: default_prop_fix_values(),
            level: default_level(),
        }
    }
}

impl RandomGroupedByValueConfig {
    pub fn new(prop_fix_values: f64, level: u32) -> Self {
        Self {
            prop_fix_values,
            level,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.prop_fix_values > 0.0 && self.prop_fix_values <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "prop_fix_values must be in (0, 1], got {}",
                self.prop_fix_values
            )));
        }
        if self.level == 0 {
            return Err(ConfigError::Invalid("level must be positive".into()));
        }
        Ok(())
    }
}
