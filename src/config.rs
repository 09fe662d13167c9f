use std::path::Path;

use roadgraph_core::{DfsLimits, GraphBuilderConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Router settings, usually read from a TOML file:
///
/// ```toml
/// [builder]
/// coordinate_precision = 6
/// segment_weight = "uniform"
///
/// [dfs]
/// max_paths = 1
/// max_depth = 20000
/// max_expanded = 1000000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub builder: GraphBuilderConfig,
    /// Limits applied to DFS queries that do not bring their own
    pub dfs: DfsLimits,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            builder: GraphBuilderConfig::default(),
            dfs: DfsLimits::new(1, 20_000, 1_000_000),
        }
    }
}

impl RouterConfig {
    /// Parses a TOML document; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
