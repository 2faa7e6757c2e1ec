//! Configuration loading functionality.
//!
//! This module provides YAML file loading for [`EngineConfig`].

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or out-of-range values
    ///   (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/engine.yaml")?;
    /// assert_eq!(config.scheduling.minimum_rest_hours, 12);
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path_str,
                message,
            })?;

        Ok(config)
    }
}
