//! Maze configuration
//!
//! Generation settings that can be saved to and loaded from RON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CUBE_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEGMENTS};
use crate::labyrinth::check_segments;

/// Settings for one maze cube
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MazeConfig {
    /// Subdivisions along each cube edge (odd, greater than 5)
    pub segments: u32,
    /// Edge length of the cube
    pub cube_size: f32,
    /// RNG seed, drawn from entropy when absent
    pub seed: Option<u64>,
    /// Whole-grid attempts per face before giving up
    pub max_attempts: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            cube_size: DEFAULT_CUBE_SIZE,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl MazeConfig {
    pub fn new(segments: u32, cube_size: f32) -> Self {
        Self {
            segments,
            cube_size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings before any generation work starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_segments(self.segments).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if !(self.cube_size > 0.0) || !self.cube_size.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "cube size must be a positive number, got {}",
                self.cube_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save config to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load config from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: MazeConfig =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(config)
    }

    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: MazeConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(config)
    }
}

/// Config-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
