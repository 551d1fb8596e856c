//! Configuration system
//!
//! Movement resolution has a handful of tunables (skin width, depenetration
//! cap, ground probe distance) that games usually want to expose in a data
//! file rather than recompile. [`KinematicsConfig`] groups them, and the
//! [`Config`] trait handles loading and saving from TOML or RON.

use serde::{Deserialize, Serialize};

use crate::collision::sweep::SKIN_WIDTH;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Format is chosen by extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tunables for character movement resolution
///
/// Defaults mirror the documented constants in [`crate::collision::sweep`];
/// a game can override them per level or per character archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicsConfig {
    /// Contact back-off applied when advancing to a sweep hit
    pub skin_width: f32,

    /// Maximum correction applied by one depenetration pass
    pub max_depenetration: f32,

    /// Downward probe length for ground checks
    pub ground_check_distance: f32,

    /// Coefficient of restitution used when a step resolves with a bounce
    pub bounciness: f32,

    /// Downward acceleration applied by the character step, in units/s^2
    pub gravity: f32,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            skin_width: SKIN_WIDTH,
            max_depenetration: 0.5,
            ground_check_distance: 0.1,
            bounciness: 0.0,
            gravity: 9.81,
        }
    }
}

impl Config for KinematicsConfig {}
