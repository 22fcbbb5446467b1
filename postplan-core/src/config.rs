//! Global postplan configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{PlanError, PlanResult};
use crate::post::{Platform, Tone};

/// Global configuration at ~/.config/postplan/config.toml
///
/// Every key is optional; a missing file means all defaults. Platform and
/// tone values are kept as strings here and resolved against the known sets
/// at the CLI boundary.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    #[serde(default = "default_tone")]
    pub tone: String,

    #[serde(default = "default_posts_per_week")]
    pub posts_per_week: u8,
}

fn default_platforms() -> Vec<String> {
    Platform::ALL.iter().map(|p| p.as_str().to_string()).collect()
}

fn default_tone() -> String {
    Tone::Expert.as_str().to_string()
}

fn default_posts_per_week() -> u8 {
    3
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            platforms: default_platforms(),
            tone: default_tone(),
            posts_per_week: default_posts_per_week(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> PlanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanError::Config("Could not determine config directory".into()))?
            .join("postplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> PlanResult<GlobalConfig> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|e| PlanError::Config(format!("Could not parse {}: {}", path.display(), e)))
    }
}
