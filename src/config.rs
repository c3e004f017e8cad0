//! Bot configuration.
//!
//! Read from a YAML file. Unknown sections are ignored so the same file can
//! carry settings for the surrounding harness.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub strategy: StrategyConfig,
}

/// Knobs for the two-player wall heuristic.
#[derive(Clone, Debug, Deserialize)]
pub struct StrategyConfig {
    /// When false, two-player games are played with moves only.
    #[serde(default = "default_place_walls")]
    pub place_walls: bool,
    /// Walls are only placed while more than this many remain.
    #[serde(default)]
    pub min_walls_in_reserve: i32,
}

fn default_place_walls() -> bool {
    true
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            place_walls: default_place_walls(),
            min_walls_in_reserve: 0,
        }
    }
}

/// Load a `BotConfig` from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BotConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: BotConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    Ok(config)
}
