//! Simulation configuration loader.

use std::path::Path;

use duel_core::{Arena, SimConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a `SimConfig` from a TOML file.
    ///
    /// Missing keys keep their defaults. The arena the config describes is
    /// built once here so bad dimensions fail at load time.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SimConfig> {
        let config: SimConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Arena::from_config(&config)
            .map_err(|e| anyhow::anyhow!("Invalid arena in config: {}", e))?;
        anyhow::ensure!(config.tick_ms > 0, "tick_ms must be positive");
        anyhow::ensure!(config.frame_ms > 0, "frame_ms must be positive");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("seed = 7\nframe_ms = 40\n").expect("parse");
        assert_eq!(config.seed, 7);
        assert_eq!(config.frame_ms, 40);
        assert_eq!(config.tick_ms, SimConfig::DEFAULT_TICK_MS);
        assert_eq!(config.arena_width, SimConfig::DEFAULT_ARENA_WIDTH);
    }

    #[test]
    fn rejects_degenerate_arena() {
        let err = ConfigLoader::parse("arena_width = 0\n").unwrap_err();
        assert!(err.to_string().contains("Invalid arena"));
    }

    #[test]
    fn rejects_zero_frame_duration() {
        assert!(ConfigLoader::parse("frame_ms = 0\n").is_err());
    }
}
