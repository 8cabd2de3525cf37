//! Game configuration loader.

use std::path::Path;

use chronicles_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// ```toml
/// escape_chance = 50
/// critical_chance = 50
/// ```
///
/// Missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(
            "Loaded config from {}: escape {}%, critical {}%",
            path.display(),
            config.escape_chance,
            config.critical_chance
        );
        Ok(config)
    }

    /// Parse a TOML document. Chances above 100 are capped at 100.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(GameConfig::new()
            .with_escape_chance(config.escape_chance)
            .with_critical_chance(config.critical_chance))
    }

    /// Render a config as TOML.
    pub fn to_toml(config: &GameConfig) -> LoadResult<String> {
        toml::to_string(config).map_err(|e| anyhow::anyhow!("Failed to render config TOML: {}", e))
    }
}
