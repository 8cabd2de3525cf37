//! Runtime configuration: where content and saves live, and how battles seed.
//!
//! Rules tuning is content, read from the data directory's `config.toml`.

use std::path::PathBuf;

/// Configuration for a [`GameSession`](crate::GameSession).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `quests.txt`, `items.txt` and `config.toml`.
    pub data_dir: PathBuf,
    /// Directory holding `{name}_save.txt` files.
    pub save_dir: PathBuf,
    /// Fixed seed for the first battle. `None` draws a fresh seed per battle.
    pub battle_seed: Option<u64>,
}

impl RuntimeConfig {
    const APP_NAME: &'static str = "quest-chronicles";

    pub fn new(data_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            save_dir: save_dir.into(),
            battle_seed: None,
        }
    }

    pub fn with_battle_seed(mut self, seed: u64) -> Self {
        self.battle_seed = Some(seed);
        self
    }

    /// Platform-specific data directory.
    ///
    /// - Linux: `~/.local/share/quest-chronicles`
    /// - macOS: `~/Library/Application Support/quest-chronicles`
    /// - Windows: `%APPDATA%\quest-chronicles`
    /// - Fallback: `./data`
    pub fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", Self::APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"))
    }

    /// Platform-specific save directory: `save_games` under the data directory.
    pub fn default_save_dir() -> PathBuf {
        Self::default_data_dir().join("save_games")
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir(), Self::default_save_dir())
    }
}
