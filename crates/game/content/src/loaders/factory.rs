//! Content factory for building the registry from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chronicles_core::quest::validate_prerequisites;
use chronicles_core::{ContentSnapshot, GameConfig, ItemDefinition, QuestDefinition};

use crate::loaders::{
    ConfigLoader, DataError, ItemLoader, LoadResult, QuestLoader, default_items, default_quests,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── quests.txt   (or quests.ron)
/// └── items.txt    (or items.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const QUESTS_FILE: &'static str = "quests.txt";
    pub const QUESTS_CATALOG: &'static str = "quests.ron";
    pub const ITEMS_FILE: &'static str = "items.txt";
    pub const ITEMS_CATALOG: &'static str = "items.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load quest definitions from `quests.txt`, or `quests.ron` when only the
    /// catalog exists.
    pub fn load_quests(&self) -> LoadResult<Vec<QuestDefinition>> {
        let text = self.data_dir.join(Self::QUESTS_FILE);
        let catalog = self.data_dir.join(Self::QUESTS_CATALOG);
        if !text.exists() && catalog.exists() {
            return QuestLoader::load_ron(&catalog);
        }
        QuestLoader::load(&text)
    }

    /// Load item definitions from `items.txt`, or `items.ron` when only the
    /// catalog exists.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let text = self.data_dir.join(Self::ITEMS_FILE);
        let catalog = self.data_dir.join(Self::ITEMS_CATALOG);
        if !text.exists() && catalog.exists() {
            return ItemLoader::load_ron(&catalog);
        }
        ItemLoader::load(&text)
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields [`GameConfig::default`]; a malformed one is an error.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        match ConfigLoader::load(&path) {
            Err(err)
                if matches!(
                    err.downcast_ref::<DataError>(),
                    Some(DataError::MissingDataFile(_))
                ) =>
            {
                tracing::warn!("{} not found, using default config", path.display());
                Ok(GameConfig::default())
            }
            other => other,
        }
    }

    /// Load quests and items into a registry, rejecting dangling or cyclic
    /// prerequisite chains.
    pub fn load_snapshot(&self) -> LoadResult<ContentSnapshot> {
        let quests = self.load_quests()?;
        let items = self.load_items()?;
        let snapshot = ContentSnapshot::new(quests, items);

        validate_prerequisites(&snapshot).with_context(|| {
            format!("Invalid quest prerequisites in {}", self.data_dir.display())
        })?;

        tracing::debug!(
            "Built content snapshot from {}: {} items",
            self.data_dir.display(),
            snapshot.item_count()
        );
        Ok(snapshot)
    }

    /// Create the data directory and write default content files that do not
    /// exist yet. Existing files are left untouched.
    ///
    /// Returns the paths that were written.
    pub fn write_defaults(&self) -> LoadResult<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;

        let files = [
            (Self::QUESTS_FILE, QuestLoader::to_text(&default_quests())),
            (Self::ITEMS_FILE, ItemLoader::to_text(&default_items())),
            (Self::CONFIG_FILE, ConfigLoader::to_toml(&GameConfig::default())?),
        ];

        let mut written = Vec::new();
        for (name, content) in files {
            let path = self.data_dir.join(name);
            if path.exists() {
                continue;
            }
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("Wrote default {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicles_core::{ItemId, ItemOracle, QuestId, QuestOracle};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn write_defaults_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path().join("data"));

        let written = factory.write_defaults().unwrap();
        assert_eq!(written.len(), 3);

        let snapshot = factory.load_snapshot().unwrap();
        assert_eq!(snapshot.quest_count(), default_quests().len());
        assert!(snapshot.quest(&QuestId::new("first_steps")).is_some());
        assert!(snapshot.item(&ItemId::new("health_potion")).is_some());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn write_defaults_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        let quests = dir.path().join(ContentFactory::QUESTS_FILE);
        std::fs::write(&quests, "QUEST_ID: solo\nTITLE: Solo\nDESCRIPTION: d\nREWARD_XP: 1\nREWARD_GOLD: 1\nREQUIRED_LEVEL: 1\nPREREQUISITE: NONE\n").unwrap();

        let written = factory.write_defaults().unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(factory.load_quests().unwrap().len(), 1);
    }

    #[test]
    fn missing_quest_file_is_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_quests().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MissingDataFile(_))
        ));
    }

    #[test]
    fn malformed_quest_file_is_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ContentFactory::QUESTS_FILE), "QUEST_ID first\n").unwrap();
        let err = ContentFactory::new(dir.path()).load_quests().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidDataFormat { line: 1, .. })
        ));
    }

    #[test]
    fn falls_back_to_ron_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ContentFactory::ITEMS_CATALOG),
            r#"(items: [(
                item_id: "rope",
                name: "Rope",
                kind: consumable,
                effect: (stat: health, value: 1),
                cost: 2,
                description: "",
            )])"#,
        )
        .unwrap();

        let items = ContentFactory::new(dir.path()).load_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_id, ItemId::new("rope"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn dangling_prerequisite_fails_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        factory.write_defaults().unwrap();
        std::fs::write(
            dir.path().join(ContentFactory::QUESTS_FILE),
            "QUEST_ID: a\nTITLE: A\nDESCRIPTION: d\nREWARD_XP: 1\nREWARD_GOLD: 1\nREQUIRED_LEVEL: 1\nPREREQUISITE: ghost\n",
        )
        .unwrap();
        assert!(factory.load_snapshot().is_err());
    }
}
