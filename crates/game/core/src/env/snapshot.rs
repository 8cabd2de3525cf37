//! In-memory content registry.
//!
//! `ContentSnapshot` owns every quest and item definition and implements the
//! read-only oracles. Loaders in `chronicles-content` build one from data
//! files; tests build one directly.

use std::collections::BTreeMap;

use super::{ItemDefinition, ItemOracle, QuestDefinition, QuestOracle};
use crate::state::{ItemId, QuestId};

/// Immutable bundle of quest and item definitions keyed by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentSnapshot {
    quests: BTreeMap<QuestId, QuestDefinition>,
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ContentSnapshot {
    pub fn new(
        quests: impl IntoIterator<Item = QuestDefinition>,
        items: impl IntoIterator<Item = ItemDefinition>,
    ) -> Self {
        Self {
            quests: quests
                .into_iter()
                .map(|quest| (quest.quest_id.clone(), quest))
                .collect(),
            items: items
                .into_iter()
                .map(|item| (item.item_id.clone(), item))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a quest (builder pattern). A definition with the same id is replaced.
    #[must_use]
    pub fn with_quest(mut self, quest: QuestDefinition) -> Self {
        self.quests.insert(quest.quest_id.clone(), quest);
        self
    }

    /// Adds an item (builder pattern). A definition with the same id is replaced.
    #[must_use]
    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.items.insert(item.item_id.clone(), item);
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl QuestOracle for ContentSnapshot {
    fn quest(&self, id: &QuestId) -> Option<&QuestDefinition> {
        self.quests.get(id)
    }

    fn all_quests(&self) -> &BTreeMap<QuestId, QuestDefinition> {
        &self.quests
    }
}

impl ItemOracle for ContentSnapshot {
    fn item(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    fn all_items(&self) -> Vec<&ItemDefinition> {
        self.items.values().collect()
    }
}
