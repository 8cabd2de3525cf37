use std::collections::BTreeMap;

use crate::state::QuestId;

/// Read access to quest definitions.
///
/// The registry is immutable for its lifetime; the quest graph operations only
/// ever look definitions up.
pub trait QuestOracle: Send + Sync {
    fn quest(&self, id: &QuestId) -> Option<&QuestDefinition>;

    /// Every quest in the registry keyed by identifier.
    fn all_quests(&self) -> &BTreeMap<QuestId, QuestDefinition>;

    fn quest_count(&self) -> usize {
        self.all_quests().len()
    }
}

/// Quest definition as supplied by the content registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestDefinition {
    pub quest_id: QuestId,
    pub title: String,
    pub description: String,
    pub reward_xp: u32,
    pub reward_gold: u32,
    /// Minimum character level, always at least 1.
    pub required_level: u32,
    pub prerequisite: Prerequisite,
}

impl QuestDefinition {
    pub fn new(quest_id: impl Into<QuestId>, title: impl Into<String>) -> Self {
        Self {
            quest_id: quest_id.into(),
            title: title.into(),
            description: String::new(),
            reward_xp: 0,
            reward_gold: 0,
            required_level: 1,
            prerequisite: Prerequisite::None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rewards(mut self, reward_xp: u32, reward_gold: u32) -> Self {
        self.reward_xp = reward_xp;
        self.reward_gold = reward_gold;
        self
    }

    pub fn with_required_level(mut self, required_level: u32) -> Self {
        self.required_level = required_level.max(1);
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: impl Into<QuestId>) -> Self {
        self.prerequisite = Prerequisite::Quest(prerequisite.into());
        self
    }
}

/// The single quest that must be completed before another can be accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prerequisite {
    /// No prerequisite. Written as the sentinel `NONE` in content files.
    #[default]
    None,
    Quest(QuestId),
}

impl Prerequisite {
    /// Sentinel used by content files for "no prerequisite".
    pub const SENTINEL: &'static str = "NONE";

    /// Parses a raw content field; the sentinel matches case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(Self::SENTINEL) {
            Self::None
        } else {
            Self::Quest(QuestId::new(raw))
        }
    }

    pub fn quest_id(&self) -> Option<&QuestId> {
        match self {
            Self::None => None,
            Self::Quest(id) => Some(id),
        }
    }

    /// Content-file representation: the quest id or the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => Self::SENTINEL,
            Self::Quest(id) => id.as_str(),
        }
    }
}
