//! The character record evolved by progression, combat, and quest operations.

use std::collections::BTreeSet;

use super::{CharacterError, Equipment, Inventory, ItemId, QuestId};
use crate::config::GameConfig;

/// Playable class. Decides base stats and the special ability used in combat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl CharacterClass {
    /// Parses a class name, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, CharacterError> {
        raw.trim()
            .parse()
            .map_err(|_| CharacterError::InvalidCharacterClass(raw.trim().to_owned()))
    }

    /// Starting health, strength and magic for a level 1 character.
    pub const fn base_stats(self) -> BaseStats {
        match self {
            Self::Warrior => BaseStats::new(120, 15, 5),
            Self::Mage => BaseStats::new(80, 8, 20),
            Self::Rogue => BaseStats::new(90, 12, 10),
            Self::Cleric => BaseStats::new(100, 10, 15),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseStats {
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
}

impl BaseStats {
    pub const fn new(health: u32, strength: u32, magic: u32) -> Self {
        Self {
            health,
            strength,
            magic,
        }
    }
}

/// Complete player state.
///
/// # Invariants
///
/// - `1 <= level`
/// - `health <= max_health` and `max_health > 0`
/// - `active_quests` and `completed_quests` are disjoint
///
/// Operations in this crate uphold these; records built field by field (loaders,
/// tests) should go through [`Character::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub experience: u32,
    pub gold: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub active_quests: BTreeSet<QuestId>,
    pub completed_quests: BTreeSet<QuestId>,
}

impl Character {
    /// Creates a level 1 character with the class base stats.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let base = class.base_stats();
        Self {
            name: name.into(),
            class,
            level: 1,
            health: base.health,
            max_health: base.health,
            strength: base.strength,
            magic: base.magic,
            experience: 0,
            gold: GameConfig::STARTING_GOLD,
            inventory: Inventory::empty(),
            equipment: Equipment::default(),
            active_quests: BTreeSet::new(),
            completed_quests: BTreeSet::new(),
        }
    }

    /// Creates a character from a class name as typed by a player.
    ///
    /// # Errors
    ///
    /// Returns `CharacterError::InvalidCharacterClass` for an unknown class.
    pub fn create(name: impl Into<String>, class: &str) -> Result<Self, CharacterError> {
        Ok(Self::new(name, CharacterClass::parse(class)?))
    }

    /// Checks every record invariant.
    ///
    /// # Errors
    ///
    /// Returns `CharacterError::InvalidCharacterData` naming the first violated rule.
    pub fn validate(&self) -> Result<(), CharacterError> {
        let invalid = |rule| Err(CharacterError::InvalidCharacterData(rule));

        if self.name.trim().is_empty() {
            return invalid("name must not be empty");
        }
        if self.name.trim() != self.name || self.name.chars().any(char::is_control) {
            return invalid("name has surrounding whitespace or control characters");
        }
        if self.level == 0 {
            return invalid("level must be at least 1");
        }
        if self.max_health == 0 {
            return invalid("max_health must be positive");
        }
        if self.health > self.max_health {
            return invalid("health exceeds max_health");
        }
        if !self.active_quests.is_disjoint(&self.completed_quests) {
            return invalid("quest is both active and completed");
        }
        let quests_ok = self
            .active_quests
            .iter()
            .chain(&self.completed_quests)
            .all(QuestId::is_well_formed);
        if !quests_ok {
            return invalid("malformed quest id");
        }
        let items_ok = self
            .inventory
            .iter()
            .chain(self.equipment.weapon.iter().map(|e| &e.item_id))
            .chain(self.equipment.armor.iter().map(|e| &e.item_id))
            .all(ItemId::is_well_formed);
        if !items_ok {
            return invalid("malformed item id");
        }
        Ok(())
    }

    /// Quick check if the character is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_quest_active(&self, quest_id: &QuestId) -> bool {
        self.active_quests.contains(quest_id)
    }

    pub fn is_quest_completed(&self, quest_id: &QuestId) -> bool {
        self.completed_quests.contains(quest_id)
    }
}
