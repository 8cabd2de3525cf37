//! Deterministic rules for the Quest Chronicles adventure.
//!
//! `chronicles-core` defines the canonical rules (progression, combat, quests,
//! items) and exposes pure APIs that the content loaders and the runtime build
//! on. Operations take the character record by `&mut` and read static content
//! through the oracle traits in [`env`]; nothing here performs I/O.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod items;
pub mod progression;
pub mod quest;
pub mod state;

pub use combat::{
    Battle, BattleEnv, BattleOutcome, BattleState, CombatError, Enemy, EnemyKind, PlayerAction,
    SpecialAbility, calculate_damage, can_fight,
};
pub use config::GameConfig;
pub use env::{
    ContentError, ContentSnapshot, ItemDefinition, ItemKind, ItemOracle, PcgRng, Prerequisite,
    QuestDefinition, QuestOracle, RngOracle, StatEffect, StatKind,
};
pub use error::{ErrorSeverity, GameError};
pub use items::InventoryError;
pub use progression::{ProgressionError, Rewards};
pub use quest::{AcceptOutcome, QuestCompletion, QuestError};
pub use state::{
    Character, CharacterClass, CharacterError, EquipSlot, Equipment, EquippedItem, Inventory,
    ItemId, QuestId, is_well_formed_id,
};
