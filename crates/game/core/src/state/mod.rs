//! Mutable player state.
//!
//! The character record is the only state the rules mutate. It is exclusively
//! borrowed by whichever operation runs, so nothing here needs locking.

mod character;
mod common;
mod equipment;
mod error;
mod inventory;

pub use character::{BaseStats, Character, CharacterClass};
pub use common::{ItemId, QuestId, is_well_formed_id};
pub use equipment::{EquipSlot, Equipment, EquippedItem};
pub use error::CharacterError;
pub use inventory::Inventory;
