//! Equipment slots for characters.

use super::ItemId;
use crate::env::StatEffect;

/// An item sitting in an equipment slot together with the effect it applied.
///
/// Keeping the applied effect lets unequip revert exactly what equip did,
/// independent of later content changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub item_id: ItemId,
    pub effect: StatEffect,
}

impl EquippedItem {
    pub fn new(item_id: ItemId, effect: StatEffect) -> Self {
        Self { item_id, effect }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// At most one weapon and one armor piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<EquippedItem>,
    pub armor: Option<EquippedItem>,
}

impl Equipment {
    pub fn slot(&self, slot: EquipSlot) -> Option<&EquippedItem> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<EquippedItem> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
        }
    }
}
