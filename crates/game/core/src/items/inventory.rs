//! Inventory bookkeeping and consumable use.

use super::{InventoryError, apply_stat_effect};
use crate::config::GameConfig;
use crate::env::{ItemDefinition, ItemKind, StatEffect};
use crate::state::{Character, ItemId};

pub(crate) fn inventory_full() -> InventoryError {
    InventoryError::InventoryFull {
        capacity: GameConfig::MAX_INVENTORY_SIZE,
    }
}

/// Appends an item to the inventory.
///
/// # Errors
///
/// `InventoryFull` when every slot is taken.
pub fn add_item(character: &mut Character, item_id: ItemId) -> Result<(), InventoryError> {
    character
        .inventory
        .push(item_id)
        .map_err(|_| inventory_full())
}

/// Removes one copy of an item.
///
/// # Errors
///
/// `ItemNotFound` if the character holds no copy.
pub fn remove_item(character: &mut Character, item_id: &ItemId) -> Result<(), InventoryError> {
    if character.inventory.remove_one(item_id) {
        Ok(())
    } else {
        Err(InventoryError::ItemNotFound(item_id.clone()))
    }
}

pub fn has_item(character: &Character, item_id: &ItemId) -> bool {
    character.inventory.contains(item_id)
}

pub fn count_item(character: &Character, item_id: &ItemId) -> usize {
    character.inventory.count(item_id)
}

pub fn space_remaining(character: &Character) -> usize {
    character.inventory.space_remaining()
}

/// Empties the inventory and returns what was removed, in order.
pub fn clear_inventory(character: &mut Character) -> Vec<ItemId> {
    character.inventory.clear()
}

pub(crate) fn ensure_kind(item: &ItemDefinition, expected: ItemKind) -> Result<(), InventoryError> {
    if item.kind == expected {
        Ok(())
    } else {
        Err(InventoryError::InvalidItemType {
            item_id: item.item_id.clone(),
            expected,
            actual: item.kind,
        })
    }
}

/// Consumes one copy of a consumable and applies its effect.
///
/// Returns the change actually applied.
///
/// # Errors
///
/// `ItemNotFound` if not held, then `InvalidItemType` unless the item is a
/// consumable.
pub fn use_item(character: &mut Character, item: &ItemDefinition) -> Result<StatEffect, InventoryError> {
    if !has_item(character, &item.item_id) {
        return Err(InventoryError::ItemNotFound(item.item_id.clone()));
    }
    ensure_kind(item, ItemKind::Consumable)?;

    let applied = apply_stat_effect(character, item.effect);
    remove_item(character, &item.item_id)?;
    Ok(applied)
}
