//! Buying and selling.

use super::inventory::inventory_full;
use super::{InventoryError, remove_item};
use crate::env::ItemDefinition;
use crate::state::Character;

/// Pays the item's cost and adds it to the inventory.
///
/// # Errors
///
/// `InsufficientGold` if gold is below the cost, then `InventoryFull`.
/// Nothing changes on failure.
pub fn purchase_item(character: &mut Character, item: &ItemDefinition) -> Result<(), InventoryError> {
    if character.gold < item.cost {
        return Err(InventoryError::InsufficientGold {
            available: character.gold,
            required: item.cost,
        });
    }
    if character.inventory.is_full() {
        return Err(inventory_full());
    }

    character
        .inventory
        .push(item.item_id.clone())
        .map_err(|_| inventory_full())?;
    character.gold -= item.cost;
    Ok(())
}

/// Removes one copy and pays half the cost, rounded down.
///
/// Returns the gold received.
///
/// # Errors
///
/// `ItemNotFound` if the character holds no copy.
pub fn sell_item(character: &mut Character, item: &ItemDefinition) -> Result<u32, InventoryError> {
    remove_item(character, &item.item_id)?;
    let price = item.sell_price();
    character.gold = character.gold.saturating_add(price);
    Ok(price)
}
