//! Weapon and armor slots.
//!
//! Equipping records the effect that was actually applied next to the item,
//! and unequipping reverts that record. Stats therefore return to their
//! previous values even when clamping shrank the original effect.

use super::inventory::{ensure_kind, inventory_full};
use super::{InventoryError, apply_stat_effect, has_item};
use crate::env::{ItemDefinition, ItemKind};
use crate::state::{Character, EquipSlot, EquippedItem, ItemId};

/// Result of a successful equip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipChange {
    pub equipped: ItemId,
    /// The item that was in the slot before, now back in the inventory.
    pub replaced: Option<ItemId>,
}

fn slot_kind(slot: EquipSlot) -> ItemKind {
    match slot {
        EquipSlot::Weapon => ItemKind::Weapon,
        EquipSlot::Armor => ItemKind::Armor,
    }
}

/// Moves an item from the inventory into `slot`.
///
/// The new item leaves the inventory before the old one returns, so a swap
/// works even with a full inventory.
///
/// # Errors
///
/// `ItemNotFound` if not held, then `InvalidItemType` unless the item kind
/// matches the slot.
pub fn equip(
    character: &mut Character,
    item: &ItemDefinition,
    slot: EquipSlot,
) -> Result<EquipChange, InventoryError> {
    if !has_item(character, &item.item_id) {
        return Err(InventoryError::ItemNotFound(item.item_id.clone()));
    }
    ensure_kind(item, slot_kind(slot))?;

    character.inventory.remove_one(&item.item_id);

    let replaced = match character.equipment.slot_mut(slot).take() {
        Some(previous) => {
            apply_stat_effect(character, previous.effect.inverse());
            character
                .inventory
                .push(previous.item_id.clone())
                .map_err(|_| inventory_full())?;
            Some(previous.item_id)
        }
        None => None,
    };

    let applied = apply_stat_effect(character, item.effect);
    *character.equipment.slot_mut(slot) = Some(EquippedItem::new(item.item_id.clone(), applied));

    Ok(EquipChange {
        equipped: item.item_id.clone(),
        replaced,
    })
}

/// Returns the item in `slot` to the inventory and reverts its effect.
///
/// Returns `None` when the slot is empty.
///
/// # Errors
///
/// `InventoryFull` if there is no room for the item; nothing changes.
pub fn unequip(character: &mut Character, slot: EquipSlot) -> Result<Option<ItemId>, InventoryError> {
    if character.equipment.slot(slot).is_none() {
        return Ok(None);
    }
    if character.inventory.is_full() {
        return Err(inventory_full());
    }

    let Some(previous) = character.equipment.slot_mut(slot).take() else {
        return Ok(None);
    };
    apply_stat_effect(character, previous.effect.inverse());
    character
        .inventory
        .push(previous.item_id.clone())
        .map_err(|_| inventory_full())?;
    Ok(Some(previous.item_id))
}

pub fn equip_weapon(
    character: &mut Character,
    item: &ItemDefinition,
) -> Result<EquipChange, InventoryError> {
    equip(character, item, EquipSlot::Weapon)
}

pub fn equip_armor(
    character: &mut Character,
    item: &ItemDefinition,
) -> Result<EquipChange, InventoryError> {
    equip(character, item, EquipSlot::Armor)
}

pub fn unequip_weapon(character: &mut Character) -> Result<Option<ItemId>, InventoryError> {
    unequip(character, EquipSlot::Weapon)
}

pub fn unequip_armor(character: &mut Character) -> Result<Option<ItemId>, InventoryError> {
    unequip(character, EquipSlot::Armor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{StatEffect, StatKind};
    use crate::items::add_item;
    use crate::state::CharacterClass;

    fn weapon(id: &str, strength: i32) -> ItemDefinition {
        ItemDefinition::new(
            id,
            id,
            ItemKind::Weapon,
            StatEffect::new(StatKind::Strength, strength),
            50,
        )
    }

    fn armor(id: &str, max_health: i32) -> ItemDefinition {
        ItemDefinition::new(
            id,
            id,
            ItemKind::Armor,
            StatEffect::new(StatKind::MaxHealth, max_health),
            60,
        )
    }

    fn warrior_with(items: &[&str]) -> Character {
        let mut hero = Character::new("Conan", CharacterClass::Warrior);
        for item in items {
            add_item(&mut hero, ItemId::new(*item)).unwrap();
        }
        hero
    }

    #[test]
    fn equip_applies_effect_and_empties_slot_in_inventory() {
        let mut hero = warrior_with(&["iron_sword"]);
        let change = equip_weapon(&mut hero, &weapon("iron_sword", 5)).unwrap();

        assert_eq!(change.replaced, None);
        assert_eq!(hero.strength, 20);
        assert!(hero.inventory.is_empty());
        assert_eq!(
            hero.equipment.weapon.as_ref().map(|e| e.item_id.as_str()),
            Some("iron_sword")
        );
    }

    #[test]
    fn swapping_weapons_reverts_the_old_bonus() {
        let mut hero = warrior_with(&["iron_sword", "steel_sword"]);
        equip_weapon(&mut hero, &weapon("iron_sword", 5)).unwrap();

        let change = equip_weapon(&mut hero, &weapon("steel_sword", 8)).unwrap();
        assert_eq!(change.replaced, Some(ItemId::new("iron_sword")));
        assert_eq!(hero.strength, 23);
        assert_eq!(
            hero.inventory.iter().collect::<Vec<_>>(),
            vec![&ItemId::new("iron_sword")]
        );
    }

    #[test]
    fn swap_succeeds_with_full_inventory() {
        let mut hero = warrior_with(&["iron_sword"]);
        equip_weapon(&mut hero, &weapon("iron_sword", 5)).unwrap();
        add_item(&mut hero, ItemId::new("steel_sword")).unwrap();
        while !hero.inventory.is_full() {
            add_item(&mut hero, ItemId::new("rock")).unwrap();
        }

        equip_weapon(&mut hero, &weapon("steel_sword", 8)).unwrap();
        assert!(hero.inventory.is_full());
        assert!(hero.inventory.contains(&ItemId::new("iron_sword")));
    }

    #[test]
    fn equip_checks_possession_then_type() {
        let mut hero = warrior_with(&["leather_armor"]);
        assert_eq!(
            equip_weapon(&mut hero, &weapon("iron_sword", 5)),
            Err(InventoryError::ItemNotFound(ItemId::new("iron_sword")))
        );
        assert_eq!(
            equip_weapon(&mut hero, &armor("leather_armor", 10)),
            Err(InventoryError::InvalidItemType {
                item_id: ItemId::new("leather_armor"),
                expected: ItemKind::Weapon,
                actual: ItemKind::Armor,
            })
        );
        assert_eq!(hero.inventory.len(), 1);
    }

    #[test]
    fn equip_then_unequip_restores_stats_exactly() {
        let mut hero = warrior_with(&["leather_armor"]);
        let before = hero.clone();

        equip_armor(&mut hero, &armor("leather_armor", 10)).unwrap();
        assert_eq!(hero.max_health, 130);
        assert_eq!(hero.health, 120);

        assert_eq!(unequip_armor(&mut hero), Ok(Some(ItemId::new("leather_armor"))));
        assert_eq!(hero, before);
    }

    #[test]
    fn unequip_restores_clamped_effects() {
        let mut hero = warrior_with(&["cursed_blade"]);
        equip_weapon(&mut hero, &weapon("cursed_blade", -40)).unwrap();
        assert_eq!(hero.strength, 0);

        unequip_weapon(&mut hero).unwrap();
        assert_eq!(hero.strength, 15);
    }

    #[test]
    fn unequip_empty_slot_is_none() {
        let mut hero = warrior_with(&[]);
        assert_eq!(unequip_weapon(&mut hero), Ok(None));
        assert_eq!(unequip_armor(&mut hero), Ok(None));
    }

    #[test]
    fn unequip_needs_room() {
        let mut hero = warrior_with(&["iron_sword"]);
        equip_weapon(&mut hero, &weapon("iron_sword", 5)).unwrap();
        while !hero.inventory.is_full() {
            add_item(&mut hero, ItemId::new("rock")).unwrap();
        }

        assert_eq!(
            unequip_weapon(&mut hero),
            Err(InventoryError::InventoryFull { capacity: 20 })
        );
        assert_eq!(hero.strength, 20);
        assert!(hero.equipment.weapon.is_some());
    }
}
