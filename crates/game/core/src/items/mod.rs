//! Inventory, equipment, and shop rules.
//!
//! Characters hold items by [`ItemId`](crate::state::ItemId); operations that
//! need to know what an item does take its [`ItemDefinition`](crate::env::ItemDefinition)
//! from the content registry.

mod effects;
mod equip;
mod error;
mod inventory;
mod shop;

pub use effects::{apply_stat_effect, parse_item_effect};
pub use equip::{
    EquipChange, equip, equip_armor, equip_weapon, unequip, unequip_armor, unequip_weapon,
};
pub use error::InventoryError;
pub use inventory::{
    add_item, clear_inventory, count_item, has_item, remove_item, space_remaining, use_item,
};
pub use shop::{purchase_item, sell_item};
