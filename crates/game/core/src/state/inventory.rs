//! Bounded inventory storage for characters.
//!
//! The inventory is an ordered list of item identifiers. Duplicates are
//! allowed (three potions are three entries) and the length never exceeds
//! [`GameConfig::MAX_INVENTORY_SIZE`].

use arrayvec::ArrayVec;

use super::ItemId;
use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<ItemId, { GameConfig::MAX_INVENTORY_SIZE }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Builds an inventory from stored identifiers.
    ///
    /// Returns `None` when there are more identifiers than slots.
    pub fn from_items(items: impl IntoIterator<Item = ItemId>) -> Option<Self> {
        let mut inventory = Self::empty();
        for item in items {
            inventory.items.try_push(item).ok()?;
        }
        Some(inventory)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn space_remaining(&self) -> usize {
        self.items.remaining_capacity()
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    pub fn count(&self, item: &ItemId) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Appends an item, handing it back if every slot is taken.
    pub fn push(&mut self, item: ItemId) -> Result<(), ItemId> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    /// Removes the first copy of `item`. Returns false if none is held.
    pub fn remove_one(&mut self, item: &ItemId) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empties the inventory and returns what it held, in order.
    pub fn clear(&mut self) -> Vec<ItemId> {
        self.items.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut inventory = Inventory::empty();
        for _ in 0..GameConfig::MAX_INVENTORY_SIZE {
            inventory.push(ItemId::new("rock")).unwrap();
        }
        assert!(inventory.is_full());
        assert_eq!(inventory.space_remaining(), 0);
        assert_eq!(inventory.push(ItemId::new("gem")), Err(ItemId::new("gem")));
    }

    #[test]
    fn remove_one_takes_first_copy_only() {
        let mut inventory = Inventory::from_items(["potion", "sword", "potion"].map(ItemId::from))
            .unwrap();
        assert!(inventory.remove_one(&ItemId::new("potion")));
        assert_eq!(inventory.count(&ItemId::new("potion")), 1);
        assert_eq!(
            inventory.iter().cloned().collect::<Vec<_>>(),
            vec![ItemId::new("sword"), ItemId::new("potion")]
        );
        assert!(!inventory.remove_one(&ItemId::new("shield")));
    }

    #[test]
    fn from_items_rejects_overflow() {
        let too_many = (0..=GameConfig::MAX_INVENTORY_SIZE).map(|i| ItemId::new(format!("i{i}")));
        assert!(Inventory::from_items(too_many).is_none());
    }
}
