use crate::env::ItemKind;
use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Errors raised by inventory, equipment, and shop operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    InventoryFull { capacity: usize },

    #[error("item '{0}' not found in inventory")]
    ItemNotFound(ItemId),

    #[error("item '{item_id}' is a {actual}, expected a {expected}")]
    InvalidItemType {
        item_id: ItemId,
        expected: ItemKind,
        actual: ItemKind,
    },

    #[error("not enough gold: have {available}, need {required}")]
    InsufficientGold { available: u32, required: u32 },

    #[error("invalid stat effect '{0}'")]
    InvalidStatEffect(String),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InventoryFull { .. }
            | Self::ItemNotFound(_)
            | Self::InvalidItemType { .. }
            | Self::InsufficientGold { .. } => ErrorSeverity::Recoverable,
            Self::InvalidStatEffect(_) => ErrorSeverity::Corrupted,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryFull { .. } => "INVENTORY_FULL",
            Self::ItemNotFound(_) => "INVENTORY_ITEM_NOT_FOUND",
            Self::InvalidItemType { .. } => "INVENTORY_INVALID_ITEM_TYPE",
            Self::InsufficientGold { .. } => "INVENTORY_INSUFFICIENT_GOLD",
            Self::InvalidStatEffect(_) => "INVENTORY_INVALID_STAT_EFFECT",
        }
    }
}
