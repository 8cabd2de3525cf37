//! Content definition errors.
//!
//! Errors raised while turning raw content fields into typed definitions.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a content field does not describe a valid definition.
///
/// These are data-integrity failures: the registry must refuse the record
/// rather than fall back to a guess.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentError {
    /// Effect string is not `stat:value` or names a stat outside the known set.
    #[error("invalid stat effect '{0}'")]
    InvalidStatEffect(String),

    /// Item type is not one of weapon, armor, consumable.
    #[error("invalid item type '{0}'")]
    InvalidItemType(String),
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Corrupted
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStatEffect(_) => "CONTENT_INVALID_STAT_EFFECT",
            Self::InvalidItemType(_) => "CONTENT_INVALID_ITEM_TYPE",
        }
    }
}
