//! Progression errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by experience, healing, and gold operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionError {
    /// Character is at 0 health and cannot gain experience or rewards.
    #[error("character is dead")]
    CharacterDead,

    /// Gold would become negative.
    #[error("not enough gold: have {available}, need {required}")]
    InvalidResource { available: u32, required: u64 },
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterDead => "PROGRESSION_CHARACTER_DEAD",
            Self::InvalidResource { .. } => "PROGRESSION_INVALID_RESOURCE",
        }
    }
}
