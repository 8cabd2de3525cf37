//! Character record errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while creating or validating a character record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Class name is not one of Warrior, Mage, Rogue, Cleric.
    #[error("invalid character class '{0}'")]
    InvalidCharacterClass(String),

    /// Record violates a character invariant.
    #[error("invalid character data: {0}")]
    InvalidCharacterData(&'static str),
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCharacterClass(_) => ErrorSeverity::Validation,
            Self::InvalidCharacterData(_) => ErrorSeverity::Corrupted,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCharacterClass(_) => "CHARACTER_INVALID_CLASS",
            Self::InvalidCharacterData(_) => "CHARACTER_INVALID_DATA",
        }
    }
}
