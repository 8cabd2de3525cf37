use crate::error::{ErrorSeverity, GameError};

/// Errors raised while setting up or driving a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The character entered (or acted in) a battle with 0 health.
    #[error("character is dead and cannot fight")]
    CharacterDead,

    /// An action was attempted after the battle ended.
    #[error("combat is not active")]
    CombatNotActive,

    /// Enemy type is not one of goblin, orc, dragon.
    #[error("unknown enemy type '{0}'")]
    InvalidTarget(String),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CharacterDead | Self::CombatNotActive => ErrorSeverity::Recoverable,
            Self::InvalidTarget(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterDead => "COMBAT_CHARACTER_DEAD",
            Self::CombatNotActive => "COMBAT_NOT_ACTIVE",
            Self::InvalidTarget(_) => "COMBAT_INVALID_TARGET",
        }
    }
}
