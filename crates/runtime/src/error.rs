//! Unified error type surfaced by the game session.
//!
//! Wraps failures from the rules, the repositories and the content loaders so
//! callers can bubble them up with consistent context.

use chronicles_core::{
    CharacterError, CombatError, ErrorSeverity, GameError, InventoryError, ItemId,
    ProgressionError, QuestError,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),

    /// An item id that the content registry does not define.
    #[error("unknown item '{0}'")]
    UnknownItem(ItemId),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Character(e) => e.severity(),
            Self::Progression(e) => e.severity(),
            Self::Combat(e) => e.severity(),
            Self::Quest(e) => e.severity(),
            Self::Inventory(e) => e.severity(),
            Self::Repository(e) => e.severity(),
            Self::Content(_) => ErrorSeverity::Corrupted,
            Self::UnknownItem(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Character(e) => e.error_code(),
            Self::Progression(e) => e.error_code(),
            Self::Combat(e) => e.error_code(),
            Self::Quest(e) => e.error_code(),
            Self::Inventory(e) => e.error_code(),
            Self::Repository(e) => e.error_code(),
            Self::Content(_) => "SESSION_CONTENT",
            Self::UnknownItem(_) => "SESSION_UNKNOWN_ITEM",
        }
    }
}
