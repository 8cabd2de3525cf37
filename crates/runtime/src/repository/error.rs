//! Error types raised by repository implementations.

use std::path::PathBuf;

use chronicles_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("character '{0}' not found")]
    CharacterNotFound(String),

    #[error("could not read save file {}", path.display())]
    SaveFileCorrupted {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid save data: {0}")]
    InvalidSaveData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("character repository lock was poisoned")]
    LockPoisoned,
}

impl RepositoryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidSaveData(reason.into())
    }
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CharacterNotFound(_) => ErrorSeverity::Validation,
            Self::SaveFileCorrupted { .. } | Self::InvalidSaveData(_) => ErrorSeverity::Corrupted,
            Self::Io(_) | Self::LockPoisoned => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound(_) => "REPOSITORY_CHARACTER_NOT_FOUND",
            Self::SaveFileCorrupted { .. } => "REPOSITORY_SAVE_FILE_CORRUPTED",
            Self::InvalidSaveData(_) => "REPOSITORY_INVALID_SAVE_DATA",
            Self::Io(_) => "REPOSITORY_IO",
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
