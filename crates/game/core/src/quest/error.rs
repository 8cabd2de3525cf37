use crate::error::{ErrorSeverity, GameError};
use crate::progression::ProgressionError;
use crate::state::QuestId;

/// Errors raised by quest lifecycle and prerequisite operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestError {
    #[error("quest '{0}' not found")]
    QuestNotFound(QuestId),

    #[error("quest '{0}' is not active")]
    QuestNotActive(QuestId),

    #[error("quest '{0}' is already completed")]
    QuestAlreadyCompleted(QuestId),

    #[error("quest '{quest_id}' requires level {required}, character is level {current}")]
    InsufficientLevel {
        quest_id: QuestId,
        required: u32,
        current: u32,
    },

    #[error("quest '{quest_id}' requires '{prerequisite}' to be completed first")]
    RequirementsNotMet {
        quest_id: QuestId,
        prerequisite: QuestId,
    },

    /// The prerequisite walk came back to a quest it already visited.
    #[error("prerequisite chain of '{0}' is cyclic")]
    CyclicPrerequisite(QuestId),

    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

impl GameError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::QuestNotFound(_)
            | Self::QuestNotActive(_)
            | Self::QuestAlreadyCompleted(_)
            | Self::InsufficientLevel { .. }
            | Self::RequirementsNotMet { .. } => ErrorSeverity::Validation,
            Self::CyclicPrerequisite(_) => ErrorSeverity::Corrupted,
            Self::Progression(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::QuestNotFound(_) => "QUEST_NOT_FOUND",
            Self::QuestNotActive(_) => "QUEST_NOT_ACTIVE",
            Self::QuestAlreadyCompleted(_) => "QUEST_ALREADY_COMPLETED",
            Self::InsufficientLevel { .. } => "QUEST_INSUFFICIENT_LEVEL",
            Self::RequirementsNotMet { .. } => "QUEST_REQUIREMENTS_NOT_MET",
            Self::CyclicPrerequisite(_) => "QUEST_CYCLIC_PREREQUISITE",
            Self::Progression(err) => err.error_code(),
        }
    }
}
