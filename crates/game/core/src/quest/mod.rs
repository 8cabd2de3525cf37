//! Quest graph: lifecycle, prerequisite chains, and progress queries.
//!
//! Every operation takes the registry as a [`QuestOracle`](crate::env::QuestOracle)
//! and only mutates the character's quest sets (plus experience and gold on
//! completion).

mod chain;
mod error;
mod lifecycle;
mod queries;

pub use chain::{prerequisite_chain, validate_prerequisites};
pub use error::QuestError;
pub use lifecycle::{AcceptOutcome, QuestCompletion, abandon, accept, can_accept, complete};
pub use queries::{
    active_quests, available_quests, completed_quests, completion_percentage, quests_by_level,
    total_rewards,
};
