//! Traits describing read-only content.
//!
//! Oracles expose quest definitions, item definitions, and deterministic
//! randomness. The rules never mutate what an oracle hands out; the concrete
//! registry is [`ContentSnapshot`].
mod error;
mod items;
mod quests;
mod rng;
mod snapshot;

pub use error::ContentError;
pub use items::{ItemDefinition, ItemKind, ItemOracle, StatEffect, StatKind};
pub use quests::{Prerequisite, QuestDefinition, QuestOracle};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use snapshot::ContentSnapshot;
