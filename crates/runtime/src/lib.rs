//! Runtime orchestration for the Quest Chronicles rules.
//!
//! This crate wires content loading, character persistence and the
//! `chronicles-core` rules into a single [`GameSession`] API. Embedders create
//! or resume a session from a [`RuntimeConfig`] and drive it call by call.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session that routes requests through the rules
//! - [`repository`] persists characters to files or memory
//! - [`config`] and [`logging`] cover process setup
pub mod config;
pub mod error;
pub mod logging;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use repository::{
    CharacterRepository, FileCharacterRepository, InMemoryCharacterRepo, RepositoryError,
};
pub use session::{BattleReport, GameSession};
