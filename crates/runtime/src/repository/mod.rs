//! Repository layer for character saves.
//!
//! Repositories handle data that CHANGES during play: the character record.
//! Static content (quests, items) comes from the content registry, not from
//! repositories.

pub mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileCharacterRepository;
pub use memory::InMemoryCharacterRepo;
pub use traits::CharacterRepository;
