//! Repository contract for saving and loading characters.

use chronicles_core::Character;

use super::Result;

/// Repository for character persistence.
///
/// Characters are keyed by name. Static content (quests, items) is not stored
/// here; a saved character only refers to it by identifier.
pub trait CharacterRepository: Send + Sync {
    /// Load a character by name.
    ///
    /// Fails with `CharacterNotFound` if nothing is saved under `name`.
    fn load(&self, name: &str) -> Result<Character>;

    /// Save a character, replacing any earlier save under the same name.
    fn save(&self, character: &Character) -> Result<()>;

    /// Check if a character is saved under `name`.
    fn exists(&self, name: &str) -> bool;

    /// Names of all saved characters, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Delete a saved character.
    ///
    /// Fails with `CharacterNotFound` if nothing is saved under `name`.
    fn delete(&self, name: &str) -> Result<()>;
}
