//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chronicles_core::Character;

use crate::repository::{CharacterRepository, RepositoryError, Result};

/// In-memory implementation of CharacterRepository.
///
/// Stores characters keyed by name for testing and local development.
pub struct InMemoryCharacterRepo {
    characters: RwLock<BTreeMap<String, Character>>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            characters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create with characters already saved.
    pub fn with_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let characters = characters
            .into_iter()
            .map(|character| (character.name.clone(), character))
            .collect();
        Self {
            characters: RwLock::new(characters),
        }
    }
}

impl Default for InMemoryCharacterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn load(&self, name: &str) -> Result<Character> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::CharacterNotFound(name.to_owned()))
    }

    fn save(&self, character: &Character) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters.insert(character.name.clone(), character.clone());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.characters
            .read()
            .map(|characters| characters.contains_key(name))
            .unwrap_or(false)
    }

    fn list(&self) -> Result<Vec<String>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters.keys().cloned().collect())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        characters
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::CharacterNotFound(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicles_core::CharacterClass;

    #[test]
    fn save_load_list_delete() {
        let repo = InMemoryCharacterRepo::new();
        let hero = Character::new("Aria", CharacterClass::Warrior);

        repo.save(&hero).unwrap();
        assert!(repo.exists("Aria"));
        assert_eq!(repo.load("Aria").unwrap(), hero);
        assert_eq!(repo.list().unwrap(), vec!["Aria"]);

        repo.delete("Aria").unwrap();
        assert!(!repo.exists("Aria"));
        assert!(matches!(
            repo.delete("Aria"),
            Err(RepositoryError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn seeded_repository_lists_sorted_names() {
        let repo = InMemoryCharacterRepo::with_characters([
            Character::new("Zed", CharacterClass::Mage),
            Character::new("Ann", CharacterClass::Rogue),
        ]);
        assert_eq!(repo.list().unwrap(), vec!["Ann", "Zed"]);
    }
}
