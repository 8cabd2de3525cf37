//! File-based CharacterRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chronicles_core::Character;

use crate::repository::{CharacterRepository, RepositoryError, Result, codec};

/// File-based implementation of CharacterRepository.
///
/// # File Format
///
/// Each character is stored as `{name}_save.txt` in the text format described
/// in [`codec`](crate::repository::codec). Writes go to a temp file first and
/// are renamed into place.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    const SUFFIX: &'static str = "_save.txt";

    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    fn save_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(RepositoryError::invalid(format!(
                "'{name}' cannot be used as a save name"
            )));
        }
        Ok(self.base_dir.join(format!("{name}{}", Self::SUFFIX)))
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn load(&self, name: &str) -> Result<Character> {
        let path = self.save_path(name)?;

        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RepositoryError::CharacterNotFound(name.to_owned())
            } else {
                RepositoryError::SaveFileCorrupted {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let character = codec::decode(&content)?;

        tracing::debug!("Loaded character '{}' from {}", name, path.display());

        Ok(character)
    }

    fn save(&self, character: &Character) -> Result<()> {
        let path = self.save_path(&character.name)?;
        let temp_path = path.with_extension("txt.tmp");

        let content = codec::encode(character)?;
        fs::write(&temp_path, content).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved character '{}' to {}", character.name, path.display());

        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.save_path(name).is_ok_and(|path| path.exists())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(names),
            Err(err) => return Err(RepositoryError::Io(err)),
        };

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.is_file()
                && let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(Self::SUFFIX)
                && !name.is_empty()
            {
                names.push(name.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.save_path(name)?;

        fs::remove_file(&path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                RepositoryError::CharacterNotFound(name.to_owned())
            } else {
                RepositoryError::Io(err)
            }
        })?;
        tracing::debug!("Deleted character '{}'", name);

        Ok(())
    }
}
