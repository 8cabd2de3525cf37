//! Content loaders for reading game data from files.
//!
//! Each loader reads one file format into `chronicles-core` definitions.
//! [`ContentFactory`] ties them together for a data directory.

pub mod blocks;
pub mod config;
pub mod defaults;
pub mod error;
pub mod factory;
pub mod item;
pub mod quest;

pub use config::ConfigLoader;
pub use defaults::{default_items, default_quests};
pub use error::DataError;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use quest::{QuestCatalog, QuestLoader};

use std::io::ErrorKind;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
///
/// A missing file and an unreadable file surface as different [`DataError`]s.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| {
        let err = if source.kind() == ErrorKind::NotFound {
            DataError::MissingDataFile(path.to_path_buf())
        } else {
            DataError::CorruptedData {
                path: path.to_path_buf(),
                source,
            }
        };
        anyhow::Error::new(err)
    })
}
