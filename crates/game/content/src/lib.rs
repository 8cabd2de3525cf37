//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into the read-only registry the rules consume:
//! - Quest definitions (`KEY: value` text blocks or a RON catalog)
//! - Item definitions (`KEY: value` text blocks or a RON catalog)
//! - Game configuration (TOML)
//!
//! Content is consumed through the `chronicles-core` oracles and never appears
//! in a character record; characters refer to it by identifier.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DataError, ItemCatalog, ItemLoader, LoadResult, QuestCatalog,
    QuestLoader, default_items, default_quests,
};
