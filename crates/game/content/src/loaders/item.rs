//! Item catalog loader.

use std::path::Path;

use anyhow::Context;
use chronicles_core::{ItemDefinition, ItemKind, StatEffect, is_well_formed_id};
use serde::{Deserialize, Serialize};

use crate::loaders::blocks::{Block, parse_blocks, write_block};
use crate::loaders::{DataError, LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item definitions.
///
/// Text format, one block per item:
///
/// ```text
/// ITEM_ID: iron_sword
/// NAME: Iron Sword
/// TYPE: weapon
/// EFFECT: strength:5
/// COST: 50
/// DESCRIPTION: A sturdy blade.
/// ```
pub struct ItemLoader;

impl ItemLoader {
    /// Load items from a `KEY: value` text file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)
            .with_context(|| format!("Failed to parse item file {}", path.display()))?;

        tracing::debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(items)
    }

    /// Load item catalog from a RON file.
    pub fn load_ron(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        tracing::debug!(
            "Loaded {} items from catalog {}",
            catalog.items.len(),
            path.display()
        );
        Ok(catalog.items)
    }

    /// Parse item blocks from text.
    ///
    /// # Errors
    ///
    /// `DataError::InvalidDataFormat` for the first malformed block, including
    /// unknown item types and effects on stats outside the known set.
    pub fn parse(content: &str) -> Result<Vec<ItemDefinition>, DataError> {
        parse_blocks(content)?.iter().map(parse_item).collect()
    }

    /// Render items in the text format read by [`ItemLoader::parse`].
    pub fn to_text(items: &[ItemDefinition]) -> String {
        let mut out = String::new();
        for item in items {
            write_block(
                &mut out,
                &[
                    ("ITEM_ID", item.item_id.to_string()),
                    ("NAME", item.name.clone()),
                    ("TYPE", item.kind.to_string()),
                    ("EFFECT", item.effect.to_string()),
                    ("COST", item.cost.to_string()),
                    ("DESCRIPTION", item.description.clone()),
                ],
            );
        }
        out
    }
}

fn parse_item(block: &Block) -> Result<ItemDefinition, DataError> {
    let item_id = block.require("ITEM_ID")?;
    if !is_well_formed_id(item_id) {
        return Err(DataError::invalid(
            block.line_of("ITEM_ID"),
            format!("malformed ITEM_ID '{item_id}'"),
        ));
    }

    let kind = ItemKind::parse(block.require("TYPE")?)
        .map_err(|e| DataError::invalid(block.line_of("TYPE"), e.to_string()))?;
    let effect = block
        .require("EFFECT")?
        .parse::<StatEffect>()
        .map_err(|e| DataError::invalid(block.line_of("EFFECT"), e.to_string()))?;

    Ok(ItemDefinition::new(
        item_id,
        block.require("NAME")?,
        kind,
        effect,
        block.parse("COST")?,
    )
    .with_description(block.get_or_empty("DESCRIPTION")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicles_core::{ItemId, StatKind};

    const ITEMS: &str = "\
ITEM_ID: health_potion
NAME: Health Potion
TYPE: consumable
EFFECT: health:20
COST: 25
DESCRIPTION: Restores a small amount of health.

ITEM_ID: iron_sword
NAME: Iron Sword
TYPE: Weapon
EFFECT: strength:5
COST: 50
DESCRIPTION: A sturdy blade.
";

    #[test]
    fn parses_item_blocks() {
        let items = ItemLoader::parse(ITEMS).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id, ItemId::new("health_potion"));
        assert_eq!(items[0].kind, ItemKind::Consumable);
        assert_eq!(items[0].effect, StatEffect::new(StatKind::Health, 20));
        assert_eq!(items[1].kind, ItemKind::Weapon);
        assert_eq!(items[1].cost, 50);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let text = ITEMS.replace("TYPE: consumable", "TYPE: trinket");
        let err = ItemLoader::parse(&text).unwrap_err();
        assert!(matches!(err, DataError::InvalidDataFormat { line: 3, .. }));
    }

    #[test]
    fn unknown_stat_is_rejected() {
        let text = ITEMS.replace("EFFECT: strength:5", "EFFECT: luck:5");
        let err = ItemLoader::parse(&text).unwrap_err();
        assert!(matches!(err, DataError::InvalidDataFormat { line: 11, .. }));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let text = ITEMS.replace("COST: 25", "COST: -25");
        assert!(ItemLoader::parse(&text).is_err());
    }

    #[test]
    fn text_round_trips() {
        let items = ItemLoader::parse(ITEMS).unwrap();
        let again = ItemLoader::parse(&ItemLoader::to_text(&items)).unwrap();
        assert_eq!(items, again);
    }

    #[test]
    fn id_with_list_separator_is_rejected() {
        let text = ITEMS.replacen("ITEM_ID: health_potion", "ITEM_ID: health,potion", 1);
        let err = ItemLoader::parse(&text).unwrap_err();
        assert!(matches!(err, DataError::InvalidDataFormat { line: 1, .. }));
    }
}
