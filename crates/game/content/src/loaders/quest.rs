//! Quest definition loader.

use std::path::Path;

use anyhow::Context;
use chronicles_core::{Prerequisite, QuestDefinition, is_well_formed_id};
use serde::{Deserialize, Serialize};

use crate::loaders::blocks::{Block, parse_blocks, write_block};
use crate::loaders::{DataError, LoadResult, read_file};

/// Quest catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCatalog {
    pub quests: Vec<QuestDefinition>,
}

/// Loader for quest definitions.
///
/// Text format, one block per quest:
///
/// ```text
/// QUEST_ID: goblin_camp
/// TITLE: Clear the Goblin Camp
/// DESCRIPTION: Drive the goblins out of the valley.
/// REWARD_XP: 150
/// REWARD_GOLD: 60
/// REQUIRED_LEVEL: 2
/// PREREQUISITE: first_steps
/// ```
pub struct QuestLoader;

impl QuestLoader {
    /// Load quests from a `KEY: value` text file.
    pub fn load(path: &Path) -> LoadResult<Vec<QuestDefinition>> {
        let content = read_file(path)?;
        let quests = Self::parse(&content)
            .with_context(|| format!("Failed to parse quest file {}", path.display()))?;

        tracing::debug!("Loaded {} quests from {}", quests.len(), path.display());
        Ok(quests)
    }

    /// Load quests from a RON catalog.
    pub fn load_ron(path: &Path) -> LoadResult<Vec<QuestDefinition>> {
        let content = read_file(path)?;
        let catalog: QuestCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest catalog RON: {}", e))?;

        tracing::debug!(
            "Loaded {} quests from catalog {}",
            catalog.quests.len(),
            path.display()
        );
        Ok(catalog.quests)
    }

    /// Parse quest blocks from text.
    ///
    /// # Errors
    ///
    /// `DataError::InvalidDataFormat` for the first malformed block.
    pub fn parse(content: &str) -> Result<Vec<QuestDefinition>, DataError> {
        parse_blocks(content)?.iter().map(parse_quest).collect()
    }

    /// Render quests in the text format read by [`QuestLoader::parse`].
    pub fn to_text(quests: &[QuestDefinition]) -> String {
        let mut out = String::new();
        for quest in quests {
            write_block(
                &mut out,
                &[
                    ("QUEST_ID", quest.quest_id.to_string()),
                    ("TITLE", quest.title.clone()),
                    ("DESCRIPTION", quest.description.clone()),
                    ("REWARD_XP", quest.reward_xp.to_string()),
                    ("REWARD_GOLD", quest.reward_gold.to_string()),
                    ("REQUIRED_LEVEL", quest.required_level.to_string()),
                    ("PREREQUISITE", quest.prerequisite.as_str().to_owned()),
                ],
            );
        }
        out
    }
}

fn parse_quest(block: &Block) -> Result<QuestDefinition, DataError> {
    let quest_id = block.require("QUEST_ID")?;
    if !is_well_formed_id(quest_id) {
        return Err(DataError::invalid(
            block.line_of("QUEST_ID"),
            format!("malformed QUEST_ID '{quest_id}'"),
        ));
    }

    let required_level: u32 = block.parse("REQUIRED_LEVEL")?;
    if required_level == 0 {
        return Err(DataError::invalid(
            block.line_of("REQUIRED_LEVEL"),
            "REQUIRED_LEVEL must be at least 1",
        ));
    }

    let mut quest = QuestDefinition::new(quest_id, block.require("TITLE")?)
        .with_description(block.require("DESCRIPTION")?)
        .with_rewards(block.parse("REWARD_XP")?, block.parse("REWARD_GOLD")?)
        .with_required_level(required_level);
    quest.prerequisite = Prerequisite::parse(block.require("PREREQUISITE")?);

    Ok(quest)
}
