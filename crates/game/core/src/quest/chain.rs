//! Prerequisite chains.
//!
//! Each quest names at most one prerequisite, so the quests form a forest and
//! the chain of a quest is the path from its root down to it. Content that
//! loops back on itself is rejected instead of walked forever.

use std::collections::BTreeSet;

use super::QuestError;
use crate::env::QuestOracle;
use crate::state::QuestId;

/// Every quest that must be completed before `quest_id`, earliest first,
/// ending with `quest_id` itself.
///
/// # Errors
///
/// - `QuestNotFound` if `quest_id` or any prerequisite along the way is missing.
/// - `CyclicPrerequisite` naming the quest that reappeared in the walk.
pub fn prerequisite_chain(
    quest_id: &QuestId,
    registry: &(impl QuestOracle + ?Sized),
) -> Result<Vec<QuestId>, QuestError> {
    let mut chain = Vec::new();
    let mut visited = BTreeSet::new();
    let mut current = quest_id;

    loop {
        let quest = registry
            .quest(current)
            .ok_or_else(|| QuestError::QuestNotFound(current.clone()))?;
        if !visited.insert(current) {
            return Err(QuestError::CyclicPrerequisite(current.clone()));
        }
        chain.push(current.clone());

        match quest.prerequisite.quest_id() {
            Some(prerequisite) => current = prerequisite,
            None => break,
        }
    }

    chain.reverse();
    Ok(chain)
}

/// Checks that every prerequisite in the registry exists and that no chain
/// loops.
///
/// # Errors
///
/// The first broken link found, in quest id order.
pub fn validate_prerequisites(registry: &(impl QuestOracle + ?Sized)) -> Result<(), QuestError> {
    for quest_id in registry.all_quests().keys() {
        prerequisite_chain(quest_id, registry)?;
    }
    Ok(())
}
