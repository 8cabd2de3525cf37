//! Accept, complete, and abandon.
//!
//! A quest id is in at most one of the character's two quest sets:
//!
//! ```text
//! (neither) --accept--> active --complete--> completed
//!               ^          |
//!               +-abandon--+
//! ```

use super::QuestError;
use crate::env::{QuestDefinition, QuestOracle};
use crate::progression::{ProgressionError, Rewards};
use crate::state::{Character, QuestId};

/// Result of a successful [`accept`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// Quest moved into the active set.
    Accepted,
    /// Quest was already active; nothing changed.
    AlreadyActive,
}

/// Result of a successful [`complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestCompletion {
    pub quest_id: QuestId,
    pub rewards: Rewards,
    pub levels_gained: u32,
}

fn lookup<'r>(
    quest_id: &QuestId,
    registry: &'r (impl QuestOracle + ?Sized),
) -> Result<&'r QuestDefinition, QuestError> {
    registry
        .quest(quest_id)
        .ok_or_else(|| QuestError::QuestNotFound(quest_id.clone()))
}

/// Runs the acceptance checks in order without touching the character.
fn check_acceptable(
    character: &Character,
    quest: &QuestDefinition,
) -> Result<(), QuestError> {
    if character.level < quest.required_level {
        return Err(QuestError::InsufficientLevel {
            quest_id: quest.quest_id.clone(),
            required: quest.required_level,
            current: character.level,
        });
    }

    if let Some(prerequisite) = quest.prerequisite.quest_id()
        && !character.is_quest_completed(prerequisite)
    {
        return Err(QuestError::RequirementsNotMet {
            quest_id: quest.quest_id.clone(),
            prerequisite: prerequisite.clone(),
        });
    }

    if character.is_quest_completed(&quest.quest_id) {
        return Err(QuestError::QuestAlreadyCompleted(quest.quest_id.clone()));
    }

    Ok(())
}

/// Adds a quest to the character's active set.
///
/// # Errors
///
/// Checked in this order: `QuestNotFound`, `InsufficientLevel`,
/// `RequirementsNotMet`, `QuestAlreadyCompleted`. Accepting an active quest is
/// not an error and reports [`AcceptOutcome::AlreadyActive`].
pub fn accept(
    character: &mut Character,
    quest_id: &QuestId,
    registry: &(impl QuestOracle + ?Sized),
) -> Result<AcceptOutcome, QuestError> {
    let quest = lookup(quest_id, registry)?;
    check_acceptable(character, quest)?;

    if character.active_quests.insert(quest.quest_id.clone()) {
        Ok(AcceptOutcome::Accepted)
    } else {
        Ok(AcceptOutcome::AlreadyActive)
    }
}

/// Moves an active quest to the completed set and pays its rewards.
///
/// The set transition and the reward grant happen together or not at all.
///
/// # Errors
///
/// `QuestNotFound`, then `QuestNotActive`. A dead character fails with
/// `QuestError::Progression(CharacterDead)` and keeps the quest active.
pub fn complete(
    character: &mut Character,
    quest_id: &QuestId,
    registry: &(impl QuestOracle + ?Sized),
) -> Result<QuestCompletion, QuestError> {
    let quest = lookup(quest_id, registry)?;

    if !character.is_quest_active(quest_id) {
        return Err(QuestError::QuestNotActive(quest_id.clone()));
    }
    if character.is_dead() {
        return Err(ProgressionError::CharacterDead.into());
    }

    let rewards = Rewards::new(quest.reward_xp, quest.reward_gold);
    let levels_gained = character.grant_rewards(rewards)?;

    character.active_quests.remove(quest_id);
    character.completed_quests.insert(quest_id.clone());

    Ok(QuestCompletion {
        quest_id: quest_id.clone(),
        rewards,
        levels_gained,
    })
}

/// Drops an active quest. The quest can be accepted again afterwards.
///
/// # Errors
///
/// `QuestNotActive` if the quest is not in the active set.
pub fn abandon(character: &mut Character, quest_id: &QuestId) -> Result<(), QuestError> {
    if character.active_quests.remove(quest_id) {
        Ok(())
    } else {
        Err(QuestError::QuestNotActive(quest_id.clone()))
    }
}

/// Whether [`accept`] would put the quest into the active set right now.
///
/// False for every failure, including unknown ids, and for quests that are
/// already active.
pub fn can_accept(
    character: &Character,
    quest_id: &QuestId,
    registry: &(impl QuestOracle + ?Sized),
) -> bool {
    match registry.quest(quest_id) {
        Some(quest) => {
            check_acceptable(character, quest).is_ok() && !character.is_quest_active(quest_id)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ContentSnapshot;
    use crate::state::CharacterClass;

    fn registry() -> ContentSnapshot {
        ContentSnapshot::empty()
            .with_quest(QuestDefinition::new("first_steps", "First Steps").with_rewards(50, 25))
            .with_quest(
                QuestDefinition::new("goblin_camp", "Goblin Camp")
                    .with_rewards(150, 60)
                    .with_prerequisite("first_steps"),
            )
            .with_quest(
                QuestDefinition::new("dragon_lair", "Dragon Lair")
                    .with_rewards(500, 300)
                    .with_required_level(5),
            )
    }

    fn hero() -> Character {
        Character::new("Hero", CharacterClass::Warrior)
    }

    fn id(raw: &str) -> QuestId {
        QuestId::new(raw)
    }

    #[test]
    fn accept_adds_quest_once() {
        let registry = registry();
        let mut hero = hero();

        assert_eq!(
            accept(&mut hero, &id("first_steps"), &registry),
            Ok(AcceptOutcome::Accepted)
        );
        assert_eq!(
            accept(&mut hero, &id("first_steps"), &registry),
            Ok(AcceptOutcome::AlreadyActive)
        );
        assert_eq!(hero.active_quests.len(), 1);
    }

    #[test]
    fn accept_checks_run_in_order() {
        let registry = registry();
        let mut hero = hero();

        assert_eq!(
            accept(&mut hero, &id("missing"), &registry),
            Err(QuestError::QuestNotFound(id("missing")))
        );
        assert_eq!(
            accept(&mut hero, &id("dragon_lair"), &registry),
            Err(QuestError::InsufficientLevel {
                quest_id: id("dragon_lair"),
                required: 5,
                current: 1,
            })
        );
        assert_eq!(
            accept(&mut hero, &id("goblin_camp"), &registry),
            Err(QuestError::RequirementsNotMet {
                quest_id: id("goblin_camp"),
                prerequisite: id("first_steps"),
            })
        );
        assert!(hero.active_quests.is_empty());
    }

    #[test]
    fn completed_quests_cannot_be_accepted_again() {
        let registry = registry();
        let mut hero = hero();
        accept(&mut hero, &id("first_steps"), &registry).unwrap();
        complete(&mut hero, &id("first_steps"), &registry).unwrap();

        assert_eq!(
            accept(&mut hero, &id("first_steps"), &registry),
            Err(QuestError::QuestAlreadyCompleted(id("first_steps")))
        );
        assert!(!can_accept(&hero, &id("first_steps"), &registry));
    }

    #[test]
    fn completing_an_unaccepted_quest_fails() {
        let registry = registry();
        let mut hero = hero();

        assert!(accept(&mut hero, &id("dragon_lair"), &registry).is_err());
        assert_eq!(
            complete(&mut hero, &id("dragon_lair"), &registry),
            Err(QuestError::QuestNotActive(id("dragon_lair")))
        );
        assert_eq!(
            complete(&mut hero, &id("nowhere"), &registry),
            Err(QuestError::QuestNotFound(id("nowhere")))
        );
    }

    #[test]
    fn complete_moves_quest_and_pays_rewards() {
        let registry = registry();
        let mut hero = hero();
        accept(&mut hero, &id("first_steps"), &registry).unwrap();

        let completion = complete(&mut hero, &id("first_steps"), &registry).unwrap();
        assert_eq!(completion.rewards, Rewards::new(50, 25));
        assert_eq!(completion.levels_gained, 0);
        assert!(!hero.is_quest_active(&id("first_steps")));
        assert!(hero.is_quest_completed(&id("first_steps")));
        assert_eq!(hero.experience, 50);
        assert_eq!(hero.gold, 125);

        assert_eq!(
            complete(&mut hero, &id("first_steps"), &registry),
            Err(QuestError::QuestNotActive(id("first_steps")))
        );
        assert_eq!(hero.gold, 125);
    }

    #[test]
    fn quest_rewards_can_level_up() {
        let registry = registry();
        let mut hero = hero();
        hero.completed_quests.insert(id("first_steps"));
        accept(&mut hero, &id("goblin_camp"), &registry).unwrap();

        let completion = complete(&mut hero, &id("goblin_camp"), &registry).unwrap();
        assert_eq!(completion.levels_gained, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 50);
    }

    #[test]
    fn dead_character_keeps_quest_active() {
        let registry = registry();
        let mut hero = hero();
        accept(&mut hero, &id("first_steps"), &registry).unwrap();
        hero.health = 0;

        assert_eq!(
            complete(&mut hero, &id("first_steps"), &registry),
            Err(QuestError::Progression(ProgressionError::CharacterDead))
        );
        assert!(hero.is_quest_active(&id("first_steps")));
        assert!(hero.completed_quests.is_empty());
        assert_eq!(hero.gold, 100);
    }

    #[test]
    fn abandon_resets_to_never_accepted() {
        let registry = registry();
        let mut hero = hero();
        accept(&mut hero, &id("first_steps"), &registry).unwrap();

        assert_eq!(abandon(&mut hero, &id("first_steps")), Ok(()));
        assert!(hero.active_quests.is_empty());
        assert!(hero.completed_quests.is_empty());
        assert_eq!(
            abandon(&mut hero, &id("first_steps")),
            Err(QuestError::QuestNotActive(id("first_steps")))
        );
        assert!(can_accept(&hero, &id("first_steps"), &registry));
    }

    #[test]
    fn can_accept_mirrors_accept() {
        let registry = registry();
        let mut hero = hero();

        assert!(can_accept(&hero, &id("first_steps"), &registry));
        assert!(!can_accept(&hero, &id("goblin_camp"), &registry));
        assert!(!can_accept(&hero, &id("dragon_lair"), &registry));
        assert!(!can_accept(&hero, &id("missing"), &registry));

        accept(&mut hero, &id("first_steps"), &registry).unwrap();
        assert!(!can_accept(&hero, &id("first_steps"), &registry));

        hero.level = 5;
        assert!(can_accept(&hero, &id("dragon_lair"), &registry));
    }
}
