//! Read-only quest views over a character and the registry.

use super::can_accept;
use crate::env::{QuestDefinition, QuestOracle};
use crate::progression::Rewards;
use crate::state::Character;

/// Definitions of the character's active quests, in id order.
///
/// Ids without a definition in the registry are skipped.
pub fn active_quests<'r>(
    character: &Character,
    registry: &'r (impl QuestOracle + ?Sized),
) -> Vec<&'r QuestDefinition> {
    character
        .active_quests
        .iter()
        .filter_map(|id| registry.quest(id))
        .collect()
}

/// Definitions of the character's completed quests, in id order.
pub fn completed_quests<'r>(
    character: &Character,
    registry: &'r (impl QuestOracle + ?Sized),
) -> Vec<&'r QuestDefinition> {
    character
        .completed_quests
        .iter()
        .filter_map(|id| registry.quest(id))
        .collect()
}

/// Quests the character could accept right now.
pub fn available_quests<'r>(
    character: &Character,
    registry: &'r (impl QuestOracle + ?Sized),
) -> Vec<&'r QuestDefinition> {
    registry
        .all_quests()
        .values()
        .filter(|quest| can_accept(character, &quest.quest_id, registry))
        .collect()
}

/// `100 * completed / total`, or 0 for an empty registry.
pub fn completion_percentage(character: &Character, registry: &(impl QuestOracle + ?Sized)) -> f64 {
    let total = registry.quest_count();
    if total == 0 {
        return 0.0;
    }
    100.0 * character.completed_quests.len() as f64 / total as f64
}

/// Sum of the rewards of every completed quest still in the registry.
pub fn total_rewards(character: &Character, registry: &(impl QuestOracle + ?Sized)) -> Rewards {
    completed_quests(character, registry)
        .into_iter()
        .map(|quest| Rewards::new(quest.reward_xp, quest.reward_gold))
        .fold(Rewards::NONE, |total, rewards| total + rewards)
}

/// Quests whose required level lies in `min_level..=max_level`.
pub fn quests_by_level(
    registry: &(impl QuestOracle + ?Sized),
    min_level: u32,
    max_level: u32,
) -> Vec<&QuestDefinition> {
    registry
        .all_quests()
        .values()
        .filter(|quest| (min_level..=max_level).contains(&quest.required_level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ContentSnapshot;
    use crate::state::{CharacterClass, QuestId};

    fn registry() -> ContentSnapshot {
        ContentSnapshot::empty()
            .with_quest(QuestDefinition::new("a", "A").with_rewards(10, 5))
            .with_quest(
                QuestDefinition::new("b", "B")
                    .with_rewards(20, 15)
                    .with_prerequisite("a"),
            )
            .with_quest(
                QuestDefinition::new("c", "C")
                    .with_rewards(40, 30)
                    .with_required_level(3),
            )
            .with_quest(
                QuestDefinition::new("d", "D")
                    .with_rewards(80, 60)
                    .with_required_level(7),
            )
    }

    fn ids(quests: Vec<&QuestDefinition>) -> Vec<&str> {
        quests.into_iter().map(|quest| quest.quest_id.as_str()).collect()
    }

    #[test]
    fn listing_follows_character_sets() {
        let registry = registry();
        let mut hero = Character::new("Hero", CharacterClass::Cleric);
        hero.completed_quests.insert(QuestId::new("a"));
        hero.active_quests.insert(QuestId::new("b"));
        hero.active_quests.insert(QuestId::new("unknown"));

        assert_eq!(ids(active_quests(&hero, &registry)), vec!["b"]);
        assert_eq!(ids(completed_quests(&hero, &registry)), vec!["a"]);
        assert!(available_quests(&hero, &registry).is_empty());

        hero.level = 3;
        assert_eq!(ids(available_quests(&hero, &registry)), vec!["c"]);
    }

    #[test]
    fn completion_percentage_counts_completed_quests() {
        let registry = registry();
        let mut hero = Character::new("Hero", CharacterClass::Cleric);
        assert_eq!(completion_percentage(&hero, &registry), 0.0);

        hero.completed_quests.insert(QuestId::new("a"));
        assert_eq!(completion_percentage(&hero, &registry), 25.0);

        assert_eq!(completion_percentage(&hero, &ContentSnapshot::empty()), 0.0);
    }

    #[test]
    fn total_rewards_sums_completed_quests() {
        let registry = registry();
        let mut hero = Character::new("Hero", CharacterClass::Cleric);
        assert_eq!(total_rewards(&hero, &registry), Rewards::NONE);

        hero.completed_quests.insert(QuestId::new("a"));
        hero.completed_quests.insert(QuestId::new("c"));
        assert_eq!(total_rewards(&hero, &registry), Rewards::new(50, 35));
    }

    #[test]
    fn level_range_is_inclusive() {
        let registry = registry();
        assert_eq!(ids(quests_by_level(&registry, 1, 3)), vec!["a", "b", "c"]);
        assert_eq!(ids(quests_by_level(&registry, 3, 7)), vec!["c", "d"]);
        assert!(quests_by_level(&registry, 8, 20).is_empty());
        assert!(quests_by_level(&registry, 5, 2).is_empty());
    }
}
