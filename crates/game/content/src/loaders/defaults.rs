//! Built-in content written by [`ContentFactory::write_defaults`].
//!
//! [`ContentFactory::write_defaults`]: super::ContentFactory::write_defaults

use chronicles_core::{ItemDefinition, ItemKind, QuestDefinition, StatEffect, StatKind};

/// Starter quest line. Every prerequisite resolves inside the list.
pub fn default_quests() -> Vec<QuestDefinition> {
    vec![
        QuestDefinition::new("first_steps", "First Steps")
            .with_description("Your first adventure begins.")
            .with_rewards(50, 25)
            .with_required_level(1),
        QuestDefinition::new("goblin_camp", "Goblin Camp")
            .with_description("Drive the goblins out of the valley.")
            .with_rewards(150, 60)
            .with_required_level(2)
            .with_prerequisite("first_steps"),
        QuestDefinition::new("orc_warband", "Orc Warband")
            .with_description("Break the warband before it reaches the town.")
            .with_rewards(300, 120)
            .with_required_level(4)
            .with_prerequisite("goblin_camp"),
        QuestDefinition::new("dragon_lair", "The Dragon's Lair")
            .with_description("Face the dragon in its mountain lair.")
            .with_rewards(1000, 500)
            .with_required_level(6)
            .with_prerequisite("orc_warband"),
    ]
}

/// Starter shop stock.
pub fn default_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(
            "health_potion",
            "Health Potion",
            ItemKind::Consumable,
            StatEffect::new(StatKind::Health, 20),
            25,
        )
        .with_description("Restores a small amount of health."),
        ItemDefinition::new(
            "iron_sword",
            "Iron Sword",
            ItemKind::Weapon,
            StatEffect::new(StatKind::Strength, 5),
            50,
        )
        .with_description("A sturdy blade."),
        ItemDefinition::new(
            "apprentice_staff",
            "Apprentice Staff",
            ItemKind::Weapon,
            StatEffect::new(StatKind::Magic, 5),
            50,
        )
        .with_description("Hums faintly in the hand."),
        ItemDefinition::new(
            "leather_armor",
            "Leather Armor",
            ItemKind::Armor,
            StatEffect::new(StatKind::MaxHealth, 10),
            40,
        )
        .with_description("Light protection for travellers."),
    ]
}
