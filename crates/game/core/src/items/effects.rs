//! Stat effects carried by items.

use super::InventoryError;
use crate::env::{StatEffect, StatKind};
use crate::state::Character;

/// Parses a `stat:value` effect string.
///
/// # Errors
///
/// `InvalidStatEffect` for a malformed string or a stat outside [`StatKind`].
pub fn parse_item_effect(raw: &str) -> Result<StatEffect, InventoryError> {
    raw.parse::<StatEffect>()
        .map_err(|_| InventoryError::InvalidStatEffect(raw.to_owned()))
}

/// Applies an effect to the character and returns the change actually made.
///
/// - health is clamped to `0..=max_health`
/// - max_health never drops below 1, and health is re-clamped under it
/// - strength and magic saturate at 0
///
/// Because of the clamping the returned effect can be smaller than the
/// requested one; reverting the returned effect undoes exactly this call.
pub fn apply_stat_effect(character: &mut Character, effect: StatEffect) -> StatEffect {
    let applied = match effect.stat {
        StatKind::Health => {
            let before = character.health;
            character.health = shift(before, effect.value).min(character.max_health);
            delta(before, character.health)
        }
        StatKind::MaxHealth => {
            let before = character.max_health;
            character.max_health = shift(before, effect.value).max(1);
            character.health = character.health.min(character.max_health);
            delta(before, character.max_health)
        }
        StatKind::Strength => {
            let before = character.strength;
            character.strength = shift(before, effect.value);
            delta(before, character.strength)
        }
        StatKind::Magic => {
            let before = character.magic;
            character.magic = shift(before, effect.value);
            delta(before, character.magic)
        }
    };
    StatEffect::new(effect.stat, applied)
}

fn shift(value: u32, by: i32) -> u32 {
    value.saturating_add_signed(by)
}

fn delta(before: u32, after: u32) -> i32 {
    (after as i64 - before as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CharacterClass;

    fn mage() -> Character {
        Character::new("Merlin", CharacterClass::Mage)
    }

    #[test]
    fn health_is_capped_at_max() {
        let mut hero = mage();
        hero.health = 70;
        let applied = apply_stat_effect(&mut hero, StatEffect::new(StatKind::Health, 20));
        assert_eq!(hero.health, 80);
        assert_eq!(applied, StatEffect::new(StatKind::Health, 10));
    }

    #[test]
    fn health_never_goes_negative() {
        let mut hero = mage();
        hero.health = 5;
        apply_stat_effect(&mut hero, StatEffect::new(StatKind::Health, -50));
        assert_eq!(hero.health, 0);
    }

    #[test]
    fn lowering_max_health_drags_health_down() {
        let mut hero = mage();
        apply_stat_effect(&mut hero, StatEffect::new(StatKind::MaxHealth, -30));
        assert_eq!(hero.max_health, 50);
        assert_eq!(hero.health, 50);

        let applied = apply_stat_effect(&mut hero, StatEffect::new(StatKind::MaxHealth, -500));
        assert_eq!(hero.max_health, 1);
        assert_eq!(hero.health, 1);
        assert_eq!(applied.value, -49);
    }

    #[test]
    fn strength_and_magic_saturate_at_zero() {
        let mut hero = mage();
        let applied = apply_stat_effect(&mut hero, StatEffect::new(StatKind::Strength, -20));
        assert_eq!(hero.strength, 0);
        assert_eq!(applied.value, -8);

        apply_stat_effect(&mut hero, StatEffect::new(StatKind::Magic, 5));
        assert_eq!(hero.magic, 25);
    }

    #[test]
    fn reverting_the_applied_effect_restores_the_stat() {
        let mut hero = mage();
        let applied = apply_stat_effect(&mut hero, StatEffect::new(StatKind::Strength, -20));
        apply_stat_effect(&mut hero, applied.inverse());
        assert_eq!(hero.strength, 8);
    }

    #[test]
    fn parse_rejects_unknown_stats() {
        assert_eq!(
            parse_item_effect("strength:5"),
            Ok(StatEffect::new(StatKind::Strength, 5))
        );
        assert_eq!(
            parse_item_effect("charisma:5"),
            Err(InventoryError::InvalidStatEffect("charisma:5".into()))
        );
    }
}
