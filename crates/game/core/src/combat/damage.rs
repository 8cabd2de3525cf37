//! Damage calculation and application.

use crate::config::GameConfig;
use crate::state::Character;

use super::Enemy;

/// Anything that can stand on one side of a battle.
pub trait Combatant {
    fn health(&self) -> u32;
    fn strength(&self) -> u32;
    fn set_health(&mut self, health: u32);

    fn is_defeated(&self) -> bool {
        self.health() == 0
    }
}

impl Combatant for Character {
    fn health(&self) -> u32 {
        self.health
    }

    fn strength(&self) -> u32 {
        self.strength
    }

    fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }
}

impl Combatant for Enemy {
    fn health(&self) -> u32 {
        self.health
    }

    fn strength(&self) -> u32 {
        self.strength
    }

    fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }
}

/// Calculate the damage of a basic attack.
///
/// # Formula
///
/// ```text
/// damage = max(MINIMUM_DAMAGE, attacker.strength - defender.strength / DEFENSE_DIVISOR)
/// ```
///
/// The division floors, so a defender needs at least 4 strength to soak 1 point.
pub fn calculate_damage(
    attacker: &(impl Combatant + ?Sized),
    defender: &(impl Combatant + ?Sized),
) -> u32 {
    let reduction = defender.strength() / GameConfig::DEFENSE_DIVISOR;
    attacker
        .strength()
        .saturating_sub(reduction)
        .max(GameConfig::MINIMUM_DAMAGE)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Lowers a combatant's health by `damage`, stopping at 0.
pub(crate) fn strike(target: &mut (impl Combatant + ?Sized), damage: u32) {
    let remaining = apply_damage(target.health(), damage);
    target.set_health(remaining);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::EnemyKind;
    use crate::state::CharacterClass;

    #[test]
    fn defense_is_a_quarter_of_strength() {
        let attacker = Enemy::custom("Brute", 50, 15, 0);
        let defender = Enemy::custom("Target", 50, 8, 0);
        assert_eq!(calculate_damage(&attacker, &defender), 13);
    }

    #[test]
    fn damage_never_drops_below_one() {
        let weakling = Enemy::custom("Weakling", 50, 4, 0);
        let tank = Enemy::custom("Tank", 50, 40, 0);
        assert_eq!(calculate_damage(&weakling, &tank), 1);

        let harmless = Enemy::custom("Harmless", 50, 0, 0);
        assert_eq!(calculate_damage(&harmless, &harmless), 1);
    }

    #[test]
    fn character_against_goblin() {
        let warrior = Character::new("Conan", CharacterClass::Warrior);
        let goblin = Enemy::new(EnemyKind::Goblin);
        // 15 - 8/4 = 13 and 8 - 15/4 = 5
        assert_eq!(calculate_damage(&warrior, &goblin), 13);
        assert_eq!(calculate_damage(&goblin, &warrior), 5);
    }

    #[test]
    fn apply_damage_clamps_to_zero() {
        assert_eq!(apply_damage(10, 3), 7);
        assert_eq!(apply_damage(10, 10), 0);
        assert_eq!(apply_damage(2, 50), 0);
    }

    #[test]
    fn strike_lowers_health_in_place() {
        let mut goblin = Enemy::new(EnemyKind::Goblin);
        strike(&mut goblin, 20);
        assert_eq!(goblin.health, 30);
        strike(&mut goblin, 100);
        assert!(goblin.is_defeated());
    }
}
