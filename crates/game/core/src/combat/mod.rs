//! Combat resolution system.
//!
//! Damage math lives in pure functions; [`Battle`] sequences turns on top of
//! them and owns the enemy for the duration of the fight. The character is
//! borrowed mutably and carries its health changes out of the battle.
//!
//! # Core Functions
//!
//! - `calculate_damage`: attacker strength minus a quarter of defender strength, floored at 1
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `special_ability`: the class ability used by `Battle::use_special_ability`
//! - `can_fight`: whether a character may enter a battle

mod ability;
mod battle;
mod damage;
mod dice;
mod enemy;
mod error;
mod result;

pub use ability::{
    AbilityEffect, AbilityKind, AbilityOutcome, CriticalStrike, Fireball, Heal, PowerStrike,
    SpecialAbility, special_ability,
};
pub use battle::{Battle, BattleEnv, BattleState, PlayerAction, can_fight};
pub use damage::{Combatant, apply_damage, calculate_damage};
pub use dice::Dice;
pub use enemy::{Enemy, EnemyKind, EnemyTemplate};
pub use error::CombatError;
pub use result::{BattleEvent, BattleLog, BattleOutcome, LogEntry, Side};
