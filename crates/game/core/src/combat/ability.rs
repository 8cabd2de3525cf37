//! Class special abilities.
//!
//! Each class has exactly one ability and none of them has a cooldown:
//!
//! | class   | ability         | effect                                     |
//! |---------|-----------------|--------------------------------------------|
//! | Warrior | Power Strike    | 2x strength damage                         |
//! | Mage    | Fireball        | 2x magic damage                            |
//! | Rogue   | Critical Strike | 3x strength on a critical roll, else 1x    |
//! | Cleric  | Heal            | restores 30 health, capped at max health   |
//!
//! Ability damage ignores the defender's strength.

use core::fmt;

use super::damage::strike;
use super::{Dice, Enemy};
use crate::config::GameConfig;
use crate::env::RollContext;
use crate::state::{Character, CharacterClass};

/// A class-specific battle action.
pub trait SpecialAbility {
    fn kind(&self) -> AbilityKind;

    /// Resolves the ability, mutating health on the spot.
    fn activate(&self, user: &mut Character, target: &mut Enemy, dice: &mut Dice<'_>)
    -> AbilityOutcome;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    #[strum(serialize = "Power Strike")]
    PowerStrike,
    #[strum(serialize = "Fireball")]
    Fireball,
    #[strum(serialize = "Critical Strike")]
    CriticalStrike,
    #[strum(serialize = "Heal")]
    Heal,
}

/// What an ability did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityOutcome {
    pub ability: AbilityKind,
    pub user: String,
    pub effect: AbilityEffect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    Damage { amount: u32, critical: bool },
    Heal { amount: u32 },
}

impl AbilityOutcome {
    pub fn damage_dealt(&self) -> u32 {
        match self.effect {
            AbilityEffect::Damage { amount, .. } => amount,
            AbilityEffect::Heal { .. } => 0,
        }
    }
}

impl fmt::Display for AbilityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ability, self.effect) {
            (AbilityKind::Fireball, AbilityEffect::Damage { amount, .. }) => {
                write!(f, "{} casts Fireball for {amount} damage!", self.user)
            }
            (AbilityKind::CriticalStrike, AbilityEffect::Damage { amount, critical: true }) => {
                write!(f, "Critical Strike! {amount} damage!")
            }
            (AbilityKind::CriticalStrike, AbilityEffect::Damage { amount, .. }) => {
                write!(f, "Strike deals {amount} damage.")
            }
            (ability, AbilityEffect::Damage { amount, .. }) => {
                write!(f, "{} uses {ability} for {amount} damage!", self.user)
            }
            (_, AbilityEffect::Heal { amount }) => {
                write!(f, "{} heals for {amount} HP!", self.user)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PowerStrike;

impl SpecialAbility for PowerStrike {
    fn kind(&self) -> AbilityKind {
        AbilityKind::PowerStrike
    }

    fn activate(&self, user: &mut Character, target: &mut Enemy, _: &mut Dice<'_>) -> AbilityOutcome {
        let amount = user.strength.saturating_mul(2);
        strike(target, amount);
        damage_outcome(self.kind(), user, amount, false)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Fireball;

impl SpecialAbility for Fireball {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Fireball
    }

    fn activate(&self, user: &mut Character, target: &mut Enemy, _: &mut Dice<'_>) -> AbilityOutcome {
        let amount = user.magic.saturating_mul(2);
        strike(target, amount);
        damage_outcome(self.kind(), user, amount, false)
    }
}

/// Rogue strike; `chance` is the percent chance of tripling the damage.
#[derive(Clone, Copy, Debug)]
pub struct CriticalStrike {
    pub chance: u32,
}

impl Default for CriticalStrike {
    fn default() -> Self {
        Self {
            chance: GameConfig::DEFAULT_CRITICAL_CHANCE,
        }
    }
}

impl SpecialAbility for CriticalStrike {
    fn kind(&self) -> AbilityKind {
        AbilityKind::CriticalStrike
    }

    fn activate(&self, user: &mut Character, target: &mut Enemy, dice: &mut Dice<'_>) -> AbilityOutcome {
        let critical = dice.roll_percent(RollContext::Critical, self.chance);
        let multiplier = if critical { 3 } else { 1 };
        let amount = user.strength.saturating_mul(multiplier);
        strike(target, amount);
        damage_outcome(self.kind(), user, amount, critical)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Heal;

impl SpecialAbility for Heal {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Heal
    }

    fn activate(&self, user: &mut Character, _: &mut Enemy, _: &mut Dice<'_>) -> AbilityOutcome {
        let amount = user.heal(GameConfig::CLERIC_HEAL_AMOUNT as i64);
        AbilityOutcome {
            ability: self.kind(),
            user: user.name.clone(),
            effect: AbilityEffect::Heal { amount },
        }
    }
}

fn damage_outcome(ability: AbilityKind, user: &Character, amount: u32, critical: bool) -> AbilityOutcome {
    AbilityOutcome {
        ability,
        user: user.name.clone(),
        effect: AbilityEffect::Damage { amount, critical },
    }
}

/// The ability a class brings into battle.
pub fn special_ability(class: CharacterClass, config: &GameConfig) -> Box<dyn SpecialAbility> {
    match class {
        CharacterClass::Warrior => Box::new(PowerStrike),
        CharacterClass::Mage => Box::new(Fireball),
        CharacterClass::Rogue => Box::new(CriticalStrike {
            chance: config.critical_chance,
        }),
        CharacterClass::Cleric => Box::new(Heal),
    }
}
