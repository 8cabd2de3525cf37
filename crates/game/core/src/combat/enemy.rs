//! Enemy templates and the enemy record owned by a battle.

use super::CombatError;
use crate::progression::Rewards;

/// The closed set of enemy types.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    /// Parses an enemy type, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, CombatError> {
        raw.trim()
            .parse()
            .map_err(|_| CombatError::InvalidTarget(raw.trim().to_owned()))
    }

    /// Enemy matched to a character level: 1-2 goblin, 3-5 orc, 6+ dragon.
    pub const fn for_level(level: u32) -> Self {
        match level {
            0..=2 => Self::Goblin,
            3..=5 => Self::Orc,
            _ => Self::Dragon,
        }
    }

    pub const fn template(self) -> EnemyTemplate {
        match self {
            Self::Goblin => EnemyTemplate::new(50, 8, 2, Rewards::new(25, 10)),
            Self::Orc => EnemyTemplate::new(80, 12, 5, Rewards::new(50, 25)),
            Self::Dragon => EnemyTemplate::new(200, 25, 15, Rewards::new(200, 100)),
        }
    }
}

/// Base stats and bounty of an enemy type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
    pub rewards: Rewards,
}

impl EnemyTemplate {
    pub const fn new(health: u32, strength: u32, magic: u32, rewards: Rewards) -> Self {
        Self {
            health,
            strength,
            magic,
            rewards,
        }
    }
}

/// Enemy state for the duration of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    /// Fresh enemy at full health.
    pub fn new(kind: EnemyKind) -> Self {
        let template = kind.template();
        Self {
            name: kind.to_string(),
            health: template.health,
            max_health: template.health,
            strength: template.strength,
            magic: template.magic,
            xp_reward: template.rewards.xp,
            gold_reward: template.rewards.gold,
        }
    }

    /// Creates an enemy from a type name such as `"goblin"` or `"Dragon"`.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::InvalidTarget` for an unknown type.
    pub fn from_type(raw: &str) -> Result<Self, CombatError> {
        Ok(Self::new(EnemyKind::parse(raw)?))
    }

    pub fn for_level(level: u32) -> Self {
        Self::new(EnemyKind::for_level(level))
    }

    /// Enemy with arbitrary stats and no bounty.
    pub fn custom(name: impl Into<String>, health: u32, strength: u32, magic: u32) -> Self {
        Self {
            name: name.into(),
            health,
            max_health: health,
            strength,
            magic,
            xp_reward: 0,
            gold_reward: 0,
        }
    }

    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.xp_reward = rewards.xp;
        self.gold_reward = rewards.gold;
        self
    }

    /// What defeating this enemy pays out.
    pub fn rewards(&self) -> Rewards {
        Rewards::new(self.xp_reward, self.gold_reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_match_enemy_table() {
        let dragon = Enemy::new(EnemyKind::Dragon);
        assert_eq!(dragon.name, "Dragon");
        assert_eq!(dragon.health, 200);
        assert_eq!(dragon.max_health, 200);
        assert_eq!(dragon.strength, 25);
        assert_eq!(dragon.magic, 15);
        assert_eq!(dragon.rewards(), Rewards::new(200, 100));

        let orc = Enemy::new(EnemyKind::Orc);
        assert_eq!((orc.health, orc.strength, orc.magic), (80, 12, 5));
        assert_eq!(orc.rewards(), Rewards::new(50, 25));
    }

    #[test]
    fn from_type_ignores_case() {
        assert_eq!(Enemy::from_type("GOBLIN").unwrap().name, "Goblin");
        assert_eq!(Enemy::from_type(" orc ").unwrap().name, "Orc");
        assert_eq!(
            Enemy::from_type("troll"),
            Err(CombatError::InvalidTarget("troll".into()))
        );
    }

    #[test]
    fn enemy_scales_with_level() {
        assert_eq!(EnemyKind::for_level(1), EnemyKind::Goblin);
        assert_eq!(EnemyKind::for_level(2), EnemyKind::Goblin);
        assert_eq!(EnemyKind::for_level(3), EnemyKind::Orc);
        assert_eq!(EnemyKind::for_level(5), EnemyKind::Orc);
        assert_eq!(EnemyKind::for_level(6), EnemyKind::Dragon);
        assert_eq!(EnemyKind::for_level(40), EnemyKind::Dragon);
    }
}
