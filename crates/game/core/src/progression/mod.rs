//! Character progression: experience, leveling, healing, death, and gold.
//!
//! Leveling is a loop rather than a single check: one large grant (a quest
//! reward, a dragon kill) must cross every threshold it covers in the same call.
//!
//! ```text
//! while experience >= level * 100:
//!     experience -= level * 100
//!     level      += 1
//!     max_health += 10, strength += 2, magic += 2
//!     health      = max_health
//! ```

mod error;

pub use error::ProgressionError;

use crate::config::GameConfig;
use crate::state::Character;

/// Experience and gold granted together by a victory or a completed quest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub xp: u32,
    pub gold: u32,
}

impl Rewards {
    pub const NONE: Self = Self { xp: 0, gold: 0 };

    pub const fn new(xp: u32, gold: u32) -> Self {
        Self { xp, gold }
    }

    pub const fn is_empty(&self) -> bool {
        self.xp == 0 && self.gold == 0
    }
}

impl core::ops::Add for Rewards {
    type Output = Rewards;

    fn add(self, rhs: Rewards) -> Rewards {
        Rewards {
            xp: self.xp.saturating_add(rhs.xp),
            gold: self.gold.saturating_add(rhs.gold),
        }
    }
}

/// Experience required to advance from `level` to `level + 1`.
pub const fn experience_for_level(level: u32) -> u64 {
    level as u64 * GameConfig::XP_PER_LEVEL as u64
}

impl Character {
    /// Adds experience and applies every level-up it pays for.
    ///
    /// Zero or negative amounts change nothing. Amounts above `u32::MAX` are
    /// applied as `u32::MAX`. Returns the number of levels gained.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::CharacterDead` if health is 0, regardless of amount.
    pub fn gain_experience(&mut self, amount: i64) -> Result<u32, ProgressionError> {
        if self.is_dead() {
            return Err(ProgressionError::CharacterDead);
        }
        if amount <= 0 {
            return Ok(0);
        }

        let mut experience = self.experience as u64 + amount.min(u32::MAX as i64) as u64;
        let mut levels_gained = 0;

        while experience >= experience_for_level(self.level) {
            experience -= experience_for_level(self.level);
            self.level += 1;
            self.max_health = self
                .max_health
                .saturating_add(GameConfig::LEVEL_UP_MAX_HEALTH);
            self.strength = self.strength.saturating_add(GameConfig::LEVEL_UP_STRENGTH);
            self.magic = self.magic.saturating_add(GameConfig::LEVEL_UP_MAGIC);
            self.health = self.max_health;
            levels_gained += 1;
        }

        // Below the current threshold, so it fits whenever the level does.
        self.experience = experience as u32;
        Ok(levels_gained)
    }

    /// Restores up to `amount` health without exceeding `max_health`.
    ///
    /// Returns the health actually restored; 0 for non-positive amounts.
    pub fn heal(&mut self, amount: i64) -> u32 {
        if amount <= 0 {
            return 0;
        }
        let missing = self.max_health.saturating_sub(self.health);
        let healed = amount.min(missing as i64) as u32;
        self.health += healed;
        healed
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Brings a dead character back at half health (at least 1).
    ///
    /// Returns false and changes nothing if the character is alive.
    pub fn revive(&mut self) -> bool {
        if !self.is_dead() {
            return false;
        }
        self.health = (self.max_health / 2).max(1);
        true
    }

    /// Adds `delta` gold (negative to spend) and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::InvalidResource` if the total would go negative;
    /// gold is left untouched.
    pub fn add_gold(&mut self, delta: i64) -> Result<u32, ProgressionError> {
        let total = self.gold as i64 + delta;
        if total < 0 {
            return Err(ProgressionError::InvalidResource {
                available: self.gold,
                required: delta.unsigned_abs(),
            });
        }
        self.gold = total.min(u32::MAX as i64) as u32;
        Ok(self.gold)
    }

    /// Applies an experience/gold reward pair as one step.
    ///
    /// Returns the number of levels gained.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::CharacterDead` before touching any field if the
    /// character is dead.
    pub fn grant_rewards(&mut self, rewards: Rewards) -> Result<u32, ProgressionError> {
        if self.is_dead() {
            return Err(ProgressionError::CharacterDead);
        }
        let levels = self.gain_experience(rewards.xp as i64)?;
        self.add_gold(rewards.gold as i64)?;
        Ok(levels)
    }
}
