//! Turn-based battle between one character and one enemy.
//!
//! A battle is a two-state machine:
//!
//! ```text
//!            player_turn / enemy_turn / use_special_ability / failed escape
//!              +------+
//!              v      |
//! new() --> ACTIVE ---+---- enemy or character at 0 health, or escape --> ENDED
//! ```
//!
//! The end check runs after every single health change, so a battle can end
//! in the middle of a round. Every action in ENDED fails with
//! [`CombatError::CombatNotActive`].

use super::ability::special_ability;
use super::damage::{calculate_damage, strike};
use super::{
    AbilityOutcome, BattleEvent, BattleLog, BattleOutcome, CombatError, Combatant, Dice, Enemy,
    Side,
};
use crate::config::GameConfig;
use crate::env::{RngOracle, RollContext};
use crate::state::Character;

/// Read-only collaborators a battle rolls and tunes against.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    pub rng: &'a dyn RngOracle,
    pub config: &'a GameConfig,
    /// Seed every roll of this battle derives from.
    pub seed: u64,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, config: &'a GameConfig, seed: u64) -> Self {
        Self { rng, config, seed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    Active,
    Ended,
}

/// What the character does at the start of a round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerAction {
    Attack,
    Special,
    Flee,
}

pub struct Battle<'a> {
    character: &'a mut Character,
    enemy: Enemy,
    config: &'a GameConfig,
    dice: Dice<'a>,
    state: BattleState,
    outcome: Option<BattleOutcome>,
    turn: u32,
    log: BattleLog,
}

impl<'a> Battle<'a> {
    /// Starts a battle.
    ///
    /// # Errors
    ///
    /// Returns `CombatError::CharacterDead` if the character has 0 health.
    pub fn new(
        character: &'a mut Character,
        enemy: Enemy,
        env: BattleEnv<'a>,
    ) -> Result<Self, CombatError> {
        if !can_fight(character) {
            return Err(CombatError::CharacterDead);
        }

        Ok(Self {
            character,
            enemy,
            config: env.config,
            dice: Dice::new(env.rng, env.seed),
            state: BattleState::Active,
            outcome: None,
            turn: 0,
            log: BattleLog::new(),
        })
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    /// `None` while the battle is active.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Side> {
        self.outcome.and_then(|outcome| outcome.winner())
    }

    pub fn character(&self) -> &Character {
        self.character
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Number of actions taken so far by either side.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn seed(&self) -> u64 {
        self.dice.seed()
    }

    /// Character performs a basic attack. Returns the damage dealt.
    pub fn player_turn(&mut self) -> Result<u32, CombatError> {
        self.ensure_active()?;
        self.turn += 1;

        let damage = calculate_damage(&*self.character, &self.enemy);
        strike(&mut self.enemy, damage);
        self.record_attack(Side::Player, damage);
        self.check_battle_end();
        Ok(damage)
    }

    /// Enemy performs a basic attack. Returns the damage dealt.
    pub fn enemy_turn(&mut self) -> Result<u32, CombatError> {
        self.ensure_active()?;
        self.turn += 1;

        let damage = calculate_damage(&self.enemy, &*self.character);
        strike(&mut *self.character, damage);
        self.record_attack(Side::Enemy, damage);
        self.check_battle_end();
        Ok(damage)
    }

    /// Character uses their class ability.
    pub fn use_special_ability(&mut self) -> Result<AbilityOutcome, CombatError> {
        self.ensure_active()?;
        self.turn += 1;

        let ability = special_ability(self.character.class, self.config);
        let outcome = ability.activate(&mut *self.character, &mut self.enemy, &mut self.dice);
        self.log.push(self.turn, BattleEvent::Ability(outcome.clone()));
        self.check_battle_end();
        Ok(outcome)
    }

    /// Character tries to flee. Returns true if the battle ended by escape.
    ///
    /// A failed attempt leaves the battle active; it does not trigger the
    /// enemy's retaliation by itself, see [`Battle::play_round`].
    pub fn attempt_escape(&mut self) -> Result<bool, CombatError> {
        self.ensure_active()?;
        self.turn += 1;

        let escaped = self
            .dice
            .roll_percent(RollContext::Escape, self.config.escape_chance);
        if escaped {
            self.finish(BattleOutcome::Escaped);
        } else {
            self.log.push(self.turn, BattleEvent::EscapeFailed);
        }
        Ok(escaped)
    }

    /// One full round: the character acts, then the enemy retaliates if the
    /// battle is still active.
    ///
    /// Returns the outcome if the battle ended during the round.
    pub fn play_round(&mut self, action: PlayerAction) -> Result<Option<BattleOutcome>, CombatError> {
        match action {
            PlayerAction::Attack => {
                self.player_turn()?;
            }
            PlayerAction::Special => {
                self.use_special_ability()?;
            }
            PlayerAction::Flee => {
                self.attempt_escape()?;
            }
        }

        if self.is_active() {
            self.enemy_turn()?;
        }
        Ok(self.outcome)
    }

    /// Auto-resolves the battle with basic attacks, character first.
    ///
    /// Always terminates: every attack deals at least 1 damage.
    pub fn resolve(&mut self) -> Result<BattleOutcome, CombatError> {
        self.ensure_active()?;

        while self.is_active() {
            self.play_round(PlayerAction::Attack)?;
        }
        self.outcome.ok_or(CombatError::CombatNotActive)
    }

    fn ensure_active(&self) -> Result<(), CombatError> {
        match self.state {
            BattleState::Active => Ok(()),
            BattleState::Ended => Err(CombatError::CombatNotActive),
        }
    }

    fn record_attack(&mut self, attacker: Side, damage: u32) {
        let (attacker, defender) = match attacker {
            Side::Player => (self.character.name.clone(), self.enemy.name.clone()),
            Side::Enemy => (self.enemy.name.clone(), self.character.name.clone()),
        };
        self.log.push(
            self.turn,
            BattleEvent::Attack {
                attacker,
                defender,
                damage,
            },
        );
    }

    fn check_battle_end(&mut self) {
        if self.enemy.is_defeated() {
            self.finish(BattleOutcome::Victory {
                rewards: self.enemy.rewards(),
            });
        } else if self.character.is_dead() {
            self.finish(BattleOutcome::Defeat);
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.state = BattleState::Ended;
        self.outcome = Some(outcome);
        self.log.push(self.turn, BattleEvent::Ended(outcome));
    }
}

/// A character can enter a battle while they have health left.
pub fn can_fight(character: &Character) -> bool {
    character.is_alive()
}
