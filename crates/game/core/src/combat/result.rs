//! Battle outcome and event log types.

use core::fmt;

use super::AbilityOutcome;
use crate::progression::Rewards;

/// Which side of a battle something refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    /// Enemy reached 0 health. Carries the enemy's bounty verbatim.
    Victory { rewards: Rewards },
    /// Character reached 0 health. Nothing is paid out.
    Defeat,
    /// Character fled. No winner, nothing is paid out.
    Escaped,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory { .. } => Some(Side::Player),
            Self::Defeat => Some(Side::Enemy),
            Self::Escaped => None,
        }
    }

    pub fn rewards(&self) -> Rewards {
        match self {
            Self::Victory { rewards } => *rewards,
            Self::Defeat | Self::Escaped => Rewards::NONE,
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Attack {
        attacker: String,
        defender: String,
        damage: u32,
    },
    Ability(AbilityOutcome),
    EscapeFailed,
    Ended(BattleOutcome),
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack {
                attacker,
                defender,
                damage,
            } => write!(f, "{attacker} hits {defender} for {damage} damage."),
            Self::Ability(outcome) => write!(f, "{outcome}"),
            Self::EscapeFailed => f.write_str("Escape failed!"),
            Self::Ended(BattleOutcome::Victory { rewards }) => write!(
                f,
                "Victory! Gained {} XP and {} gold.",
                rewards.xp, rewards.gold
            ),
            Self::Ended(BattleOutcome::Defeat) => f.write_str("Defeat..."),
            Self::Ended(BattleOutcome::Escaped) => f.write_str("Escaped successfully!"),
        }
    }
}

/// One logged event with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub event: BattleEvent,
}

/// Ordered record of everything that happened in a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: u32, event: BattleEvent) {
        self.entries.push(LogEntry { turn, event });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&BattleEvent> {
        self.entries.last().map(|entry| &entry.event)
    }

    /// Messages in the order they happened.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.event.to_string())
    }
}
