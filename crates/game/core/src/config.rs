/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Percent chance (0-100) that an escape attempt succeeds.
    pub escape_chance: u32,
    /// Percent chance (0-100) that a rogue's Critical Strike triples damage.
    pub critical_chance: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of item identifiers a character can carry.
    pub const MAX_INVENTORY_SIZE: usize = 20;

    // ===== progression rules =====
    /// Experience needed per level: reaching level N+1 costs `N * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u32 = 100;
    pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
    pub const LEVEL_UP_STRENGTH: u32 = 2;
    pub const LEVEL_UP_MAGIC: u32 = 2;
    /// Gold every freshly created character starts with.
    pub const STARTING_GOLD: u32 = 100;

    // ===== combat rules =====
    /// Defender strength is divided by this before being subtracted from damage.
    pub const DEFENSE_DIVISOR: u32 = 4;
    pub const MINIMUM_DAMAGE: u32 = 1;
    /// Health restored by the cleric's Heal ability.
    pub const CLERIC_HEAL_AMOUNT: u32 = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ESCAPE_CHANCE: u32 = 50;
    pub const DEFAULT_CRITICAL_CHANCE: u32 = 50;

    pub fn new() -> Self {
        Self {
            escape_chance: Self::DEFAULT_ESCAPE_CHANCE,
            critical_chance: Self::DEFAULT_CRITICAL_CHANCE,
        }
    }

    pub fn with_escape_chance(mut self, escape_chance: u32) -> Self {
        self.escape_chance = escape_chance.min(100);
        self
    }

    pub fn with_critical_chance(mut self, critical_chance: u32) -> Self {
        self.critical_chance = critical_chance.min(100);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
