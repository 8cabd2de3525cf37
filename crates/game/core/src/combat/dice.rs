use crate::env::{RngOracle, RollContext, compute_seed};

/// Per-battle roll source.
///
/// Every roll derives its own seed from the battle seed and a nonce that
/// advances after each roll, so replaying a battle with the same seed and the
/// same actions produces the same results.
#[derive(Clone, Copy)]
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            nonce: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rolls made so far.
    pub fn rolls(&self) -> u64 {
        self.nonce
    }

    /// Returns true with probability `chance` percent.
    pub fn roll_percent(&mut self, context: RollContext, chance: u32) -> bool {
        let seed = compute_seed(self.seed, self.nonce, context);
        self.nonce += 1;
        self.rng.roll_percent(seed, chance)
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice")
            .field("seed", &self.seed)
            .field("nonce", &self.nonce)
            .finish()
    }
}
