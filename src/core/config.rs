//! Game configuration.
//!
//! The rules are parameterized rather than hardcoded: the win threshold,
//! the die size, and the gamble odds are all configuration. Defaults match
//! the classic duel: first to 20 with a d6 and a fair coin.

use serde::{Deserialize, Serialize};

/// Rule parameters for a duel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score at which the active player wins.
    pub win_threshold: u32,

    /// Number of faces on the die.
    pub die_sides: u8,

    /// Probability that a double-or-nothing gamble doubles instead of
    /// busting.
    pub gamble_odds: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 20,
            die_sides: 6,
            gamble_odds: 0.5,
        }
    }
}

impl GameConfig {
    /// Panics if the parameters describe an unplayable game.
    pub(crate) fn validate(&self) {
        assert!(self.win_threshold >= 1, "Win threshold must be at least 1");
        assert!(self.die_sides >= 2, "Die must have at least 2 sides");
        assert!(
            (0.0..=1.0).contains(&self.gamble_odds),
            "Gamble odds must be a probability"
        );
    }
}
