//! Dice randomness: the `RollSource` seam and its implementations.
//!
//! ## RollSource
//!
//! The game needs exactly two random draws: a die face and a gamble coin.
//! Abstracting them behind a trait keeps the state machine deterministic
//! under test and replayable in production.
//!
//! ## GameRng
//!
//! Seeded ChaCha8: same seed, same duel. The word-position snapshot makes
//! state capture O(1) regardless of how many draws have happened.
//!
//! ## ScriptedRolls
//!
//! Replays a fixed sequence of faces and coin flips. Used by the
//! integration tests and by anything that wants to re-play a recorded game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of the two random draws the duel needs.
pub trait RollSource {
    /// A uniformly random die face in `1..=sides`.
    fn die(&mut self, sides: u8) -> u8;

    /// The double-or-nothing coin: `true` doubles, `false` busts.
    /// `odds` is the probability of doubling.
    fn coin(&mut self, odds: f64) -> bool;
}

/// Deterministic RNG for real play.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RollSource for GameRng {
    fn die(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }

    fn coin(&mut self, odds: f64) -> bool {
        self.inner.gen_bool(odds)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A pre-scripted roll source.
///
/// Die faces and coin flips are consumed front to back.
///
/// ## Panics
///
/// Panics if a draw is requested after its script runs dry. Scripts are
/// written by the caller, so running dry is a bug in the script, not a
/// runtime condition to recover from.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    faces: VecDeque<u8>,
    coins: VecDeque<bool>,
}

impl ScriptedRolls {
    /// Script the die faces, with no coin flips.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            coins: VecDeque::new(),
        }
    }

    /// Add scripted coin flips for double-or-nothing turns.
    #[must_use]
    pub fn with_coins(mut self, coins: impl IntoIterator<Item = bool>) -> Self {
        self.coins = coins.into_iter().collect();
        self
    }

    /// How many die faces remain unconsumed.
    #[must_use]
    pub fn remaining_faces(&self) -> usize {
        self.faces.len()
    }
}

impl RollSource for ScriptedRolls {
    fn die(&mut self, sides: u8) -> u8 {
        let face = self
            .faces
            .pop_front()
            .expect("scripted die faces exhausted");
        assert!(
            (1..=sides).contains(&face),
            "scripted face {face} outside 1..={sides}"
        );
        face
    }

    fn coin(&mut self, _odds: f64) -> bool {
        self.coins.pop_front().expect("scripted coins exhausted")
    }
}
