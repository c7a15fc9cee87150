//! # dice-duel
//!
//! A two-player "double or nothing" dice duel engine.
//!
//! Each player rolls a die and accumulates score; on any turn the active
//! player may instead gamble on a double-or-nothing roll that either doubles
//! the rolled value or zeroes it. First to the win threshold (default 20)
//! wins. Who goes first is decided by a tie-break: both players roll until
//! the rolls differ.
//!
//! ## Design Principles
//!
//! 1. **Headless core**: the state machine owns all game state and knows
//!    nothing about any particular display technology. Presentation is a
//!    [`GameView`] injected per request.
//!
//! 2. **Deterministic**: all randomness flows through a [`RollSource`].
//!    The default [`GameRng`] is seeded ChaCha8, so the same seed replays
//!    the same duel; [`ScriptedRolls`] replays a fixed outcome sequence.
//!
//! 3. **Structural legality**: requests that make no sense in the current
//!    phase (rolling before the tie-break, rolling after game over) are
//!    rejected with a typed error, and [`DiceDuel::legal_actions`] lets a
//!    frontend offer only what the phase permits.
//!
//! ## Modules
//!
//! - `core`: players, rolls, actions, RNG, configuration
//! - `game`: the phase/turn state machine
//! - `view`: the presentation seam and stock implementations

pub mod core;
pub mod game;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, GameConfig, GameRng, GameRngState, Player, PlayerId, PlayerPair, Roll, RollSource,
    ScriptedRolls, TurnRecord,
};

pub use crate::game::{DiceDuel, DiceDuelBuilder, GameError, Phase};

pub use crate::view::{GameView, NullView, RecordingView, ViewEvent};
