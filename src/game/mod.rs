//! The duel state machine: phases, transitions, and the engine that owns
//! both players.

pub mod engine;
pub mod phase;

pub use engine::{DiceDuel, DiceDuelBuilder, GameError};
pub use phase::Phase;
