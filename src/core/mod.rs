//! Core engine types: players, rolls, actions, RNG, configuration.
//!
//! Everything here is presentation-agnostic. The `game` module builds the
//! phase machine on top of these types.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod roll;

pub use action::{Action, TurnRecord};
pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState, RollSource, ScriptedRolls};
pub use roll::Roll;
