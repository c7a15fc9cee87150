//! Player requests and the turn history they produce.
//!
//! The duel accepts exactly three requests: roll, double-or-nothing, and
//! reset. Every scoring turn is recorded as a `TurnRecord`, giving a full
//! transcript of the game since the last reset.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::roll::Roll;

/// A user-triggerable request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die for the active player.
    Roll,
    /// Gamble: double the roll or score nothing.
    DoubleOrNothing,
    /// Restart the game, tie-break included.
    Reset,
}

/// One completed scoring turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number since the last reset (starts at 1).
    pub turn: u32,

    /// Who rolled.
    pub player: PlayerId,

    /// The request that produced this turn.
    pub action: Action,

    /// What came up.
    pub roll: Roll,

    /// The roller's score after the roll was applied.
    pub score_after: u32,
}
