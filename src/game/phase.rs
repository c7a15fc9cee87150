//! Game phases.
//!
//! The duel moves through three regions: waiting for the tie-break,
//! alternating turns, and game over. Turn alternation is encoded in the
//! `Turn` payload rather than a separate flag, so an impossible state
//! ("game over but still someone's turn") cannot be represented.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where the duel currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game running; a reset request starts the tie-break.
    AwaitingFirstRoll,
    /// The named player may roll or gamble.
    Turn(PlayerId),
    /// The named player reached the threshold. Turn-taking has stopped.
    GameOver(PlayerId),
}

impl Phase {
    /// Whose turn it is, if the duel is mid-game.
    #[must_use]
    pub const fn active_player(self) -> Option<PlayerId> {
        match self {
            Phase::Turn(player) => Some(player),
            _ => None,
        }
    }

    /// The winner, if the duel has ended.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Phase::GameOver(player) => Some(player),
            _ => None,
        }
    }

    /// Whether the duel has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}
