//! Player identity and per-player turn state.
//!
//! ## PlayerId
//!
//! The duel is strictly two-player, so identity is a two-variant enum
//! rather than a numeric index; `opponent()` gives the turn flip for free.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Score plus the most recent roll. The score only ever changes by adding
//! the value of the roll just made, or by being reset to zero.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::GameConfig;
use super::rng::RollSource;
use super::roll::Roll;

/// One of the two duelists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Both player IDs, in seat order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::One, PlayerId::Two].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player storage with O(1) access.
///
/// ## Example
///
/// ```
/// use dice_duel::core::{PlayerId, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::with_value(0);
/// wins[PlayerId::One] += 1;
/// assert_eq!(wins[PlayerId::One], 1);
/// assert_eq!(wins[PlayerId::Two], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().map(|id| (id, self.get(id)))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A duelist's accumulated state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    score: u32,
    last_roll: Option<Roll>,
}

impl Player {
    /// A fresh player: score 0, no roll yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The most recent roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Roll the die without scoring. Used by the tie-break.
    pub fn roll_die(&mut self, source: &mut dyn RollSource, sides: u8) -> u8 {
        let face = source.die(sides);
        self.last_roll = Some(Roll::Die(face));
        face
    }

    /// Take a turn roll and add it to the score.
    ///
    /// A plain turn keeps the die face. A gamble turn flips the coin:
    /// heads doubles the face, tails busts it to zero. Either way the
    /// resulting value is added to the score.
    pub fn roll_for_turn(
        &mut self,
        source: &mut dyn RollSource,
        config: &GameConfig,
        gamble: bool,
    ) -> Roll {
        let face = source.die(config.die_sides);
        let roll = if gamble {
            if source.coin(config.gamble_odds) {
                Roll::Doubled(u16::from(face) * 2)
            } else {
                Roll::Busted
            }
        } else {
            Roll::Die(face)
        };

        self.last_roll = Some(roll);
        self.score += roll.value();
        roll
    }

    /// Forget the displayed roll without touching the score.
    ///
    /// The tie-break rolls are cleared before the first real turn.
    pub fn clear_roll(&mut self) {
        self.last_roll = None;
    }

    /// Back to score 0, no roll.
    pub fn reset(&mut self) {
        self.score = 0;
        self.last_roll = None;
    }
}
