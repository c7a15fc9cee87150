//! Roll outcomes.
//!
//! A turn roll is either a plain die roll, or a double-or-nothing gamble
//! that doubled the die or busted it to zero. "No roll yet" is represented
//! as `Option<Roll>::None` by the types that carry a roll.

use serde::{Deserialize, Serialize};

/// The outcome of a single turn roll.
///
/// ## Value domains
///
/// - `Die(v)`: v in `1..=sides` (6 by default)
/// - `Doubled(v)`: v in `{2, 4, ..., 2 * sides}`, always even
/// - `Busted`: the gamble was lost; worth zero points
///
/// `Doubled` is a `u16` so that doubling the largest configurable die face
/// cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Roll {
    /// A plain die roll.
    Die(u8),
    /// A won double-or-nothing gamble; carries the doubled value.
    Doubled(u16),
    /// A lost double-or-nothing gamble.
    Busted,
}

impl Roll {
    /// Points this roll adds to the roller's score.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Roll::Die(v) => v as u32,
            Roll::Doubled(v) => v as u32,
            Roll::Busted => 0,
        }
    }

    /// Whether this roll came from a double-or-nothing gamble.
    #[must_use]
    pub const fn is_gamble(self) -> bool {
        matches!(self, Roll::Doubled(_) | Roll::Busted)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
