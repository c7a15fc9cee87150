//! The presentation seam.
//!
//! The state machine never draws anything; it narrates the game to a
//! [`GameView`] injected into each request. A frontend implements the trait
//! with whatever technology it likes. Two stock implementations ship here:
//! [`NullView`] for headless runs and [`RecordingView`] for asserting the
//! notification protocol in tests.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roll};

/// What a frontend must be able to display.
///
/// Calls arrive in presentation order; the view holds no game logic and
/// never feeds anything back into the state machine.
pub trait GameView {
    /// Display a player's current roll (None = no roll to show) and score.
    fn render(&mut self, player: PlayerId, roll: Option<Roll>, score: u32);

    /// Highlight whose turn it is; `None` clears both highlights.
    fn set_active(&mut self, player: Option<PlayerId>);

    /// Show a status line: tie notice, turn announcement, win announcement.
    fn set_message(&mut self, text: &str);

    /// Clear all visual state back to initial.
    fn reset(&mut self);

    /// A purely cosmetic pause between tie-break display updates.
    ///
    /// The state machine finishes the whole tie-break synchronously, so a
    /// view that sleeps here cannot race against new requests. The default
    /// does nothing.
    fn pacing_pause(&mut self) {}
}

/// A view that ignores everything. For simulations and tests that only
/// care about the final state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl GameView for NullView {
    fn render(&mut self, _player: PlayerId, _roll: Option<Roll>, _score: u32) {}
    fn set_active(&mut self, _player: Option<PlayerId>) {}
    fn set_message(&mut self, _text: &str) {}
    fn reset(&mut self) {}
}

/// One observed view call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    Render {
        player: PlayerId,
        roll: Option<Roll>,
        score: u32,
    },
    Active(Option<PlayerId>),
    Message(String),
    Reset,
    Pause,
}

/// A view that records every call, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    /// Everything observed so far.
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ViewEvent::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.messages().last()
    }

    /// Number of pacing pauses observed.
    #[must_use]
    pub fn pause_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Pause))
            .count()
    }
}

impl GameView for RecordingView {
    fn render(&mut self, player: PlayerId, roll: Option<Roll>, score: u32) {
        self.events.push(ViewEvent::Render {
            player,
            roll,
            score,
        });
    }

    fn set_active(&mut self, player: Option<PlayerId>) {
        self.events.push(ViewEvent::Active(player));
    }

    fn set_message(&mut self, text: &str) {
        self.events.push(ViewEvent::Message(text.to_string()));
    }

    fn reset(&mut self) {
        self.events.push(ViewEvent::Reset);
    }

    fn pacing_pause(&mut self) {
        self.events.push(ViewEvent::Pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_view_order() {
        let mut view = RecordingView::new();
        view.reset();
        view.set_message("hello");
        view.render(PlayerId::One, Some(Roll::Die(3)), 3);
        view.pacing_pause();
        view.set_message("goodbye");

        assert_eq!(view.events.len(), 5);
        assert_eq!(view.events[0], ViewEvent::Reset);
        assert_eq!(view.last_message(), Some("goodbye"));
        assert_eq!(view.pause_count(), 1);
    }

    #[test]
    fn test_null_view_accepts_everything() {
        let mut view = NullView;
        view.reset();
        view.set_active(Some(PlayerId::Two));
        view.set_message("ignored");
        view.render(PlayerId::Two, None, 0);
        view.pacing_pause();
    }
}
