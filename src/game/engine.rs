//! The duel engine.
//!
//! `DiceDuel` owns both players, the current phase, the roll source, and
//! the turn transcript. It accepts the three requests from the frontend
//! (`roll`, `double or nothing`, `reset`) and narrates every transition to
//! the injected [`GameView`].
//!
//! ## Tie-break
//!
//! A reset runs the whole tie-break synchronously: both players roll until
//! the rolls differ, the higher roller starts. The view is notified of each
//! re-roll and may pause between them for pacing, but no other request can
//! interleave: by the time `request_reset` returns, the duel is already in
//! the starter's turn.

use thiserror::Error;

use crate::core::{
    Action, GameConfig, GameRng, Player, PlayerId, PlayerPair, RollSource, TurnRecord,
};
use crate::view::GameView;

use super::phase::Phase;

/// A request that the current phase does not permit.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{action:?} is not legal in {phase:?}")]
    IllegalAction { action: Action, phase: Phase },
}

/// Builder for a [`DiceDuel`].
///
/// ## Example
///
/// ```
/// use dice_duel::{DiceDuelBuilder, NullView, Phase};
///
/// let mut duel = DiceDuelBuilder::new().win_threshold(30).build(42);
/// duel.request_reset(&mut NullView);
/// assert!(matches!(duel.phase(), Phase::Turn(_)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiceDuelBuilder {
    config: GameConfig,
}

impl DiceDuelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score needed to win. Default 20.
    #[must_use]
    pub fn win_threshold(mut self, threshold: u32) -> Self {
        self.config.win_threshold = threshold;
        self
    }

    /// Faces on the die. Default 6.
    #[must_use]
    pub fn die_sides(mut self, sides: u8) -> Self {
        self.config.die_sides = sides;
        self
    }

    /// Probability that a gamble doubles instead of busting. Default 0.5.
    #[must_use]
    pub fn gamble_odds(mut self, odds: f64) -> Self {
        self.config.gamble_odds = odds;
        self
    }

    /// Build with the default seeded RNG.
    #[must_use]
    pub fn build(self, seed: u64) -> DiceDuel {
        self.build_with_rolls(Box::new(GameRng::new(seed)))
    }

    /// Build with an injected roll source (scripted tests, replays).
    #[must_use]
    pub fn build_with_rolls(self, rolls: Box<dyn RollSource>) -> DiceDuel {
        self.config.validate();
        DiceDuel {
            config: self.config,
            phase: Phase::AwaitingFirstRoll,
            players: PlayerPair::new(|_| Player::new()),
            rolls,
            history: Vec::new(),
            next_turn: 1,
        }
    }
}

/// The two-player duel state machine.
pub struct DiceDuel {
    config: GameConfig,
    phase: Phase,
    players: PlayerPair<Player>,
    rolls: Box<dyn RollSource>,
    history: Vec<TurnRecord>,
    next_turn: u32,
}

impl DiceDuel {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, if the duel has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.phase.winner()
    }

    /// Read a player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The rule parameters this duel was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every scoring turn since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The requests the current phase accepts.
    ///
    /// Frontends should offer exactly these; anything else would be
    /// rejected by the request methods anyway.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::Turn(_) => vec![Action::Roll, Action::DoubleOrNothing, Action::Reset],
            Phase::AwaitingFirstRoll | Phase::GameOver(_) => vec![Action::Reset],
        }
    }

    /// Roll the die for the active player.
    pub fn request_roll(&mut self, view: &mut dyn GameView) -> Result<(), GameError> {
        self.take_turn(Action::Roll, view)
    }

    /// Gamble the active player's roll: double it or score nothing.
    pub fn request_double_or_nothing(&mut self, view: &mut dyn GameView) -> Result<(), GameError> {
        self.take_turn(Action::DoubleOrNothing, view)
    }

    fn take_turn(&mut self, action: Action, view: &mut dyn GameView) -> Result<(), GameError> {
        let Phase::Turn(active) = self.phase else {
            return Err(GameError::IllegalAction {
                action,
                phase: self.phase,
            });
        };

        let gamble = action == Action::DoubleOrNothing;
        let roll = self.players[active].roll_for_turn(self.rolls.as_mut(), &self.config, gamble);
        let score = self.players[active].score();

        self.history.push(TurnRecord {
            turn: self.next_turn,
            player: active,
            action,
            roll,
            score_after: score,
        });
        self.next_turn += 1;

        log::debug!("{active} rolled {roll:?}, score {score}");
        view.render(active, Some(roll), score);

        if score >= self.config.win_threshold {
            self.phase = Phase::GameOver(active);
            view.set_active(None);
            view.set_message(&format!("{active} wins!"));
            log::info!("{active} wins with {score}");
        } else {
            let next = active.opponent();
            self.phase = Phase::Turn(next);
            view.set_active(Some(next));
            view.set_message(&format!("{next}'s turn"));
        }

        Ok(())
    }

    /// Restart the duel from any phase.
    ///
    /// Clears both players, runs the tie-break to completion, and leaves
    /// the duel in the starter's turn. Total: never fails.
    pub fn request_reset(&mut self, view: &mut dyn GameView) {
        for id in PlayerId::both() {
            self.players[id].reset();
        }
        self.history.clear();
        self.next_turn = 1;
        self.phase = Phase::AwaitingFirstRoll;

        view.reset();
        view.set_active(None);
        view.set_message("Player with the higher roll goes first");

        let starter = self.run_tie_break(view);

        view.set_active(Some(starter));
        view.set_message(&format!("{starter} goes first"));
        view.pacing_pause();

        // The tie-break rolls are display-only; clear them before play.
        for id in PlayerId::both() {
            self.players[id].clear_roll();
            view.render(id, None, self.players[id].score());
        }

        self.phase = Phase::Turn(starter);
        view.set_message(&format!("{starter}'s turn"));
        log::info!("{starter} goes first");
    }

    /// Both players roll until the rolls differ; returns the higher roller.
    fn run_tie_break(&mut self, view: &mut dyn GameView) -> PlayerId {
        loop {
            let one = self.players[PlayerId::One].roll_die(self.rolls.as_mut(), self.config.die_sides);
            let two = self.players[PlayerId::Two].roll_die(self.rolls.as_mut(), self.config.die_sides);

            for id in PlayerId::both() {
                view.render(id, self.players[id].last_roll(), self.players[id].score());
            }

            if one != two {
                return if one > two { PlayerId::One } else { PlayerId::Two };
            }

            log::debug!("tie-break: both rolled {one}, rolling again");
            view.set_message("Equal rolls! Both players roll again");
            view.pacing_pause();
        }
    }
}

impl std::fmt::Debug for DiceDuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceDuel")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
