//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can answer "what do you do now?" for the side to
//! move: a person typing at a console or a computer picking with an
//! [`Evaluator`](crate::agent::ai::Evaluator). The [`Orchestrator`] asks the
//! player whose turn it is and checks the answer against the legal set.
//!
//! The trait focuses on behavior rather than construction. Each
//! implementation has its own constructor tailored to what it needs.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks. A console player waits for a line of input and a
//! computer player runs its evaluation before returning. The orchestrator
//! simply calls it and waits.
//!
//! [`Orchestrator`]: crate::orchestrator::Orchestrator

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::game_repr::{Color, GameState, Move};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Player to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// End-of-game text shown to the players.
    pub fn message(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "White wins by checkmate",
            GameResult::BlackWins => "Black wins by checkmate",
            GameResult::Stalemate => "Stalemate",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a player wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A candidate move; it only counts if it is in the legal set
    Play(Move),
    /// Take back the last move (and the computer's reply before it)
    TakeBack,
    /// Start over from the initial position
    Reset,
    Quit,
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented. The other methods have defaults
/// that can be overridden as needed.
pub trait Player {
    /// Request the next action from this player.
    ///
    /// `legal` is the legal set for `state`, already computed by the caller.
    /// Returning `None` means the player has nothing to offer (no moves, or its
    /// input is gone) and is treated like [`Action::Quit`].
    fn get_move(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Action>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }

    /// Whether a person is behind this player. Take-backs use it to decide how
    /// far to rewind so that a person is on move again.
    fn is_human(&self) -> bool {
        false
    }
}

/// One color played by a player that is shared with the other color, such as
/// a single console driving both sides of a two-person game.
pub struct Seat<P> {
    player: Rc<RefCell<P>>,
    name: String,
}

impl<P: Player> Seat<P> {
    /// Splits one player into a white seat and a black seat.
    pub fn pair(player: P) -> (Seat<P>, Seat<P>) {
        let name = player.name().to_string();
        let player = Rc::new(RefCell::new(player));
        (
            Seat {
                player: player.clone(),
                name: format!("{} ({})", name, Color::White.name()),
            },
            Seat {
                player,
                name: format!("{} ({})", name, Color::Black.name()),
            },
        )
    }
}

impl<P: Player> Player for Seat<P> {
    fn get_move(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Action> {
        self.player.borrow_mut().get_move(state, legal)
    }

    fn game_ended(&mut self, result: GameResult) {
        self.player.borrow_mut().game_ended(result);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        self.player.borrow().is_human()
    }
}
