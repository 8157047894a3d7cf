//! Turn loop and game coordination.
//!
//! The [`Orchestrator`] owns the [`GameState`], the legal set for the side to
//! move and one [`Player`] per color. Each [`step`](Orchestrator::step) asks
//! the player on move what it wants to do and carries that out.
//!
//! # Game Flow
//!
//! ```text
//! [Request action] -> [Play / TakeBack / Reset / Quit]
//!   Play -> [Look the candidate up in the legal set]
//!        -> not a member: Rejected, same player asked again
//!        -> member: apply, recompute legal set and terminal flags
//!   -> [Check end] -> [Request action] ...
//! ```
//!
//! The legal set is recomputed after every change to the position, so the
//! checkmate and stalemate flags always describe the current position.
//!
//! Once the game is over a human player is still asked, so a mated person
//! can take back or start over. Moves are rejected at that point.

use std::collections::BTreeSet;

use crate::agent::player::{Action, GameResult, Player};
use crate::game_repr::{Color, GameState, Move};

/// What happened during one [`Orchestrator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was legal and has been played
    Moved(Move),
    /// The candidate was not in the legal set; nothing changed
    Rejected(Move),
    TakeBack,
    Reset,
    Quit,
    /// The game was already over and no human was there to ask
    GameOver(GameResult),
}

pub struct Orchestrator {
    state: GameState,

    /// Legal moves of the side to move in `state`
    legal: BTreeSet<Move>,

    /// (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Result of the game if it has ended
    result: Option<GameResult>,

    /// Stop `run` after this many plies
    max_plies: Option<u32>,
}

impl Orchestrator {
    /// Starts a game from the initial position.
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        let mut orchestrator = Self {
            state: GameState::new(),
            legal: BTreeSet::new(),
            players: (white, black),
            result: None,
            max_plies: None,
        };
        orchestrator.refresh();
        log::debug!(
            "Game started: {} vs {}",
            orchestrator.players.0.name(),
            orchestrator.players.1.name()
        );
        orchestrator
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn legal_moves(&self) -> &BTreeSet<Move> {
        &self.legal
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::White => self.players.0.as_ref(),
            Color::Black => self.players.1.as_ref(),
        }
    }

    /// Asks the player on move for an action and carries it out.
    ///
    /// After the game has ended only a human is asked: the one on move if
    /// there is one, otherwise the other.
    pub fn step(&mut self) -> TurnOutcome {
        let asked = match self.result {
            None => self.state.side_to_move(),
            Some(result) => match self.human_after_game_over() {
                Some(color) => color,
                None => return TurnOutcome::GameOver(result),
            },
        };

        let over = self.result.is_some();
        let player = match asked {
            Color::White => &mut self.players.0,
            Color::Black => &mut self.players.1,
        };

        match player.get_move(&self.state, &self.legal) {
            Some(Action::Play(mv)) if over => {
                log::warn!("Rejected move {}: the game is over", mv);
                TurnOutcome::Rejected(mv)
            }
            Some(Action::Play(mv)) => self.play(mv),
            Some(Action::TakeBack) => {
                self.take_back();
                TurnOutcome::TakeBack
            }
            Some(Action::Reset) => {
                self.reset();
                TurnOutcome::Reset
            }
            Some(Action::Quit) | None => {
                log::info!("{} left the game", player.name());
                TurnOutcome::Quit
            }
        }
    }

    /// Plays `candidate` if it is in the legal set.
    ///
    /// Only the start and end squares of the candidate matter; the move that
    /// gets applied is the one the legal set holds.
    pub fn play(&mut self, candidate: Move) -> TurnOutcome {
        let Some(&mv) = self.legal.get(&candidate) else {
            log::warn!("Rejected move {}: not legal in this position", candidate);
            return TurnOutcome::Rejected(candidate);
        };

        self.state.apply(mv);
        log::debug!("{} played {}", self.state.side_to_move().opposite().name(), mv);
        self.refresh();

        if let Some(result) = self.result {
            log::info!("{}", result.message());
            self.players.0.game_ended(result);
            self.players.1.game_ended(result);
        }
        TurnOutcome::Moved(mv)
    }

    /// Undoes the last ply. If that leaves a computer on move, its previous
    /// move is undone as well so that a person is on move again.
    pub fn take_back(&mut self) {
        if self.state.move_log().is_empty() {
            log::warn!("No moves to take back");
            return;
        }

        self.state.undo();
        if !self.player(self.state.side_to_move()).is_human() && !self.state.move_log().is_empty() {
            self.state.undo();
        }
        self.refresh();
    }

    /// Starts over from the initial position with the same players.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.refresh();
        log::info!("Game reset");
    }

    /// Whether either seat is taken by a person.
    pub fn has_human(&self) -> bool {
        self.players.0.is_human() || self.players.1.is_human()
    }

    fn human_after_game_over(&self) -> Option<Color> {
        let on_move = self.state.side_to_move();
        [on_move, on_move.opposite()]
            .into_iter()
            .find(|&color| self.player(color).is_human())
    }

    /// Steps until a player quits or the ply limit is reached. The end of the
    /// game only stops it when no human is seated; a person may still take
    /// back or reset. Returns the result standing when it stopped.
    pub fn run(&mut self) -> Option<GameResult> {
        self.run_with(|_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_turn` after every step.
    pub fn run_with<F>(&mut self, mut on_turn: F) -> Option<GameResult>
    where
        F: FnMut(&Orchestrator, TurnOutcome),
    {
        loop {
            match self.result {
                Some(result) if !self.has_human() => return Some(result),
                None if self.ply_limit_reached() => {
                    log::info!("Stopping after {} plies", self.state.move_log().len());
                    return None;
                }
                _ => {}
            }

            let outcome = self.step();
            on_turn(self, outcome);
            if outcome == TurnOutcome::Quit {
                return self.result;
            }
        }
    }

    fn ply_limit_reached(&self) -> bool {
        self.max_plies
            .map_or(false, |limit| self.state.move_log().len() >= limit as usize)
    }

    /// Recomputes the legal set, and with it the terminal flags and result.
    fn refresh(&mut self) {
        self.legal = self.state.legal_moves();
        self.result = if self.state.checkmate() {
            Some(GameResult::from_winner(self.state.side_to_move().opposite()))
        } else if self.state.stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        };
    }
}
