// Computer player backed by the one-ply evaluator

use std::collections::BTreeSet;

use super::evaluator::{Evaluator, Strategy};
use crate::agent::player::{Action, GameResult, Player};
use crate::game_repr::{GameState, Move};

/// AI Player that lets an [`Evaluator`] pick its moves
pub struct AIPlayer {
    evaluator: Evaluator,
    /// Display name for this AI
    name: String,
}

impl AIPlayer {
    pub fn new(evaluator: Evaluator, name: String) -> Self {
        Self { evaluator, name }
    }

    /// Create an AI player for `strategy`, scoring on the calling thread.
    pub fn with_strategy(strategy: Strategy) -> Self {
        let name = format!("AI ({})", strategy.name());
        Self::new(Evaluator::new(strategy), name)
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl Player for AIPlayer {
    /// Blocks while the evaluator scores every legal move.
    fn get_move(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Action> {
        self.evaluator.find_move(state, legal).map(Action::Play)
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
