//! One-ply move selection.
//!
//! The [`Evaluator`] looks exactly one move ahead: every legal candidate is
//! played on a private copy of the position, scored, and taken back. There is
//! no recursion into the opponent's reply.
//!
//! # Scoring
//!
//! - a move that checkmates scores [`CHECKMATE`]
//! - a move that stalemates scores [`STALEMATE`]
//! - anything else scores the mover's material minus the opponent's
//!
//! The highest score wins. Candidates are visited in the legal set's order
//! and a later move only replaces the current best when it scores strictly
//! higher, so the choice is reproducible.
//!
//! # Parallel scoring
//!
//! With [`Evaluator::with_threads`] the candidates are scored on a rayon pool.
//! Apply/undo mutate the position in place, so every worker gets its own
//! clone of the [`GameState`]. Scores are collected back in set order before
//! the best one is picked, which keeps the result identical to the
//! sequential path.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::evaluation::material_balance;
use crate::error::Result;
use crate::game_repr::{GameState, Move};

pub const CHECKMATE: i32 = 100;
pub const STALEMATE: i32 = 0;

/// How the computer picks among the legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Best material after one ply, mates first
    Greedy,
    /// Uniformly random legal move
    Random,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Random => "random",
        }
    }
}

pub struct Evaluator {
    strategy: Strategy,
    rng: StdRng,
    /// Only present when more than one worker was requested
    pool: Option<ThreadPool>,
}

impl Evaluator {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
            pool: None,
        }
    }

    pub fn greedy() -> Self {
        Self::new(Strategy::Greedy)
    }

    pub fn random() -> Self {
        Self::new(Strategy::Random)
    }

    /// Fixes the random source, for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Scores candidates on `threads` workers. One thread (or zero) keeps
    /// scoring on the calling thread.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        self.pool = if threads > 1 {
            Some(ThreadPoolBuilder::new().num_threads(threads).build()?)
        } else {
            None
        };
        Ok(self)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |pool| pool.current_num_threads())
    }

    /// Picks a move from `legal`, which must be the legal set of `state`.
    /// `None` only when the set is empty.
    pub fn find_move(&mut self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Move> {
        let chosen = match self.strategy {
            Strategy::Random => legal.iter().choose(&mut self.rng).copied(),
            Strategy::Greedy => self.best_move(state, legal),
        };

        if let Some(mv) = chosen {
            log::debug!("{} evaluator picked {}", self.strategy.name(), mv);
        }
        chosen
    }

    fn best_move(&self, state: &GameState, legal: &BTreeSet<Move>) -> Option<Move> {
        let scores: Vec<i32> = match &self.pool {
            Some(pool) => {
                let candidates: Vec<Move> = legal.iter().copied().collect();
                pool.install(|| {
                    candidates
                        .par_iter()
                        .map_init(|| state.clone(), |scratch, &mv| score_move(scratch, mv))
                        .collect()
                })
            }
            None => {
                let mut scratch = state.clone();
                legal.iter().map(|&mv| score_move(&mut scratch, mv)).collect()
            }
        };

        let mut best: Option<(Move, i32)> = None;
        for (&mv, score) in legal.iter().zip(scores) {
            log::trace!("{} scores {}", mv, score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

/// Plays `mv`, scores the result for the side that moved and takes it back.
///
/// The opponent's legal moves are generated after the move so the terminal
/// flags describe the position the move leads to.
pub fn score_move(state: &mut GameState, mv: Move) -> i32 {
    let mover = state.side_to_move();
    state.apply(mv);
    state.legal_moves();

    let score = if state.checkmate() {
        CHECKMATE
    } else if state.stalemate() {
        STALEMATE
    } else {
        material_balance(state.board(), mover)
    };

    state.undo();
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Color, Piece, Square, Type};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    fn play(state: &mut GameState, line: &[(Square, Square)]) {
        for &(from, to) in line {
            let legal = state.legal_moves();
            let mv = legal
                .iter()
                .find(|m| m.start() == from && m.end() == to)
                .copied()
                .unwrap_or_else(|| panic!("{}{} should be legal", from, to));
            state.apply(mv);
        }
    }

    fn empty_board_with_kings(white_king: Square, black_king: Square) -> GameState {
        let mut state = GameState::new();
        state.board = [[Piece::none(); 8]; 8];
        state.board[white_king.row][white_king.col] = Piece::new(Color::White, Type::King);
        state.board[black_king.row][black_king.col] = Piece::new(Color::Black, Type::King);
        state.king_square = [white_king, black_king];
        state
    }

    /// Black to move with Qd8-h4 mating (fool's mate one ply early).
    fn fools_mate_setup() -> GameState {
        let mut state = GameState::new();
        play(
            &mut state,
            &[(sq(6, 5), sq(5, 5)), (sq(1, 4), sq(3, 4)), (sq(6, 6), sq(4, 6))],
        );
        state
    }

    // ==================== SCORING TESTS ====================

    #[test]
    fn test_score_move_leaves_state_untouched() {
        let mut state = fools_mate_setup();
        let board = *state.board();
        let legal = state.legal_moves();

        for &mv in &legal {
            score_move(&mut state, mv);
            assert_eq!(*state.board(), board);
            assert_eq!(state.side_to_move(), Color::Black);
            assert!(!state.checkmate() && !state.stalemate());
        }
    }

    #[test]
    fn test_mating_move_scores_checkmate() {
        let mut state = fools_mate_setup();
        let legal = state.legal_moves();
        let mate = legal
            .iter()
            .find(|m| m.start() == sq(0, 3) && m.end() == sq(4, 7))
            .copied()
            .expect("Qh4 is legal");

        assert_eq!(score_move(&mut state, mate), CHECKMATE);
    }

    #[test]
    fn test_capture_scores_material() {
        let mut state = GameState::new();
        play(&mut state, &[(sq(6, 4), sq(4, 4)), (sq(1, 3), sq(3, 3))]);
        let legal = state.legal_moves();
        let capture = legal
            .iter()
            .find(|m| m.start() == sq(4, 4) && m.end() == sq(3, 3))
            .copied()
            .expect("exd5 is legal");

        assert_eq!(score_move(&mut state, capture), 1);
    }

    // ==================== GREEDY TESTS ====================

    #[test]
    fn test_greedy_picks_immediate_mate() {
        let mut state = fools_mate_setup();
        let legal = state.legal_moves();

        let chosen = Evaluator::greedy().find_move(&state, &legal);
        let chosen = chosen.expect("black has moves");
        assert_eq!((chosen.start(), chosen.end()), (sq(0, 3), sq(4, 7)));
    }

    #[test]
    fn test_greedy_prefers_mate_over_material() {
        // Ra1-a8 mates behind the pawns; Ng1xh3 wins a rook.
        let mut state = empty_board_with_kings(sq(7, 4), sq(0, 6));
        for col in 5..8 {
            state.board[1][col] = Piece::new(Color::Black, Type::Pawn);
        }
        state.board[7][0] = Piece::new(Color::White, Type::Rook);
        state.board[7][6] = Piece::new(Color::White, Type::Knight);
        state.board[5][7] = Piece::new(Color::Black, Type::Rook);

        let legal = state.legal_moves();
        let chosen = Evaluator::greedy().find_move(&state, &legal).expect("white has moves");
        assert_eq!((chosen.start(), chosen.end()), (sq(7, 0), sq(0, 0)));
    }

    #[test]
    fn test_greedy_takes_free_material() {
        let mut state = GameState::new();
        play(&mut state, &[(sq(6, 4), sq(4, 4)), (sq(1, 3), sq(3, 3))]);
        let legal = state.legal_moves();

        let chosen = Evaluator::greedy().find_move(&state, &legal).expect("white has moves");
        assert_eq!((chosen.start(), chosen.end()), (sq(4, 4), sq(3, 3)));
    }

    #[test]
    fn test_greedy_avoids_stalemate_when_ahead() {
        // Qg5-g6 would stalemate the cornered king.
        let mut state = empty_board_with_kings(sq(7, 4), sq(0, 7));
        state.board[3][6] = Piece::new(Color::White, Type::Queen);

        let legal = state.legal_moves();
        let chosen = Evaluator::greedy().find_move(&state, &legal).expect("white has moves");
        assert_ne!((chosen.start(), chosen.end()), (sq(3, 6), sq(2, 6)));

        state.apply(chosen);
        state.legal_moves();
        assert!(!state.stalemate());
    }

    #[test]
    fn test_greedy_ties_keep_first_move() {
        // Nothing can be won from the start, so the first move in set order wins.
        let mut state = GameState::new();
        let legal = state.legal_moves();

        let chosen = Evaluator::greedy().find_move(&state, &legal);
        assert_eq!(chosen, legal.iter().next().copied());
        assert_eq!(chosen.map(|m| m.notation()), Some("a2a4".to_string()));
    }

    #[test]
    fn test_empty_set_gives_no_move() {
        let state = GameState::new();
        let legal = BTreeSet::new();
        assert_eq!(Evaluator::greedy().find_move(&state, &legal), None);
        assert_eq!(Evaluator::random().find_move(&state, &legal), None);
    }

    #[test]
    fn test_parallel_scoring_matches_sequential() {
        let positions = [
            fools_mate_setup(),
            GameState::new(),
            {
                let mut state = GameState::new();
                play(&mut state, &[(sq(6, 4), sq(4, 4)), (sq(1, 3), sq(3, 3))]);
                state
            },
        ];

        let mut sequential = Evaluator::greedy();
        let mut parallel = Evaluator::greedy().with_threads(4).expect("pool builds");
        assert_eq!(parallel.threads(), 4);

        for mut state in positions {
            let legal = state.legal_moves();
            assert_eq!(
                parallel.find_move(&state, &legal),
                sequential.find_move(&state, &legal)
            );
        }
    }

    // ==================== RANDOM TESTS ====================

    #[test]
    fn test_random_picks_a_legal_move() {
        let mut state = GameState::new();
        let legal = state.legal_moves();
        let mut evaluator = Evaluator::random().with_seed(7);

        for _ in 0..20 {
            let mv = evaluator.find_move(&state, &legal).expect("moves available");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let mut state = GameState::new();
        let legal = state.legal_moves();

        let mut first = Evaluator::random().with_seed(42);
        let mut second = Evaluator::random().with_seed(42);
        for _ in 0..10 {
            assert_eq!(first.find_move(&state, &legal), second.find_move(&state, &legal));
        }
    }
}
