use crate::game_repr::{GameState, Square};

use super::MoveList;

// ne, nw, se, sw
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

impl GameState {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &BISHOP_DIRECTIONS, moves);
    }

    pub fn bishop_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.bishop_moves_into(from, &mut moves);
        moves
    }
}
