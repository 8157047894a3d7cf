use crate::game_repr::{GameState, Square};

use super::MoveList;

// n, s, e, w
const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

impl GameState {
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &ROOK_DIRECTIONS, moves);
    }

    pub fn rook_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.rook_moves_into(from, &mut moves);
        moves
    }
}
