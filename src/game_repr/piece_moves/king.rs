use crate::game_repr::{Color, GameState, Move, Square, Type};

use super::MoveList;

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// (king destination column, rook corner column)
const CASTLE_SIDES: [(usize, usize); 2] = [(6, 7), (2, 0)];

impl GameState {
    /// One-square king steps. Castling is added separately by the legality
    /// filter, see `castle_moves_into`.
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KING_OFFSETS, moves);
    }

    pub fn king_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.king_moves_into(from, &mut moves);
        moves
    }

    /// Adds castling candidates for `side`. The caller must already have ruled
    /// out being in check. Squares the king passes over are not tested for
    /// attacks, only the final position goes through the legality filter.
    pub(crate) fn castle_moves_into(&self, side: Color, moves: &mut MoveList) {
        let home = match side {
            Color::White => Square::new(7, 4),
            Color::Black => Square::new(0, 4),
        };
        if !self.piece_at(home).is_kind(side, Type::King) || self.has_moved(home) {
            return;
        }

        for (king_col, rook_col) in CASTLE_SIDES {
            let rook_square = Square::new(home.row, rook_col);
            if !self.piece_at(rook_square).is_kind(side, Type::Rook) || self.has_moved(rook_square) {
                continue;
            }

            let (low, high) = (home.col.min(rook_col), home.col.max(rook_col));
            let path_clear = (low + 1..high).all(|col| self.board[home.row][col].is_none());
            if !path_clear {
                continue;
            }

            moves.push(Move::new(home, Square::new(home.row, king_col), &self.board));
        }
    }

    /// Whether any logged move ended on `square`. A piece that left and came
    /// back ends a move there; one that left for good fails the piece check.
    fn has_moved(&self, square: Square) -> bool {
        self.move_log.iter().any(|mv| mv.end() == square)
    }
}
