use crate::game_repr::{Color, GameState, Move, Square, Type};

use super::MoveList;

impl GameState {
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let pawn = self.piece_at(from);
        // (forward row step, starting row)
        let (forward, start_row) = match pawn.color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        // pushes
        if let Some(one) = from.offset(forward, 0) {
            if self.piece_at(one).is_none() {
                moves.push(Move::new(from, one, &self.board));

                if from.row == start_row {
                    if let Some(two) = from.offset(2 * forward, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(from, two, &self.board));
                        }
                    }
                }
            }
        }

        // captures
        for dc in [-1, 1] {
            if let Some(to) = from.offset(forward, dc) {
                if self.piece_at(to).is(pawn.color.opposite()) {
                    moves.push(Move::new(from, to, &self.board));
                }
            }
        }

        // en passant: only right after the opposing pawn's double step lands beside us
        let Some(last) = self.last_move() else {
            return;
        };
        let last_piece = last.piece_moved();
        let double_step = last_piece.is_kind(pawn.color.opposite(), Type::Pawn)
            && last.start().row.abs_diff(last.end().row) == 2;
        let beside = last.end().row == from.row && last.end().col.abs_diff(from.col) == 1;

        if double_step && beside {
            let dc = last.end().col as isize - from.col as isize;
            if let Some(to) = from.offset(forward, dc) {
                moves.push(Move::en_passant(from, to, &self.board));
            }
        }
    }

    pub fn pawn_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.pawn_moves_into(from, &mut moves);
        moves
    }
}
