use std::collections::BTreeSet;

use super::*;

impl GameState {
    /// All geometrically possible moves for `side`, ignoring king safety.
    ///
    /// The side is an explicit argument so that attack queries for the
    /// opponent never have to flip `side_to_move` and put it back.
    pub fn pseudo_legal_moves_for(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();

        for row in 0..8 {
            for col in 0..8 {
                let piece = self.board[row][col];
                if !piece.is(side) {
                    continue;
                }
                let from = Square::new(row, col);
                match piece.piece_type {
                    Type::Pawn => self.pawn_moves_into(from, &mut moves),
                    Type::Rook => self.rook_moves_into(from, &mut moves),
                    Type::Knight => self.knight_moves_into(from, &mut moves),
                    Type::Bishop => self.bishop_moves_into(from, &mut moves),
                    Type::Queen => self.queen_moves_into(from, &mut moves),
                    Type::King => self.king_moves_into(from, &mut moves),
                    Type::None => continue,
                }
            }
        }

        moves
    }

    /// Checks if a square is under attack by any piece of the given color
    pub fn square_attacked_by(&self, square: Square, attacker: Color) -> bool {
        self.pseudo_legal_moves_for(attacker)
            .iter()
            .any(|mv| mv.end() == square)
    }

    /// Whether the side not to move could land on `square`.
    pub fn square_under_attack(&self, square: Square) -> bool {
        self.square_attacked_by(square, self.side_to_move.opposite())
    }

    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }

    /// Recomputes the legal moves for the side to move and updates the
    /// checkmate/stalemate flags.
    ///
    /// Every candidate is applied, checked and undone again, so the state is
    /// unchanged when this returns apart from the two flags.
    pub fn legal_moves(&mut self) -> BTreeSet<Move> {
        let mover = self.side_to_move;
        let mut candidates = self.pseudo_legal_moves_for(mover);

        let in_check = self
            .pseudo_legal_moves_for(mover.opposite())
            .iter()
            .any(|mv| mv.piece_captured().piece_type == Type::King);
        if !in_check {
            self.castle_moves_into(mover, &mut candidates);
        }

        let mut legal = BTreeSet::new();
        for mv in candidates {
            self.apply(mv);
            let exposed = self.square_attacked_by(self.king_square(mover), mover.opposite());
            self.undo();

            if !exposed {
                legal.insert(mv);
            }
        }

        self.checkmate = false;
        self.stalemate = false;
        if legal.is_empty() {
            if in_check {
                log::debug!("Checkmate! {} wins", mover.opposite().name());
                self.checkmate = true;
            } else {
                log::debug!("Stalemate! It's a draw");
                self.stalemate = true;
            }
        }

        legal
    }
}
