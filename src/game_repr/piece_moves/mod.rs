mod pawn;
mod knight;
mod bishop;
mod rook;
mod queen;
mod king;

use smallvec::SmallVec;

use super::{GameState, Move, Square};

/// Buffer for pseudo-legal moves; spills to the heap only for crowded positions.
pub type MoveList = SmallVec<[Move; 64]>;

impl GameState {
    /// A destination is usable if it is not the origin and does not hold a
    /// piece of the mover's own color. Opposing kings are fair game here; the
    /// legality filter never lets it come to that.
    pub(crate) fn is_valid_target(&self, from: Square, to: Square) -> bool {
        let mover = self.piece_at(from);
        let target = self.piece_at(to);
        from != to && (target.is_none() || target.color != mover.color)
    }

    /// Steps along each direction until the edge, adding empty squares and the
    /// first opposing piece met.
    pub(crate) fn slide_moves_into(&self, from: Square, directions: &[(isize, isize)], moves: &mut MoveList) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                if !self.is_valid_target(from, to) {
                    break;
                }
                moves.push(Move::new(from, to, &self.board));
                if !self.piece_at(to).is_none() {
                    break;
                }
                current = to;
            }
        }
    }

    /// Adds every fixed-offset hop that lands on a usable square.
    pub(crate) fn step_moves_into(&self, from: Square, offsets: &[(isize, isize)], moves: &mut MoveList) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.is_valid_target(from, to) {
                    moves.push(Move::new(from, to, &self.board));
                }
            }
        }
    }
}
