use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Color, Piece, Type};
use super::position::Board;
use super::square::Square;

/*-------IDENTITY--------*/

// A move is identified by its start and end squares only. The pieces and the
// en passant flag are read off the board when the move is built and only
// matter when the move is applied or reversed.

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Piece,
    en_passant: bool,
}

impl Move {
    /// Builds an ordinary move from a snapshot of `board`.
    pub fn new(start: Square, end: Square, board: &Board) -> Move {
        Self {
            start,
            end,
            piece_moved: board[start.row][start.col],
            piece_captured: board[end.row][end.col],
            en_passant: false,
        }
    }

    /// Builds an en passant capture. The captured pawn sits beside the mover,
    /// on the start row and the end column.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Move {
        Self {
            start,
            end,
            piece_moved: board[start.row][start.col],
            piece_captured: board[start.row][end.col],
            en_passant: true,
        }
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn end(&self) -> Square {
        self.end
    }

    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Piece {
        self.piece_captured
    }

    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_none()
    }

    pub fn is_pawn_promotion(&self) -> bool {
        (self.piece_moved.is_kind(Color::White, Type::Pawn) && self.end.row == 0)
            || (self.piece_moved.is_kind(Color::Black, Type::Pawn) && self.end.row == 7)
    }

    /// A king stepping two columns sideways, which drags a rook along.
    pub fn is_castle(&self) -> bool {
        self.piece_moved.piece_type == Type::King && self.start.col.abs_diff(self.end.col) == 2
    }

    /// Rook start and end squares for a castling move.
    pub(crate) fn castle_rook_squares(&self) -> Option<(Square, Square)> {
        if !self.is_castle() {
            return None;
        }
        let row = self.start.row;
        if self.end.col == 6 {
            Some((Square::new(row, 7), Square::new(row, 5)))
        } else {
            Some((Square::new(row, 0), Square::new(row, 3)))
        }
    }

    /// Rank/file text such as `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.start.notation(), self.end.notation())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
