use std::fmt;

use crate::error::{ChessError, Result};

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is white's
/// back rank (rank 1); column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The square `(dr, dc)` away, or `None` when that falls off the board.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn notation(self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        format!("{}{}", file, rank)
    }

    /// Parses a square name such as `e2`.
    pub fn from_notation(text: &str) -> Result<Square> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        Ok(Square::new((b'8' - rank) as usize, (file - b'a') as usize))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// Splits move text like `e2e4` into its start and end squares.
pub fn parse_move_text(text: &str) -> Result<(Square, Square)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidMoveText(text.to_string()));
    }
    let start = Square::from_notation(&text[..2])
        .map_err(|_| ChessError::InvalidMoveText(text.to_string()))?;
    let end = Square::from_notation(&text[2..])
        .map_err(|_| ChessError::InvalidMoveText(text.to_string()))?;
    Ok((start, end))
}
