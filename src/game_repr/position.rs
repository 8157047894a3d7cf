use std::fmt;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// 8x8 grid indexed `[row][col]`, row 0 being black's back rank.
pub type Board = [[Piece; 8]; 8];

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index`, updated by every king move and its undo
    pub(crate) king_square: [Square; 2],
    pub(crate) move_log: Vec<Move>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> GameState {
        let mut board = [[Piece::none(); 8]; 8];
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board[0][col] = Piece::new(Color::Black, piece_type);
            board[1][col] = Piece::new(Color::Black, Type::Pawn);
            board[6][col] = Piece::new(Color::White, Type::Pawn);
            board[7][col] = Piece::new(Color::White, piece_type);
        }

        Self {
            board,
            side_to_move: Color::White,
            king_square: [Square::new(7, 4), Square::new(0, 4)],
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square.row][square.col]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Set by `legal_moves` when the side to move has no moves and is in check.
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by `legal_moves` when the side to move has no moves and is not in check.
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    fn set(&mut self, square: Square, piece: Piece) {
        self.board[square.row][square.col] = piece;
    }

    /// Turns two clicked squares into a candidate move. The result still has to
    /// be looked up in the legal move set before it is applied.
    pub fn move_between(&self, start: Square, end: Square) -> Move {
        let en_passant = self.piece_at(start).piece_type == Type::Pawn
            && self.piece_at(end).is_none()
            && start.col.abs_diff(end.col) == 1;

        if en_passant {
            Move::en_passant(start, end, &self.board)
        } else {
            Move::new(start, end, &self.board)
        }
    }

    pub fn apply(&mut self, mv: Move) {
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();

        let (start, end) = (mv.start(), mv.end());
        let moving_piece = mv.piece_moved();

        if mv.is_en_passant() {
            self.set(start, Piece::none());
            self.set(Square::new(start.row, end.col), Piece::none());
            self.set(end, moving_piece);
            return;
        }

        self.set(start, Piece::none());
        if mv.is_pawn_promotion() {
            self.set(end, Piece::new(moving_piece.color, Type::Queen));
        } else {
            self.set(end, moving_piece);
        }

        if moving_piece.piece_type == Type::King {
            self.king_square[moving_piece.color.index()] = end;

            if let Some((rook_from, rook_to)) = mv.castle_rook_squares() {
                let rook = self.piece_at(rook_from);
                self.set(rook_from, Piece::none());
                self.set(rook_to, rook);
            }
        }
    }

    /// Reverses the most recent `apply`. Both terminal flags are cleared since
    /// the position has changed.
    pub fn undo(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            log::warn!("No moves to undo");
            return;
        };

        self.side_to_move = self.side_to_move.opposite();
        self.checkmate = false;
        self.stalemate = false;

        let (start, end) = (mv.start(), mv.end());
        let moving_piece = mv.piece_moved();

        if mv.is_en_passant() {
            self.set(start, moving_piece);
            self.set(end, Piece::none());
            self.set(Square::new(start.row, end.col), mv.piece_captured());
            return;
        }

        // The logged piece is the pawn itself, so this also undoes promotion.
        self.set(start, moving_piece);
        self.set(end, mv.piece_captured());

        if moving_piece.piece_type == Type::King {
            self.king_square[moving_piece.color.index()] = start;

            if let Some((rook_from, rook_to)) = mv.castle_rook_squares() {
                self.set(rook_to, Piece::none());
                self.set(rook_from, Piece::new(moving_piece.color, Type::Rook));
            }
        }
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply(mv);
            nodes += self.perft(depth - 1);
            self.undo();
        }
        nodes
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for piece in cells {
                write!(f, " {}", piece.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
