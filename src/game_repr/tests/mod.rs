use super::*;
use std::collections::BTreeSet;

// ==================== HELPER FUNCTIONS ====================

/// Board with only the two kings on their home squares, white to move.
pub fn bare_kings() -> GameState {
    let mut state = GameState::new();
    state.board = [[Piece::none(); 8]; 8];
    place_piece(&mut state, Square::new(7, 4), Piece::new(Color::White, Type::King));
    place_piece(&mut state, Square::new(0, 4), Piece::new(Color::Black, Type::King));
    state
}

/// Puts a piece on the board, keeping the king squares in sync.
pub fn place_piece(state: &mut GameState, square: Square, piece: Piece) {
    state.board[square.row][square.col] = piece;
    if piece.piece_type == Type::King {
        state.king_square[piece.color.index()] = square;
    }
}

/// Moves a king to another square on a bare-ish board.
pub fn relocate_king(state: &mut GameState, color: Color, to: Square) {
    let from = state.king_square(color);
    state.board[from.row][from.col] = Piece::none();
    place_piece(state, to, Piece::new(color, Type::King));
}

pub fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

/// Helper function to check if a move exists in the move list
pub fn has_move<'a>(moves: impl IntoIterator<Item = &'a Move>, from: Square, to: Square) -> bool {
    moves.into_iter().any(|m| m.start() == from && m.end() == to)
}

/// Finds the generated move between two squares in a legal set.
pub fn find_move(moves: &BTreeSet<Move>, from: Square, to: Square) -> Option<Move> {
    moves.iter().find(|m| m.start() == from && m.end() == to).copied()
}

/// Applies a sequence of (from, to) pairs, each of which must be legal.
pub fn play(state: &mut GameState, line: &[(Square, Square)]) {
    for &(from, to) in line {
        let legal = state.legal_moves();
        let mv = find_move(&legal, from, to)
            .unwrap_or_else(|| panic!("{}{} should be legal", from, to));
        state.apply(mv);
    }
}

/// Everything `undo` has to restore.
pub fn snapshot(state: &GameState) -> (Board, Color, Square, Square, usize) {
    (
        *state.board(),
        state.side_to_move(),
        state.king_square(Color::White),
        state.king_square(Color::Black),
        state.move_log().len(),
    )
}

// ==================== TEST MODULES ====================

mod piece_movement;
