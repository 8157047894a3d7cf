// Static position scoring
// Returns plain material (positive = good for `perspective`)

use crate::game_repr::{Board, Color};

/// Sum of piece values for one side.
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| piece.is(color))
        .map(|piece| piece.piece_type.value())
        .sum()
}

/// Material of `perspective` minus the opponent's.
pub fn material_balance(board: &Board, perspective: Color) -> i32 {
    material(board, perspective) - material(board, perspective.opposite())
}
