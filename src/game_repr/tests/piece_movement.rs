use super::*;

// ==================== PIECE MOVEMENT TESTS ====================

#[test]
fn test_knight_in_center_has_eight_moves() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(4, 4), Piece::new(Color::White, Type::Knight));

    assert_eq!(state.knight_moves(sq(4, 4)).len(), 8);
}

#[test]
fn test_knight_in_corner() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(7, 7), Piece::new(Color::White, Type::Knight));

    let moves = state.knight_moves(sq(7, 7));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, sq(7, 7), sq(5, 6)));
    assert!(has_move(&moves, sq(7, 7), sq(6, 5)));
}

#[test]
fn test_knights_jump_over_the_starting_pawns() {
    let state = GameState::new();
    let moves = state.knight_moves(sq(7, 1));

    assert_eq!(moves.len(), 2, "Own pawn on d2 blocks the third hop");
    assert!(has_move(&moves, sq(7, 1), sq(5, 0)));
    assert!(has_move(&moves, sq(7, 1), sq(5, 2)));
}

#[test]
fn test_rook_on_open_board() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(4, 0), Piece::new(Color::White, Type::Rook));

    assert_eq!(state.rook_moves(sq(4, 0)).len(), 14);
}

#[test]
fn test_rook_ray_stops_at_blockers() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(4, 0), Piece::new(Color::White, Type::Rook));
    place_piece(&mut state, sq(4, 3), Piece::new(Color::White, Type::Pawn));
    place_piece(&mut state, sq(2, 0), Piece::new(Color::Black, Type::Pawn));

    let moves = state.rook_moves(sq(4, 0));
    assert_eq!(moves.len(), 7);
    assert!(has_move(&moves, sq(4, 0), sq(2, 0)), "Should capture the first enemy piece");
    assert!(!has_move(&moves, sq(4, 0), sq(1, 0)), "Ray ends at the captured piece");
    assert!(!has_move(&moves, sq(4, 0), sq(4, 3)), "Cannot capture own pawn");
    assert!(has_move(&moves, sq(4, 0), sq(4, 2)));
}

#[test]
fn test_bishop_diagonals() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(4, 3), Piece::new(Color::White, Type::Bishop));

    let moves = state.bishop_moves(sq(4, 3));
    assert_eq!(moves.len(), 13);
    assert!(has_move(&moves, sq(4, 3), sq(0, 7)));
    assert!(has_move(&moves, sq(4, 3), sq(7, 0)));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let mut state = bare_kings();
    place_piece(&mut state, sq(4, 3), Piece::new(Color::White, Type::Queen));

    assert_eq!(state.queen_moves(sq(4, 3)).len(), 27);
}

#[test]
fn test_pieces_boxed_in_at_start() {
    let state = GameState::new();

    assert!(state.rook_moves(sq(7, 0)).is_empty());
    assert!(state.bishop_moves(sq(7, 2)).is_empty());
    assert!(state.queen_moves(sq(7, 3)).is_empty());
    assert!(state.king_moves(sq(7, 4)).is_empty());
}

#[test]
fn test_king_steps_on_back_rank() {
    let state = bare_kings();
    let moves = state.king_moves(sq(7, 4));

    assert_eq!(moves.len(), 5);
    assert!(!has_move(&moves, sq(7, 4), sq(7, 6)), "Castling is not a plain king step");
}

#[test]
fn test_pseudo_legal_moves_only_for_requested_side() {
    let state = GameState::new();

    let white = state.pseudo_legal_moves_for(Color::White);
    let black = state.pseudo_legal_moves_for(Color::Black);
    assert_eq!(white.len(), 20);
    assert_eq!(black.len(), 20);
    assert!(white.iter().all(|m| m.piece_moved().color == Color::White));
    assert!(black.iter().all(|m| m.piece_moved().color == Color::Black));
}

#[test]
fn test_initial_position_has_twenty_legal_moves() {
    let mut state = GameState::new();
    let moves = state.legal_moves();

    assert_eq!(moves.len(), 20);
    assert!(!state.checkmate());
    assert!(!state.stalemate());
}
