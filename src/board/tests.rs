use super::*;

#[test]
fn starting_position_has_twenty_moves_for_each_side() {
    let board = Board::new();
    assert_eq!(board.generate_moves(Color::White).len(), 20);
    assert_eq!(board.generate_moves(Color::Black).len(), 20);
}

#[test]
fn pawn_double_push_blocked_by_occupied_intermediate_square() {
    let mut board = Board::empty();
    board.set_piece(6, 4, Some(Piece::new(PieceType::Pawn, Color::White)));
    board.set_piece(5, 4, Some(Piece::new(PieceType::Pawn, Color::Black)));
    board.set_piece(7, 4, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(0, 4, Some(Piece::new(PieceType::King, Color::Black)));

    let moves = board.generate_moves(Color::White);
    assert!(!moves.iter().any(|m| m.from == Square::new(6, 4)));
}

#[test]
fn en_passant_capture_is_generated_and_removes_captured_pawn() {
    let mut board = Board::empty();
    board.set_piece(3, 4, Some(Piece::new(PieceType::Pawn, Color::White)));
    board.set_piece(3, 3, Some(Piece::new(PieceType::Pawn, Color::Black)));
    board.set_piece(7, 4, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(0, 4, Some(Piece::new(PieceType::King, Color::Black)));
    board.set_en_passant_target(Some(Square::new(2, 3)));

    let ep_move = Move::new(Square::new(3, 4), Square::new(2, 3));
    assert!(board.generate_moves(Color::White).contains(&ep_move));

    board.make_move(ep_move);
    assert!(board.piece_at(3, 3).is_none());
    assert!(board.piece_at(2, 3).is_some());
}

#[test]
fn kingside_castle_moves_both_king_and_rook() {
    let mut board = Board::empty();
    board.set_piece(7, 4, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(7, 7, Some(Piece::new(PieceType::Rook, Color::White)));
    board.set_piece(0, 4, Some(Piece::new(PieceType::King, Color::Black)));
    board.set_castling_rights(CastlingRights::all());

    let castle = Move::new(Square::new(7, 4), Square::new(7, 6));
    assert!(board.generate_moves(Color::White).contains(&castle));

    board.make_move(castle);
    assert_eq!(
        board.piece_at(7, 6).map(|p| p.kind),
        Some(PieceType::King)
    );
    assert_eq!(
        board.piece_at(7, 5).map(|p| p.kind),
        Some(PieceType::Rook)
    );
    assert!(board.piece_at(7, 7).is_none());
}

#[test]
fn queenside_castle_moves_both_king_and_rook() {
    let mut board = Board::empty();
    board.set_piece(7, 4, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(7, 0, Some(Piece::new(PieceType::Rook, Color::White)));
    board.set_piece(0, 4, Some(Piece::new(PieceType::King, Color::Black)));
    board.set_castling_rights(CastlingRights::all());

    let castle = Move::new(Square::new(7, 4), Square::new(7, 2));
    assert!(board.generate_moves(Color::White).contains(&castle));

    board.make_move(castle);
    assert_eq!(
        board.piece_at(7, 2).map(|p| p.kind),
        Some(PieceType::King)
    );
    assert_eq!(
        board.piece_at(7, 3).map(|p| p.kind),
        Some(PieceType::Rook)
    );
    assert!(board.piece_at(7, 0).is_none());
}

#[test]
fn castling_blocked_through_check_is_not_generated() {
    let mut board = Board::empty();
    board.set_piece(7, 4, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(7, 7, Some(Piece::new(PieceType::Rook, Color::White)));
    board.set_piece(0, 4, Some(Piece::new(PieceType::King, Color::Black)));
    board.set_piece(0, 5, Some(Piece::new(PieceType::Rook, Color::Black)));
    board.set_castling_rights(CastlingRights::all());

    let castle = Move::new(Square::new(7, 4), Square::new(7, 6));
    assert!(!board.generate_moves(Color::White).contains(&castle));
}

#[test]
fn fools_mate_leaves_white_checkmated() {
    let mut board = Board::new();
    let moves = [
        ((6, 5), (5, 5)), // f3
        ((1, 4), (3, 4)), // e5
        ((6, 6), (4, 6)), // g4
        ((0, 3), (4, 7)), // Qh4#
    ];
    for ((fr, fc), (tr, tc)) in moves {
        let mv = Move::new(Square::new(fr, fc), Square::new(tr, tc));
        assert!(board.make_move(mv), "move should be playable: {mv:?}");
    }
    assert!(board.is_checkmate(Color::White));
}

#[test]
fn king_with_no_moves_and_no_check_is_stalemate() {
    let mut board = Board::empty();
    board.set_piece(0, 0, Some(Piece::new(PieceType::King, Color::Black)));
    board.set_piece(2, 1, Some(Piece::new(PieceType::King, Color::White)));
    board.set_piece(1, 2, Some(Piece::new(PieceType::Queen, Color::White)));
    board.side_to_move = Color::Black;

    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn halfmove_clock_resets_on_pawn_move_and_capture_only() {
    let mut board = Board::new();
    board.make_move(Move::new(Square::new(6, 4), Square::new(4, 4)));
    assert_eq!(board.halfmove_clock, 0);
    board.make_move(Move::new(Square::new(1, 1), Square::new(2, 1)));
    assert_eq!(board.halfmove_clock, 0);

    board.make_move(Move::new(Square::new(7, 1), Square::new(5, 2)));
    assert_eq!(board.halfmove_clock, 1);
}

#[test]
fn copy_is_independent_of_original() {
    let board = Board::new();
    let mut copy = board.copy();
    copy.make_move(Move::new(Square::new(6, 4), Square::new(4, 4)));
    assert_ne!(board, copy);
}
