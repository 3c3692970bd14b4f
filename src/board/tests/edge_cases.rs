//! Special positions and state bookkeeping.

use crate::board::{Castle, Move, Piece, PieceId, Position, Square};

#[test]
fn test_en_passant_window_closes_after_one_move() {
    let pos = Position::initial();
    let pos = pos.make_move(pos.parse_move("e2e4").unwrap());
    assert_eq!(pos.en_passant(), Some(Square::E3));

    // black ignores it; the target must be gone on white's next turn
    let pos = pos.make_move(pos.parse_move("g8f6").unwrap());
    assert_eq!(pos.en_passant(), None);
}

#[test]
fn test_black_double_push_sets_rank_six_target() {
    let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    let pos = pos.make_move(pos.parse_move("d7d5").unwrap());
    assert_eq!(pos.en_passant(), Some(Square::D6));
}

#[test]
fn test_single_push_sets_no_target() {
    let pos = Position::initial();
    let pos = pos.make_move(pos.parse_move("e2e3").unwrap());
    assert_eq!(pos.en_passant(), None);
}

#[test]
fn test_halfmove_clock_over_a_sequence() {
    let pos = Position::initial();
    let pos = pos.make_move(pos.parse_move("g1f3").unwrap());
    assert_eq!(pos.halfmove_clock(), 1);
    let pos = pos.make_move(pos.parse_move("b8c6").unwrap());
    assert_eq!(pos.halfmove_clock(), 2);
    // a pawn push resets
    let pos = pos.make_move(pos.parse_move("e2e4").unwrap());
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_castling_rights_survive_unrelated_moves() {
    let pos = Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    let pos = pos.make_move(pos.parse_move("a2a3").unwrap());
    assert_eq!(pos.castling_rights(), 0b1111);
}

#[test]
fn test_king_move_drops_both_rights() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let pos = pos.make_move(pos.parse_move("e1e2").unwrap());
    assert!(!pos.has_right(Castle::WhiteKingSide));
    assert!(!pos.has_right(Castle::WhiteQueenSide));
    assert!(pos.has_right(Castle::BlackKingSide));
    assert!(pos.has_right(Castle::BlackQueenSide));
}

#[test]
fn test_rights_never_come_back() {
    // the rook returns home, but the right stays gone
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let pos = pos.make_move(pos.parse_move("h1h4").unwrap());
    let pos = pos.make_move(pos.parse_move("a8a7").unwrap());
    let pos = pos.make_move(pos.parse_move("h4h1").unwrap());
    assert!(!pos.has_right(Castle::WhiteKingSide));
    assert!(pos.has_right(Castle::WhiteQueenSide));
    // and the generator does not offer the castle either
    let pos = pos.make_move(pos.parse_move("a7a8").unwrap());
    assert!(!pos
        .generate_moves()
        .contains(&Move::Castle(Castle::WhiteKingSide)));
}

#[test]
fn test_promotion_leaves_no_pawn_on_last_rank() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
    for mv in pos.generate_moves() {
        let next = pos.make_move(mv);
        assert!((next.board(PieceId::WhitePawn) & crate::board::Bitboard::RANK_8).is_empty());
    }
}

#[test]
fn test_underpromotion_places_the_right_piece() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
    let mv = pos.parse_move("a7a8n").unwrap();
    assert_eq!(mv.promotes_to(), Some(Piece::Knight));
    let next = pos.make_move(mv);
    assert_eq!(next.piece_at(Square::A8), Some(PieceId::WhiteKnight));
    assert!(next.board(PieceId::WhiteQueen).is_empty());
}

#[test]
fn test_bare_kings_still_generate_moves() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/k6K w - - 0 1");
    let moves = pos.generate_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        match *mv {
            Move::Piece { from_board, .. } => assert_eq!(from_board, PieceId::WhiteKing),
            Move::Castle(_) => panic!("castle without rooks"),
        }
    }
}

#[test]
fn test_side_not_to_move_is_never_in_check_in_play() {
    let mut pos = Position::initial();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"] {
        let mv = if text == "e1g1" {
            // short castle goes by its tag
            pos.parse_move("O-O").unwrap()
        } else {
            pos.parse_move(text).unwrap()
        };
        pos = pos.make_move(mv);
        let moved = pos.side_to_move().opponent();
        assert!(!pos.is_in_check(moved), "after {text}");
    }
    // the Italian castle landed correctly
    assert_eq!(pos.piece_at(Square::G1), Some(PieceId::WhiteKing));
    assert_eq!(pos.piece_at(Square::F1), Some(PieceId::WhiteRook));
}

#[test]
fn test_display_shows_board_and_metadata() {
    let text = Position::initial().to_string();
    assert!(text.contains("| r | n | b | q | k | b | n | r | 8"));
    assert!(text.contains("| P | P | P | P | P | P | P | P | 2"));
    assert!(text.contains("Side to move: White"));
    assert!(text.contains("Castling: KQkq"));
    assert!(text.contains("En passant target: -"));
}
