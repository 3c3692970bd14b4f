//! Position evaluation: material plus piece-square placement.
//!
//! The score is in centipawns, positive when White stands better.
//! Tables follow the simplified evaluation function from the chess
//! programming wiki and are written from White's point of view walking
//! a8..h1, so a white piece on square `s` reads entry `63 - s` and a
//! black piece reads the vertically flipped square.

use super::state::Position;
use super::types::{Bitboard, Piece, PieceId, Side};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Tables in bitboard piece order
const PIECE_SQUARE_TABLES: [&[i32; 64]; 6] = [
    &PAWN_TABLE,
    &ROOK_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Placement score of one army's pieces of one kind. Black pieces read
/// the table at the vertically flipped square.
fn table_score(pieces: Bitboard, table: &[i32; 64], side: Side) -> i32 {
    pieces
        .iter()
        .map(|sq| {
            let sq = match side {
                Side::White => sq,
                Side::Black => sq.flip_vertical(),
            };
            table[63 - sq.index()]
        })
        .sum()
}

impl Position {
    /// Static evaluation in centipawns, positive favoring White
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut material = 0;
        let mut placement = 0;

        for piece in Piece::ALL {
            let white = self.board(PieceId::new(Side::White, piece));
            let black = self.board(PieceId::new(Side::Black, piece));

            material += (white.popcount() as i32 - black.popcount() as i32) * piece.value();

            let table = PIECE_SQUARE_TABLES[piece.index()];
            placement += table_score(white, table, Side::White);
            placement -= table_score(black, table, Side::Black);
        }

        material + placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(Position::initial().evaluate(), 0);
    }

    #[test]
    fn test_symmetric_positions_are_balanced() {
        for fen in [
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
            "4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1",
        ] {
            assert_eq!(Position::from_fen(fen).evaluate(), 0, "fen: {fen}");
        }
    }

    #[test]
    fn test_material_advantage() {
        // white is up a knight
        let pos = Position::from_fen("4k3/8/8/8/8/2N5/8/4K3 w - - 0 1");
        let score = pos.evaluate();
        assert!(score > 300, "expected a knight's worth, got {score}");

        // black is up a queen
        let pos = Position::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(pos.evaluate() < -800);
    }

    #[test]
    fn test_central_pawn_beats_home_pawn() {
        // after 1. e4 the pawn placement gains exactly the e2 -> e4
        // table difference of 40 centipawns
        let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
        assert_eq!(pos.evaluate(), 40);
    }

    #[test]
    fn test_black_reads_tables_flipped() {
        // a lone black pawn on e5 must score the same magnitude as a
        // lone white pawn on e4
        let white = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        let black = Position::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
        assert_eq!(white.evaluate(), -black.evaluate());
    }

    #[test]
    fn test_evaluation_is_side_independent() {
        // the score reports White's standing regardless of whose turn it is
        let w = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let b = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1");
        assert_eq!(w.evaluate(), b.evaluate());
    }
}
