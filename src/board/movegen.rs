//! Strictly legal move generation.
//!
//! The generator never emits a move that leaves the mover's own king
//! attacked, so callers apply moves without re-validating. It is
//! organized by check status:
//!
//! 1. King evasions, filtered against the danger set.
//! 2. More than one checker: only the king may move, stop.
//! 3. En passant, validated by performing the capture on a scratch copy
//!    and re-testing the king (the capture removes two pawns from one
//!    rank, which no pin test covers).
//! 4. Pin detection: a piece alone on the ray between the king and an
//!    enemy slider may move only along that ray. Its moves are recorded
//!    separately and the piece leaves the working bitboards.
//! 5. Exactly one checker: non-pinned pieces may capture it, or block
//!    the ray if the checker slides.
//! 6. No check: pseudo-legal moves of the non-pinned pieces, the pin
//!    moves, and castling over an empty, safe path.
//!
//! Everything above is written for White; Black generation flips the
//! position, runs the White path and reflects the resulting moves.

use super::attack_tables::{king_steps, knight_steps};
use super::masks::{
    ray_between, same_anti_diagonal, same_diagonal, same_file, same_rank, Direction,
};
use super::sliders::{bishop_attacks, queen_attacks, rook_attacks};
use super::state::Position;
use super::types::{Bitboard, Castle, Move, PieceId, Side, Square, PROMOTION_PIECES};

/// Push a white pawn move, expanding to the four promotions when the
/// destination is on the last rank
fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square) {
    if to.rank() == 7 {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promotion(Side::White, from, to, promo));
        }
    } else {
        moves.push(Move::piece(PieceId::WhitePawn, from, to));
    }
}

/// Moves of a pinned rook, bishop or queen: every square of the pin ray
/// except its own, plus the capture of the pinner
fn slider_pin_moves(
    moves: &mut Vec<Move>,
    board: PieceId,
    pinned: Square,
    king: Square,
    pinner: Square,
    dir: Direction,
) {
    let min = king.index().min(pinner.index());
    let max = king.index().max(pinner.index());
    let mut i = min + dir.step();
    while i < max {
        if i != pinned.index() {
            moves.push(Move::piece(board, pinned, Square::from_index(i)));
        }
        i += dir.step();
    }
    moves.push(Move::piece(board, pinned, pinner));
}

/// Pushes of a pawn pinned along its file. Captures are impossible and a
/// pawn pinned along a rank cannot move at all.
fn pawn_file_pin_moves(moves: &mut Vec<Move>, pinned: Square, empty: Bitboard) {
    let pawn = Bitboard::from_square(pinned);
    let mut targets = (pawn << 8) & empty;
    targets |= (pawn << 16) & empty & (empty << 8) & Bitboard::RANK_4;
    for to in targets.iter() {
        moves.push(Move::piece(PieceId::WhitePawn, pinned, to));
    }
}

/// A pawn pinned along a diagonal may only capture the pinner itself,
/// promoting if the pinner stands on the last rank
fn pawn_diagonal_pin_moves(moves: &mut Vec<Move>, pinned: Square, pinner: Square, dir: Direction) {
    if pinned.index() + dir.step() == pinner.index() {
        push_pawn_move(moves, pinned, pinner);
    }
}

impl Position {
    /// Generate every strictly legal move for the side to move.
    ///
    /// An empty result means the game is over: checkmate if the side to
    /// move is in check, stalemate otherwise.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        match self.side_to_move {
            Side::White => self.generate_white_moves(),
            Side::Black => self
                .flipped()
                .generate_white_moves()
                .into_iter()
                .map(Move::reflected)
                .collect(),
        }
    }

    fn generate_white_moves(&self) -> Vec<Move> {
        let king_sq = self.king_square(Side::White);
        let whites = self.whites();
        let blacks = self.blacks();
        let occ = whites | blacks;
        let empty = !occ;

        // Working copies: pinned pieces are removed from these so the
        // later stages only see freely movable pieces.
        let mut wp = self.board(PieceId::WhitePawn);
        let mut wr = self.board(PieceId::WhiteRook);
        let mut wn = self.board(PieceId::WhiteKnight);
        let mut wb = self.board(PieceId::WhiteBishop);
        let mut wq = self.board(PieceId::WhiteQueen);

        let mut moves = Vec::with_capacity(48);

        // King evasions. The danger set was computed with the king
        // removed from occupancy, so stepping along a checking ray away
        // from the checker is already excluded.
        let danger = self.white_king_danger();
        for to in (king_steps(king_sq) & !whites & !danger).iter() {
            moves.push(Move::piece(PieceId::WhiteKing, king_sq, to));
        }

        // In double check only the king moves; with a bare king there is
        // nothing else to generate either.
        let (attackers, has_slider) = self.white_king_attackers();
        if attackers.popcount() > 1 || (wp | wr | wn | wb | wq).is_empty() {
            return moves;
        }

        // En passant, validated by trial: perform the capture on a copy
        // and keep it only if the king is not attacked afterwards. This
        // also catches the horizontal pin across the fifth rank that the
        // ray-based pin scan below cannot see (two pawns leave the rank
        // at once).
        if let Some(ep) = self.en_passant {
            if ep.rank() == 5 {
                let ep_bb = Bitboard::from_square(ep);
                let mut candidates = (ep_bb >> 9) & wp & !Bitboard::FILE_A;
                candidates |= (ep_bb >> 7) & wp & !Bitboard::FILE_H;
                let captured = Square::from_index(ep.index() - 8);
                for from in candidates.iter() {
                    let mut trial = *self;
                    trial.boards[PieceId::WhitePawn.index()] =
                        trial.boards[PieceId::WhitePawn.index()].without(from).with(ep);
                    trial.boards[PieceId::BlackPawn.index()] =
                        trial.boards[PieceId::BlackPawn.index()].without(captured);
                    if !trial.is_in_check(Side::White) {
                        moves.push(Move::piece(PieceId::WhitePawn, from, ep));
                    }
                }
            }
        }

        // Pin detection. An enemy slider aligned with the king pins the
        // single white piece standing between them (no other piece of
        // either color on the ray). Pin moves are held back until the
        // no-check branch; in check a pinned piece never helps.
        let mut pin_moves: Vec<Move> = Vec::new();

        for pinner in (self.board(PieceId::BlackRook) | self.board(PieceId::BlackQueen)).iter() {
            let dir = if same_rank(king_sq, pinner) {
                Direction::Rank
            } else if same_file(king_sq, pinner) {
                Direction::File
            } else {
                continue;
            };
            let ray = ray_between(king_sq, pinner, dir);
            if (ray & blacks).is_empty() && (ray & whites).popcount() == 1 {
                let pinned = (ray & whites).first();
                if wr.contains(pinned) {
                    slider_pin_moves(&mut pin_moves, PieceId::WhiteRook, pinned, king_sq, pinner, dir);
                } else if wq.contains(pinned) {
                    slider_pin_moves(&mut pin_moves, PieceId::WhiteQueen, pinned, king_sq, pinner, dir);
                }
                if dir == Direction::File && wp.contains(pinned) {
                    pawn_file_pin_moves(&mut pin_moves, pinned, empty);
                }
                wp = wp.without(pinned);
                wr = wr.without(pinned);
                wn = wn.without(pinned);
                wb = wb.without(pinned);
                wq = wq.without(pinned);
            }
        }

        for pinner in (self.board(PieceId::BlackBishop) | self.board(PieceId::BlackQueen)).iter() {
            let dir = if same_diagonal(king_sq, pinner) {
                Direction::Diagonal
            } else if same_anti_diagonal(king_sq, pinner) {
                Direction::AntiDiagonal
            } else {
                continue;
            };
            let ray = ray_between(king_sq, pinner, dir);
            if (ray & blacks).is_empty() && (ray & whites).popcount() == 1 {
                let pinned = (ray & whites).first();
                if wb.contains(pinned) {
                    slider_pin_moves(&mut pin_moves, PieceId::WhiteBishop, pinned, king_sq, pinner, dir);
                } else if wq.contains(pinned) {
                    slider_pin_moves(&mut pin_moves, PieceId::WhiteQueen, pinned, king_sq, pinner, dir);
                } else if wp.contains(pinned) {
                    pawn_diagonal_pin_moves(&mut pin_moves, pinned, pinner, dir);
                }
                wp = wp.without(pinned);
                wr = wr.without(pinned);
                wn = wn.without(pinned);
                wb = wb.without(pinned);
                wq = wq.without(pinned);
            }
        }

        // Single check: capture the checker or block its ray.
        if attackers.popcount() == 1 {
            let checker = attackers.first();

            let mut pawn_caps = (attackers >> 7) & !Bitboard::FILE_H & wp;
            pawn_caps |= (attackers >> 9) & !Bitboard::FILE_A & wp;
            for from in pawn_caps.iter() {
                push_pawn_move(&mut moves, from, checker);
            }
            for from in (rook_attacks(checker, occ) & wr).iter() {
                moves.push(Move::piece(PieceId::WhiteRook, from, checker));
            }
            for from in (knight_steps(checker) & wn).iter() {
                moves.push(Move::piece(PieceId::WhiteKnight, from, checker));
            }
            for from in (bishop_attacks(checker, occ) & wb).iter() {
                moves.push(Move::piece(PieceId::WhiteBishop, from, checker));
            }
            for from in (queen_attacks(checker, occ) & wq).iter() {
                moves.push(Move::piece(PieceId::WhiteQueen, from, checker));
            }

            // Blocking is only possible against a slider, on the squares
            // strictly between it and the king.
            if has_slider {
                if let Some(dir) = Direction::aligning(checker, king_sq) {
                    let min = checker.index().min(king_sq.index());
                    let max = checker.index().max(king_sq.index());
                    let mut i = min + dir.step();
                    while i < max {
                        let target = Square::from_index(i);
                        let target_bb = Bitboard::from_square(target);

                        let mut pawn_blocks = (target_bb >> 8) & wp;
                        pawn_blocks |= (target_bb >> 16) & (empty >> 8) & wp & Bitboard::RANK_2;
                        for from in pawn_blocks.iter() {
                            push_pawn_move(&mut moves, from, target);
                        }
                        for from in (rook_attacks(target, occ) & wr).iter() {
                            moves.push(Move::piece(PieceId::WhiteRook, from, target));
                        }
                        for from in (knight_steps(target) & wn).iter() {
                            moves.push(Move::piece(PieceId::WhiteKnight, from, target));
                        }
                        for from in (bishop_attacks(target, occ) & wb).iter() {
                            moves.push(Move::piece(PieceId::WhiteBishop, from, target));
                        }
                        for from in (queen_attacks(target, occ) & wq).iter() {
                            moves.push(Move::piece(PieceId::WhiteQueen, from, target));
                        }

                        i += dir.step();
                    }
                }
            }

            return moves;
        }

        // No check: pseudo-legal moves of the free pieces.
        for to in ((wp << 8) & empty).iter() {
            push_pawn_move(&mut moves, Square::from_index(to.index() - 8), to);
        }
        for to in ((wp << 16) & empty & (empty << 8) & Bitboard::RANK_4).iter() {
            moves.push(Move::piece(
                PieceId::WhitePawn,
                Square::from_index(to.index() - 16),
                to,
            ));
        }
        for to in ((wp << 7) & blacks & !Bitboard::FILE_A).iter() {
            push_pawn_move(&mut moves, Square::from_index(to.index() - 7), to);
        }
        for to in ((wp << 9) & blacks & !Bitboard::FILE_H).iter() {
            push_pawn_move(&mut moves, Square::from_index(to.index() - 9), to);
        }

        for from in wr.iter() {
            for to in (rook_attacks(from, occ) & !whites).iter() {
                moves.push(Move::piece(PieceId::WhiteRook, from, to));
            }
        }
        for from in wn.iter() {
            for to in (knight_steps(from) & !whites).iter() {
                moves.push(Move::piece(PieceId::WhiteKnight, from, to));
            }
        }
        for from in wb.iter() {
            for to in (bishop_attacks(from, occ) & !whites).iter() {
                moves.push(Move::piece(PieceId::WhiteBishop, from, to));
            }
        }
        for from in wq.iter() {
            for to in (queen_attacks(from, occ) & !whites).iter() {
                moves.push(Move::piece(PieceId::WhiteQueen, from, to));
            }
        }

        moves.append(&mut pin_moves);

        // Castling: the squares between king and rook must be empty and
        // the king's own square plus the two it crosses must be safe.
        // The b-file square only needs to be empty for the queen-side
        // rook to pass, not safe.
        if self.has_right(Castle::WhiteKingSide)
            && (empty.0 & 0x6) == 0x6
            && (danger.0 & 0xE) == 0
        {
            moves.push(Move::Castle(Castle::WhiteKingSide));
        }
        if self.has_right(Castle::WhiteQueenSide)
            && (empty.0 & 0x70) == 0x70
            && (danger.0 & 0x38) == 0
        {
            moves.push(Move::Castle(Castle::WhiteQueenSide));
        }

        moves
    }

    /// The side to move has no legal moves and is in check
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// The side to move has no legal moves but is not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }
}
