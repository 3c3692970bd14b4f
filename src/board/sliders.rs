//! On-the-fly sliding-piece attacks.
//!
//! Uses the hyperbola-quintessence trick: along a masked line the
//! subtraction `o - 2r` flips all bits between the slider and the first
//! blocker above it, and the same subtraction on the bit-reversed board
//! handles the squares below. The xor of the two, masked back to the
//! line, is the attacked set in both directions including the first
//! blocker of either color.

use super::masks::{anti_diagonal_line, diagonal_line, file_line, rank_line};
use super::types::{Bitboard, Square};

/// Attacked squares along one line through `sq`, stopping at and
/// including the first blocker on each side. `sq` must be set in
/// `occupied`; it is excluded from the result.
#[inline]
fn line_attacks(sq: Square, occupied: Bitboard, line: Bitboard) -> Bitboard {
    let r = 1u64 << sq.index();
    let o = occupied.0 & line.0;
    let forward = o.wrapping_sub(r.wrapping_mul(2));
    let backward = o
        .reverse_bits()
        .wrapping_sub(r.reverse_bits().wrapping_mul(2))
        .reverse_bits();
    Bitboard((forward ^ backward) & line.0)
}

/// Rook attacks from `sq`: the rank and file lines
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(sq, occupied, rank_line(sq)) | line_attacks(sq, occupied, file_line(sq))
}

/// Bishop attacks from `sq`: the diagonal and anti-diagonal lines
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(sq, occupied, diagonal_line(sq))
        | line_attacks(sq, occupied, anti_diagonal_line(sq))
}

/// Queen attacks from `sq`: union of rook and bishop attacks
#[inline]
pub(crate) fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}
