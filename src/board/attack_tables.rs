//! Precomputed step tables for knights and kings.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square};

fn step_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (sq, entry) in table.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let c = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, dc) in deltas {
            let nr = r + dr;
            let nc = c + dc;
            if (0..8).contains(&nr) && (0..8).contains(&nc) {
                mask |= 1u64 << (nr * 8 + nc);
            }
        }
        *entry = Bitboard(mask);
    }
    table
}

pub(crate) static KNIGHT_STEPS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    step_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_STEPS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    step_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

#[inline]
pub(crate) fn knight_steps(sq: Square) -> Bitboard {
    KNIGHT_STEPS[sq.index()]
}

#[inline]
pub(crate) fn king_steps(sq: Square) -> Bitboard {
    KING_STEPS[sq.index()]
}
