//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Castle, Piece, PieceId, Side};
use super::square::Square;

/// A legal chess move as produced by the generator.
///
/// A piece move names the bitboard the piece leaves and the bitboard it
/// lands on; promotions are the moves whose destination board differs from
/// the source board (pawn in, promoted piece out). Castling carries only
/// its tag, the king and rook squares are fixed per side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Piece {
        from_board: PieceId,
        from: Square,
        to_board: PieceId,
        to: Square,
    },
    Castle(Castle),
}

impl Move {
    /// A plain move of one piece between two squares
    #[inline]
    #[must_use]
    pub const fn piece(board: PieceId, from: Square, to: Square) -> Self {
        Move::Piece {
            from_board: board,
            from,
            to_board: board,
            to,
        }
    }

    /// A pawn move onto the promotion rank, replacing the pawn with `promo`
    #[inline]
    #[must_use]
    pub const fn promotion(side: Side, from: Square, to: Square, promo: Piece) -> Self {
        Move::Piece {
            from_board: PieceId::new(side, Piece::Pawn),
            from,
            to_board: PieceId::new(side, promo),
            to,
        }
    }

    /// Returns true if this move promotes a pawn
    #[inline]
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.promotes_to().is_some()
    }

    /// The piece kind a pawn promotes to, if any
    #[must_use]
    pub fn promotes_to(self) -> Option<Piece> {
        match self {
            Move::Piece {
                from_board,
                to_board,
                ..
            } if from_board.piece() == Piece::Pawn && to_board != from_board => {
                Some(to_board.piece())
            }
            _ => None,
        }
    }

    /// Map this move through the board's vertical-flip symmetry: squares
    /// flip vertically, each bitboard swaps with its other-army twin and
    /// castles swap color.
    #[must_use]
    pub fn reflected(self) -> Self {
        match self {
            Move::Piece {
                from_board,
                from,
                to_board,
                to,
            } => Move::Piece {
                from_board: from_board.mirrored(),
                from: from.flip_vertical(),
                to_board: to_board.mirrored(),
                to: to.flip_vertical(),
            },
            Move::Castle(castle) => Move::Castle(castle.mirrored()),
        }
    }
}

impl fmt::Display for Move {
    /// Long algebraic form: `e2e4`, `a7a8q` for promotions, and
    /// `O-O`/`O-O-O` (lowercased for Black) for castling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Piece { from, to, .. } => {
                write!(f, "{from}{to}")?;
                if let Some(promo) = self.promotes_to() {
                    write!(f, "{}", promo.to_char())?;
                }
                Ok(())
            }
            Move::Castle(castle) => write!(f, "{}", castle.notation()),
        }
    }
}
