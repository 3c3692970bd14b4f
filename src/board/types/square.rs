//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as a compact 0-63 index.
///
/// Index layout follows the bitboard convention: h1=0, a1=7, h8=56, a8=63.
/// Files descend from a at the high end of each rank, ranks ascend from
/// rank 1 at the low end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Create a square from rank and file, both 0-7 with file 0 = file a
    #[inline]
    #[must_use]
    pub const fn from_coords(rank: usize, file: usize) -> Self {
        Square((rank * 8 + (7 - file)) as u8)
    }

    /// Get the square's index (0-63, h1=0, a8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        7 - (self.0 % 8) as usize
    }

    /// Flip the square vertically (e.g. e4 <-> e5, a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file() as u8) as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square::from_coords(rank, file))
    }
}

// Named square constants, one row per rank. Within a rank the index runs
// from h at 0 up to a at 7.
#[rustfmt::skip]
impl Square {
    pub const H1: Square = Square(0);  pub const G1: Square = Square(1);
    pub const F1: Square = Square(2);  pub const E1: Square = Square(3);
    pub const D1: Square = Square(4);  pub const C1: Square = Square(5);
    pub const B1: Square = Square(6);  pub const A1: Square = Square(7);

    pub const H2: Square = Square(8);  pub const G2: Square = Square(9);
    pub const F2: Square = Square(10); pub const E2: Square = Square(11);
    pub const D2: Square = Square(12); pub const C2: Square = Square(13);
    pub const B2: Square = Square(14); pub const A2: Square = Square(15);

    pub const H3: Square = Square(16); pub const G3: Square = Square(17);
    pub const F3: Square = Square(18); pub const E3: Square = Square(19);
    pub const D3: Square = Square(20); pub const C3: Square = Square(21);
    pub const B3: Square = Square(22); pub const A3: Square = Square(23);

    pub const H4: Square = Square(24); pub const G4: Square = Square(25);
    pub const F4: Square = Square(26); pub const E4: Square = Square(27);
    pub const D4: Square = Square(28); pub const C4: Square = Square(29);
    pub const B4: Square = Square(30); pub const A4: Square = Square(31);

    pub const H5: Square = Square(32); pub const G5: Square = Square(33);
    pub const F5: Square = Square(34); pub const E5: Square = Square(35);
    pub const D5: Square = Square(36); pub const C5: Square = Square(37);
    pub const B5: Square = Square(38); pub const A5: Square = Square(39);

    pub const H6: Square = Square(40); pub const G6: Square = Square(41);
    pub const F6: Square = Square(42); pub const E6: Square = Square(43);
    pub const D6: Square = Square(44); pub const C6: Square = Square(45);
    pub const B6: Square = Square(46); pub const A6: Square = Square(47);

    pub const H7: Square = Square(48); pub const G7: Square = Square(49);
    pub const F7: Square = Square(50); pub const E7: Square = Square(51);
    pub const D7: Square = Square(52); pub const C7: Square = Square(53);
    pub const B7: Square = Square(54); pub const A7: Square = Square(55);

    pub const H8: Square = Square(56); pub const G8: Square = Square(57);
    pub const F8: Square = Square(58); pub const E8: Square = Square(59);
    pub const D8: Square = Square(60); pub const C8: Square = Square(61);
    pub const B8: Square = Square(62); pub const A8: Square = Square(63);
}
