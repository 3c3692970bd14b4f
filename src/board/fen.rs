//! FEN import/export and move-text parsing.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::Position;
use super::types::{Castle, Move, Piece, PieceId, Side, Square};

/// FEN string of the standard initial position
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The empty string stands for the initial position. The halfmove and
    /// fullmove fields are optional and default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fen = fen.trim();
        if fen.is_empty() {
            return Ok(Self::initial());
        }

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pos = Self::empty();

        // Piece placement. FEN walks rank 8 to rank 1, each rank from
        // file a to file h, which is exactly index 63 down to 0.
        let mut idx: i32 = 63;
        for c in parts[0].chars() {
            match c {
                '/' => {}
                '1'..='8' => idx -= c as i32 - '0' as i32,
                _ => {
                    let id =
                        PieceId::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if !(0..=63).contains(&idx) {
                        return Err(FenError::PlacementOverflow);
                    }
                    pos.boards[id.index()] =
                        pos.boards[id.index()].with(Square::from_index(idx as usize));
                    idx -= 1;
                }
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => pos.castling |= Castle::WhiteKingSide.rights_bit(),
                'Q' => pos.castling |= Castle::WhiteQueenSide.rights_bit(),
                'k' => pos.castling |= Castle::BlackKingSide.rights_bit(),
                'q' => pos.castling |= Castle::BlackQueenSide.rights_bit(),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        pos.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        // Clocks are lenient: absent or malformed fields take defaults
        pos.halfmove = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        pos.fullmove = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(pos)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_coords(rank, file);
                if let Some(id) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(id.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = if self.white_to_move() { "w" } else { "b" };
        let mut castling = String::new();
        if self.has_right(Castle::WhiteKingSide) {
            castling.push('K');
        }
        if self.has_right(Castle::WhiteQueenSide) {
            castling.push('Q');
        }
        if self.has_right(Castle::BlackKingSide) {
            castling.push('k');
        }
        if self.has_right(Castle::BlackQueenSide) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            castling,
            ep,
            self.halfmove,
            self.fullmove
        )
    }

    /// Parse a move in long algebraic notation (`e2e4`, `a7a8q`) or
    /// castle notation (`O-O`, `o-o-o`).
    ///
    /// Returns the matching legal move, or an error describing why the
    /// text does not name one.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let legal = self.generate_moves();

        if let Some(castle) = Castle::from_notation(text) {
            let mv = Move::Castle(castle);
            return if legal.contains(&mv) {
                Ok(mv)
            } else {
                Err(MoveParseError::IllegalMove {
                    notation: text.to_string(),
                })
            };
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        // Validate square characters before building the squares
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        }

        let from = Square::from_coords(
            chars[1] as usize - '1' as usize,
            chars[0] as usize - 'a' as usize,
        );
        let to = Square::from_coords(
            chars[3] as usize - '1' as usize,
            chars[2] as usize - 'a' as usize,
        );

        let promotion = if chars.len() == 5 {
            let c = chars[4];
            let piece = Piece::from_char(c)
                .ok_or(MoveParseError::InvalidPromotion { char: c })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
            Some(piece)
        } else {
            None
        };

        legal
            .iter()
            .copied()
            .find(|mv| match *mv {
                Move::Piece {
                    from: f, to: t, ..
                } => f == from && t == to && mv.promotes_to() == promotion,
                Move::Castle(_) => false,
            })
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
