//! Bitboard chess engine library.
//!
//! Provides a complete chess core with:
//! - Twelve-bitboard position representation with a vertical-flip symmetry
//! - Strictly legal move generation (pins, check evasion, en passant, castling)
//! - Copy-make move application
//! - Material + piece-square evaluation
//! - Fail-soft negamax search with alpha-beta pruning
//!
//! # Quick Start
//!
//! ```
//! use ruy::board::{search, Position, INFINITY};
//!
//! // Start from the standard initial position
//! let pos = Position::initial();
//!
//! // Generate all legal moves
//! let moves = pos.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Find the best move at depth 3
//! let (score, best) = search(&pos, 3, -INFINITY, INFINITY);
//! println!("best {} score {}", best.unwrap(), score);
//! ```
//!
//! # Building Positions
//!
//! ```
//! use ruy::board::Position;
//!
//! // From FEN notation
//! let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert!(!pos.white_to_move());
//! ```
//!
//! # Making Moves
//!
//! ```
//! use ruy::board::Position;
//!
//! let pos = Position::initial();
//! let mv = pos.parse_move("e2e4").unwrap();
//! let next = pos.make_move(mv);
//!
//! assert!(!next.is_checkmate());
//! assert!(!next.is_stalemate());
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Side`, `Square`, `PieceId`, `Castle` and `Move`
//! - `logging` - Enable optional debug logging via the `log` crate

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
