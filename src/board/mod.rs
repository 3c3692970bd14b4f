mod apply;
mod attack_tables;
mod attacks;
mod error;
mod eval;
mod fen;
mod masks;
mod movegen;
mod perft;
mod search;
mod sliders;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::INITIAL_FEN;
pub use perft::{divide, parallel_divide, perft};
pub use search::{find_best_move, search, INFINITY};
pub use state::Position;
pub use types::{Bitboard, BitboardIter, Castle, Move, Piece, PieceId, Side, Square};
