//! Perft: counting move paths to verify the generator.

use parking_lot::Mutex;

use super::state::Position;
use super::types::Move;

/// Number of leaf nodes in the legal move tree of the given depth
#[must_use]
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&pos.make_move(mv), depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order
#[must_use]
pub fn divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    pos.generate_moves()
        .into_iter()
        .map(|mv| (mv, perft(&pos.make_move(mv), depth - 1)))
        .collect()
}

/// Like [`divide`], but fanning the root moves out over scoped worker
/// threads, one subtree each. Every worker owns its child position; the
/// only shared state is the result list behind a mutex. Shallow trees
/// are not worth the thread setup and run sequentially.
#[must_use]
pub fn parallel_divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth <= 3 {
        return divide(pos, depth);
    }

    let results: Mutex<Vec<(Move, u64)>> = Mutex::new(Vec::new());
    std::thread::scope(|scope| {
        for mv in pos.generate_moves() {
            let child = pos.make_move(mv);
            let results = &results;
            scope.spawn(move || {
                let nodes = perft(&child, depth - 1);
                results.lock().push((mv, nodes));
            });
        }
    });
    results.into_inner()
}
