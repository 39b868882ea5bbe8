//! Perft (performance test) for checking the legality predicate.

use crate::game::Game;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). A finished game has no moves.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let Some(turn) = game.turn() else {
        return 0;
    };
    let moves = game.legal_moves(turn);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            match child.make_move(mv) {
                Ok(()) => perft(&child, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by move notation. Depth 0
/// has no moves to break down and returns an empty list.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let Some(turn) = game.turn() else {
        return Vec::new();
    };
    if depth == 0 {
        return Vec::new();
    }

    let mut results: Vec<(String, u64)> = game
        .legal_moves(turn)
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            let count = match child.make_move(mv) {
                Ok(()) if depth == 1 => 1,
                Ok(()) => perft(&child, depth - 1),
                Err(_) => 0,
            };
            (mv.to_notation(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
