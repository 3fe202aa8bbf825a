//! Minimax search with alpha-beta pruning.

use crate::eval::evaluate;
use checkers_core::{Coord, Move};
use checkers_engine::Game;

/// A (piece, destination) pair chosen by the search.
pub type SearchMove = (Coord, Move);

/// Depth-bounded minimax over the game tree, pruning with the `alpha`/`beta`
/// window. The maximizing role favors Light (positive scores), the
/// minimizing role Dark.
///
/// Each explored child clones the game and applies one move through the
/// rules engine, so forced captures, multi-jump chaining, promotion, and
/// win detection all take effect inside the tree. Moves are enumerated for
/// the color whose turn it is — after a chaining capture that is still the
/// capturing side, whichever role is folding at this node.
///
/// Tie-break: pieces are scanned in row-major order and destinations in
/// ascending order within a piece, and the running best is replaced on
/// equal scores, so among equal-scoring moves the last in that order wins.
pub fn minimax(
    game: &Game,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<SearchMove>) {
    if depth == 0 || game.result().is_some() {
        return (evaluate(game), None);
    }
    let color = game.turn();
    let moves = game.all_moves(color);
    if moves.is_empty() {
        return (evaluate(game), None);
    }

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;
    'pieces: for (&from, dests) in &moves {
        for &mv in dests {
            let mut child = game.clone();
            if child.apply_move(from, mv.to, color).is_err() {
                continue;
            }
            let (score, _) = minimax(&child, depth - 1, !maximizing, alpha, beta);
            if maximizing {
                if score >= best_score {
                    best_score = score;
                    best_move = Some((from, mv));
                }
                alpha = alpha.max(best_score);
            } else {
                if score <= best_score {
                    best_score = score;
                    best_move = Some((from, mv));
                }
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break 'pieces;
            }
        }
    }
    (best_score, best_move)
}
