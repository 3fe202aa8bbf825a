//! Move generation.
//!
//! Enumerates legal destinations for single pieces ([`piece_moves`]) and for
//! a whole side ([`all_moves`]), applying the forced-capture rule at both
//! levels: captures suppress a piece's own simple moves, and any capture
//! anywhere on the board suppresses every simple move of that color.

use crate::Board;
use checkers_core::{Color, Coord, Direction, Move};
use std::collections::{BTreeMap, BTreeSet};

/// Returns the legal destinations for a piece of `color` at `from`.
///
/// A non-king scans its color's forward diagonals; a king scans both
/// directions with the same non-king routine and the results are unioned.
/// If any capture is found, simple moves are discarded (captures are
/// mandatory for the piece). `captures_only` restricts the scan to jumps,
/// which is how multi-jump continuations are probed.
///
/// The caller supplies `color` and `king` rather than the occupant of
/// `from`, so hypothetical placements can be probed; [`all_moves`] and the
/// game's move application always pass the piece actually on the square.
pub fn piece_moves(
    board: &Board,
    from: Coord,
    color: Color,
    king: bool,
    captures_only: bool,
) -> BTreeSet<Move> {
    let mut moves = if king {
        let mut union = BTreeSet::new();
        for dir in Direction::BOTH {
            union.extend(dir_moves(board, from, color, dir, captures_only));
        }
        union
    } else {
        dir_moves(board, from, color, color.forward(), captures_only)
    };
    if moves.iter().any(|m| m.is_capture()) {
        moves.retain(|m| m.is_capture());
    }
    moves
}

/// Scans the two diagonals one step in `dir`: an empty square is a simple
/// move, an enemy piece with an empty on-board square behind it is a
/// capture.
fn dir_moves(
    board: &Board,
    from: Coord,
    color: Color,
    dir: Direction,
    captures_only: bool,
) -> BTreeSet<Move> {
    let mut moves = BTreeSet::new();
    for next in board.diagonals(from, dir) {
        let Some(sq) = board.square(next) else {
            continue;
        };
        match sq.piece() {
            None => {
                if !captures_only {
                    moves.insert(Move::simple(next));
                }
            }
            Some(p) if p.color == color.opposite() => {
                let dc = if next.col > from.col { 1 } else { -1 };
                if let Some(landing) = next.offset(dir.row_delta(), dc) {
                    if board.square(landing).is_some_and(|sq| sq.is_empty()) {
                        moves.insert(Move::capture(landing));
                    }
                }
            }
            Some(_) => {}
        }
    }
    moves
}

/// Returns every legal move for `color`, keyed by piece position in
/// row-major order, with empty entries dropped.
///
/// Board-wide forced capture: if any piece of `color` can capture, every
/// simple move of that color is suppressed, not just the capturing piece's.
pub fn all_moves(board: &Board, color: Color) -> BTreeMap<Coord, BTreeSet<Move>> {
    let mut map = BTreeMap::new();
    let mut any_capture = false;
    for &from in board.pieces(color) {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        let moves = piece_moves(board, from, color, piece.king, false);
        if moves.is_empty() {
            continue;
        }
        any_capture = any_capture || moves.iter().any(|m| m.is_capture());
        map.insert(from, moves);
    }
    if any_capture {
        for moves in map.values_mut() {
            moves.retain(|m| m.is_capture());
        }
        map.retain(|_, moves| !moves.is_empty());
    }
    map
}
