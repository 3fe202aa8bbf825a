//! Static evaluation.

use checkers_core::Color;
use checkers_engine::{Game, GameResult};

/// Terminal bonus, large enough to dominate any material difference.
pub const WIN_BONUS: i32 = 1000;

/// Scores the position from Light's perspective.
///
/// Each man counts 1 and each king 2, Light positive and Dark negative.
/// Once a winner has been decided, a ±[`WIN_BONUS`] offset is added so the
/// search prefers forcing a win (and avoiding a loss) over any amount of
/// material; a draw gets no offset.
pub fn evaluate(game: &Game) -> i32 {
    let board = game.board();
    let mut score = 0;
    for &at in board.pieces(Color::Light) {
        score += match board.piece_at(at) {
            Some(p) if p.king => 2,
            _ => 1,
        };
    }
    for &at in board.pieces(Color::Dark) {
        score -= match board.piece_at(at) {
            Some(p) if p.king => 2,
            _ => 1,
        };
    }
    match game.result() {
        Some(GameResult::LightWins) => score + WIN_BONUS,
        Some(GameResult::DarkWins) => score - WIN_BONUS,
        _ => score,
    }
}
