//! Checkers bots: a random mover and a minimax player.
//!
//! A [`Bot`] plays one side of a [`Game`]. Depth 0 picks uniformly random
//! legal moves; any other depth runs [`minimax`] that many plies ahead,
//! maximizing for Light and minimizing for Dark.
//!
//! # Example
//!
//! ```
//! use checkers_bot::Bot;
//! use checkers_core::Color;
//! use checkers_engine::Game;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut game = Game::new(3);
//! let mut rng = StdRng::seed_from_u64(7);
//! let bot = Bot::new(2, Color::Light);
//! bot.play(&mut game, &mut rng);
//! assert_eq!(game.turn(), Color::Dark);
//! ```

mod eval;
mod search;

pub use eval::{evaluate, WIN_BONUS};
pub use search::{minimax, SearchMove};

use checkers_core::{Color, Coord, Move};
use checkers_engine::{Game, TurnResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// A computer player for one side.
#[derive(Debug, Clone, Copy)]
pub struct Bot {
    depth: u8,
    color: Color,
}

impl Bot {
    /// Creates a bot playing `color`. Depth 0 plays random legal moves;
    /// any other depth searches that many plies ahead.
    pub const fn new(depth: u8, color: Color) -> Self {
        Bot { depth, color }
    }

    /// Returns the side this bot plays.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the configured search depth.
    #[inline]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns true if this bot plays random moves.
    #[inline]
    pub const fn is_random(&self) -> bool {
        self.depth == 0
    }

    /// Picks a move for the current state without applying it.
    ///
    /// Returns `None` when the game is over or the bot's side has no moves.
    pub fn choose_move<R: Rng>(&self, game: &Game, rng: &mut R) -> Option<SearchMove> {
        if game.result().is_some() {
            return None;
        }
        if self.is_random() {
            random_move(game, self.color, rng)
        } else {
            let maximizing = self.color == Color::Light;
            minimax(game, self.depth, maximizing, i32::MIN, i32::MAX).1
        }
    }

    /// Chooses a move and applies it to the live game.
    ///
    /// Does nothing beyond a logged diagnostic when the game is already
    /// decided or it is not this bot's turn. During a multi-jump the turn
    /// stays with this bot ([`TurnResult::ContinueTurn`]) and the caller
    /// invokes `play` again for the next jump.
    pub fn play<R: Rng>(&self, game: &mut Game, rng: &mut R) -> Option<TurnResult> {
        if game.result().is_some() {
            warn!(color = %self.color, "bot asked to move in a finished game");
            return None;
        }
        if game.turn() != self.color {
            warn!(color = %self.color, turn = %game.turn(), "bot asked to move out of turn");
            return None;
        }
        let (from, mv) = self.choose_move(game, rng)?;
        match game.apply_move(from, mv.to, self.color) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(color = %self.color, %from, %mv, "bot move rejected: {err}");
                None
            }
        }
    }
}

/// Uniformly samples a piece with at least one move, then one of its
/// destinations. Matches the aggregation's forced-capture filtering, so a
/// random bot still captures when it must.
fn random_move<R: Rng>(game: &Game, color: Color, rng: &mut R) -> Option<(Coord, Move)> {
    let moves = game.all_moves(color);
    let pieces: Vec<Coord> = moves.keys().copied().collect();
    let from = *pieces.choose(rng)?;
    let dests: Vec<Move> = moves.get(&from)?.iter().copied().collect();
    let mv = *dests.choose(rng)?;
    Some((from, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_engine::GameResult;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_bot_plays_a_legal_move() {
        let mut game = Game::new(3);
        let bot = Bot::new(0, Color::Light);
        let mut rng = StdRng::seed_from_u64(42);

        let (from, mv) = bot.choose_move(&game, &mut rng).unwrap();
        let legal = game.all_moves(Color::Light);
        assert!(legal[&from].contains(&mv));

        assert!(bot.play(&mut game, &mut rng).is_some());
        assert_eq!(game.turn(), Color::Dark);
    }

    #[test]
    fn random_bot_is_reproducible_under_a_seed() {
        let game = Game::new(3);
        let bot = Bot::new(0, Color::Light);
        let a = bot.choose_move(&game, &mut StdRng::seed_from_u64(9));
        let b = bot.choose_move(&game, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn random_bot_respects_forced_captures() {
        let mut game = Game::empty(3);
        game.place_piece(Coord::new(0, 1), Color::Light, false).unwrap();
        game.place_piece(Coord::new(2, 1), Color::Light, false).unwrap();
        game.place_piece(Coord::new(3, 2), Color::Dark, false).unwrap();
        game.place_piece(Coord::new(5, 0), Color::Dark, false).unwrap();

        let bot = Bot::new(0, Color::Light);
        for seed in 0..16 {
            let (from, mv) = bot
                .choose_move(&game, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(from, Coord::new(2, 1));
            assert!(mv.is_capture());
        }
    }

    #[test]
    fn minimax_bot_takes_a_free_win() {
        let mut game = Game::empty(1);
        game.place_piece(Coord::new(1, 0), Color::Light, false).unwrap();
        game.place_piece(Coord::new(2, 1), Color::Dark, false).unwrap();

        let bot = Bot::new(3, Color::Light);
        let mut rng = StdRng::seed_from_u64(0);
        bot.play(&mut game, &mut rng).unwrap();
        assert_eq!(game.result(), Some(GameResult::LightWins));
    }

    #[test]
    fn bot_declines_to_move_out_of_turn() {
        let mut game = Game::new(3);
        let bot = Bot::new(1, Color::Dark);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(bot.play(&mut game, &mut rng).is_none());
        assert_eq!(game.turn(), Color::Light);
    }

    #[test]
    fn bot_declines_to_move_in_a_finished_game() {
        let mut game = Game::new(3);
        game.resign(Color::Light).unwrap();
        let bot = Bot::new(1, Color::Dark);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(bot.play(&mut game, &mut rng).is_none());
    }

    #[test]
    fn bots_finish_a_whole_game() {
        let mut game = Game::new(1);
        let light = Bot::new(2, Color::Light);
        let dark = Bot::new(0, Color::Dark);
        let mut rng = StdRng::seed_from_u64(1);

        let mut plies = 0;
        while game.check_winner().is_none() {
            let mover = if game.turn() == Color::Light { light } else { dark };
            assert!(mover.play(&mut game, &mut rng).is_some());
            plies += 1;
            assert!(plies < 500, "game did not terminate");
        }
        assert!(game.result().is_some());
    }
}
