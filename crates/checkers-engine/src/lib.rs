//! Generalized checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - a variable-size grid of squares with adjacency queries and
//!   per-color occupancy tracking
//! - [`Game`] - full game state: turn, winner, draw bookkeeping, and move
//!   application with forced-capture and multi-jump rules
//! - Move generation ([`movegen`])
//!
//! # Architecture
//!
//! The board is topology plus occupancy: squares know their orthogonal
//! neighbors and diagonals are derived on demand, so the grid shape is
//! immutable after construction and only piece placement ever changes.
//! All rule decisions (movement directions, forced captures, promotion,
//! win detection) live in [`movegen`] and [`Game`].
//!
//! # Example
//!
//! ```
//! use checkers_core::Color;
//! use checkers_engine::Game;
//!
//! // Standard 8x8 game: three starting rows per side.
//! let mut game = Game::new(3);
//! assert_eq!(game.piece_count(Color::Light), 12);
//!
//! let moves = game.all_moves(Color::Light);
//! let (&from, dests) = moves.iter().next().unwrap();
//! let mv = *dests.iter().next().unwrap();
//! game.apply_move(from, mv.to, Color::Light).unwrap();
//! assert_eq!(game.turn(), Color::Dark);
//! ```

mod board;
mod game;
pub mod movegen;

pub use board::{Board, Shade, Square};
pub use game::{DrawReason, Game, GameError, GameResult, TurnResult, DRAW_MOVE_LIMIT};
pub use movegen::{all_moves, piece_moves};
