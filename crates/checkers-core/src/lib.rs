//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Color`] for the two players
//! - [`Coord`] and [`Direction`] for board coordinates
//! - [`Piece`] for piece representation
//! - [`Move`] and [`MoveKind`] for move representation

mod color;
mod coord;
mod mov;
mod piece;

pub use color::Color;
pub use coord::{Coord, Direction};
pub use mov::{Move, MoveKind};
pub use piece::Piece;
