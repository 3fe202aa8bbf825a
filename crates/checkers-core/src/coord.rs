//! Board coordinate representation.

use std::fmt;

/// A vertical movement direction on the board.
///
/// `Up` steps toward lower row indices, `Down` toward higher ones. Non-king
/// pieces move in exactly one direction (see [`Color::forward`]); kings scan
/// [`Direction::BOTH`].
///
/// [`Color::forward`]: crate::Color::forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Both directions, in a fixed scan order.
    pub const BOTH: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Returns the row delta for one step in this direction.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// A (row, column) coordinate on a board.
///
/// Coordinates are unsigned and board-agnostic: stepping off the low edge
/// yields `None`, while bounds on the high side are the board's to check.
/// The derived ordering is row-major, which the engine relies on for
/// deterministic piece iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    /// Offsets the coordinate by the given row and column deltas.
    ///
    /// Returns `None` if either component would leave `u8` range.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }

    /// Returns the coordinate halfway between `self` and `other`,
    /// component-wise integer-averaged.
    ///
    /// For a capture this is the square of the jumped piece.
    #[inline]
    pub const fn midpoint(self, other: Coord) -> Coord {
        Coord {
            row: ((self.row as u16 + other.row as u16) / 2) as u8,
            col: ((self.col as u16 + other.col as u16) / 2) as u8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
