//! Full game state and move application.
//!
//! [`Game`] owns one [`Board`] plus the live piece counters and the
//! draw-by-inactivity counter. It validates and applies moves (including
//! promotion, forced captures, and multi-jump chaining), tracks the winner,
//! and exposes resignation and draw offers.

use crate::board::{Board, Shade};
use crate::movegen;
use checkers_core::{Color, Coord, Move, Piece};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Half-moves without a capture before the game is drawn.
pub const DRAW_MOVE_LIMIT: u32 = 40;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Light wins (material, stalemate, or resignation).
    LightWins,
    /// Dark wins (material, stalemate, or resignation).
    DarkWins,
    /// Draw with a specific reason.
    Draw(DrawReason),
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// No capture in [`DRAW_MOVE_LIMIT`] consecutive half-moves.
    InactivityLimit,
    /// Both players offered a draw.
    Agreement,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::LightWins => write!(f, "Light wins"),
            GameResult::DarkWins => write!(f, "Dark wins"),
            GameResult::Draw(DrawReason::InactivityLimit) => {
                write!(f, "draw ({} half-moves without a capture)", DRAW_MOVE_LIMIT)
            }
            GameResult::Draw(DrawReason::Agreement) => write!(f, "draw (by agreement)"),
        }
    }
}

/// Outcome of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The turn passed to the opponent.
    EndTurn,
    /// The capture chained: the moved piece has a further mandatory capture
    /// and the turn stays with the mover, who must move that piece again.
    ContinueTurn,
}

/// Error type for game operations.
///
/// Every rejected operation leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// A coordinate lies outside the grid.
    #[error("coordinate {0} is off the board")]
    OutOfRange(Coord),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A complete checkers game.
///
/// The piece counters and the occupancy sets on the board are derived
/// caches over the grid; every placement and removal goes through one
/// internal mutation point that keeps all three synchronized.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    num_light: u32,
    num_dark: u32,
    moves_since_capture: u32,
}

impl Game {
    /// Creates a game with `start_rows` rows of pieces per player on a
    /// square board of side `2 * start_rows + 2`.
    ///
    /// Pieces fill the dark squares: Light on the low rows, Dark on the
    /// high rows.
    pub fn new(start_rows: u8) -> Self {
        let mut game = Self::empty(start_rows);
        let side = game.board.rows();
        for row in 0..side {
            for col in 0..side {
                let at = Coord::new(row, col);
                if Shade::of(at) != Shade::Dark {
                    continue;
                }
                if row < start_rows {
                    game.set_piece(at, Some(Piece::man(Color::Light)));
                } else if row >= side - start_rows {
                    game.set_piece(at, Some(Piece::man(Color::Dark)));
                }
            }
        }
        game
    }

    /// Creates an empty game on a board of side `2 * start_rows + 2`,
    /// Light to move. Populate it with [`Game::place_piece`].
    pub fn empty(start_rows: u8) -> Self {
        let side = 2 * start_rows + 2;
        Game {
            board: Board::new(side, side),
            num_light: 0,
            num_dark: 0,
            moves_since_capture: 0,
        }
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// Returns the live piece count for a color.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        match color {
            Color::Light => self.num_light,
            Color::Dark => self.num_dark,
        }
    }

    /// Returns the number of half-moves since the last capture.
    #[inline]
    pub fn moves_since_capture(&self) -> u32 {
        self.moves_since_capture
    }

    /// Returns the cached result, or `None` while the game is ongoing.
    ///
    /// The cache is refreshed by every applied move; after direct
    /// [`place_piece`](Game::place_piece)/[`remove_piece`](Game::remove_piece)
    /// setup, call [`check_winner`](Game::check_winner) to evaluate it.
    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.board.winner()
    }

    /// Returns true if the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Evaluates the win and draw conditions, caching and returning the
    /// result.
    ///
    /// A side loses when it has no pieces left or no legal moves (a stuck
    /// side loses, it is not a draw); the Light side's conditions are
    /// checked first. The game is drawn after [`DRAW_MOVE_LIMIT`]
    /// half-moves without a capture.
    pub fn check_winner(&mut self) -> Option<GameResult> {
        self.update_result();
        self.board.winner()
    }

    /// Returns every legal move for `color`, keyed by piece position,
    /// with the board-wide forced-capture rule applied.
    pub fn all_moves(&self, color: Color) -> BTreeMap<Coord, BTreeSet<Move>> {
        movegen::all_moves(&self.board, color)
    }

    /// Returns the legal destinations of the piece at `at`, with the
    /// board-wide forced-capture rule applied.
    ///
    /// An empty square yields an empty set.
    pub fn legal_destinations(&self, at: Coord) -> Result<BTreeSet<Move>, GameError> {
        let Some(square) = self.board.square(at) else {
            return Err(GameError::OutOfRange(at));
        };
        let Some(piece) = square.piece() else {
            return Ok(BTreeSet::new());
        };
        let mut map = self.all_moves(piece.color);
        Ok(map.remove(&at).unwrap_or_default())
    }

    /// Moves the piece at `from` to `to` on behalf of `color`.
    ///
    /// The destination is validated against a fresh [`Game::all_moves`]
    /// enumeration; nothing is trusted from the caller beyond the
    /// coordinates. On a capture the jumped piece is removed and, if the
    /// moved piece can capture again, the turn stays with the mover
    /// ([`TurnResult::ContinueTurn`]). A piece reaching its crown row is
    /// promoted. Both draw offers are cleared, and the result cache is
    /// refreshed before returning.
    pub fn apply_move(&mut self, from: Coord, to: Coord, color: Color) -> Result<TurnResult, GameError> {
        if self.board.winner().is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.board.in_bounds(from) {
            return Err(GameError::OutOfRange(from));
        }
        if !self.board.in_bounds(to) {
            return Err(GameError::OutOfRange(to));
        }
        if color != self.board.turn() {
            return Err(GameError::IllegalMove(format!("it is not {color}'s turn")));
        }
        let piece = match self.board.piece_at(from) {
            None => {
                return Err(GameError::IllegalMove(format!("no piece at {from}")));
            }
            Some(p) if p.color != color => {
                return Err(GameError::IllegalMove(format!(
                    "the piece at {from} does not belong to {color}"
                )));
            }
            Some(p) => p,
        };
        let legal = self.all_moves(color);
        let mv = legal
            .get(&from)
            .and_then(|dests| dests.iter().copied().find(|m| m.to == to))
            .ok_or_else(|| {
                GameError::IllegalMove(format!("{from} -> {to} is not a legal destination"))
            })?;

        self.set_piece(from, None);
        let king = piece.king || to.row == color.crown_row(self.board.rows());
        self.set_piece(to, Some(Piece { color, king }));
        self.moves_since_capture += 1;
        if let Some(jumped) = mv.jumped(from) {
            self.set_piece(jumped, None);
            self.moves_since_capture = 0;
        }
        self.board.clear_draw_offers();

        let result = if mv.is_capture()
            && !movegen::piece_moves(&self.board, to, color, king, true).is_empty()
        {
            TurnResult::ContinueTurn
        } else {
            self.board.set_turn(color.opposite());
            TurnResult::EndTurn
        };
        trace!("{color} played {from} -> {mv}\n{}", self.board);
        self.update_result();
        Ok(result)
    }

    /// `color` resigns; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<(), GameError> {
        if self.board.winner().is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        self.board.set_winner(match color {
            Color::Light => GameResult::DarkWins,
            Color::Dark => GameResult::LightWins,
        });
        Ok(())
    }

    /// `color` offers (or accepts) a draw.
    ///
    /// The game ends once both colors have standing offers; a move by
    /// either side clears both.
    pub fn offer_draw(&mut self, color: Color) -> Result<(), GameError> {
        if self.board.winner().is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        self.board.set_draw_offer(color);
        if self.board.draw_offered(Color::Light) && self.board.draw_offered(Color::Dark) {
            self.board.set_winner(GameResult::Draw(DrawReason::Agreement));
        }
        Ok(())
    }

    /// Withdraws both standing draw offers.
    pub fn clear_draw_offers(&mut self) {
        self.board.clear_draw_offers();
    }

    /// Places a piece for test setups and custom positions, replacing any
    /// existing occupant.
    pub fn place_piece(&mut self, at: Coord, color: Color, king: bool) -> Result<(), GameError> {
        if !self.board.in_bounds(at) {
            return Err(GameError::OutOfRange(at));
        }
        self.set_piece(at, Some(Piece { color, king }));
        trace!("placed a {color} piece at {at}\n{}", self.board);
        Ok(())
    }

    /// Removes and returns the piece at `at`, if any.
    pub fn remove_piece(&mut self, at: Coord) -> Result<Option<Piece>, GameError> {
        if !self.board.in_bounds(at) {
            return Err(GameError::OutOfRange(at));
        }
        let removed = self.set_piece(at, None);
        if removed.is_some() {
            trace!("removed the piece at {at}\n{}", self.board);
        }
        Ok(removed)
    }

    /// Single mutation point: updates the grid, the occupancy sets, and
    /// the live counters together.
    fn set_piece(&mut self, at: Coord, piece: Option<Piece>) -> Option<Piece> {
        let prev = self.board.set_piece(at, piece);
        if let Some(p) = prev {
            match p.color {
                Color::Light => self.num_light -= 1,
                Color::Dark => self.num_dark -= 1,
            }
        }
        if let Some(p) = piece {
            match p.color {
                Color::Light => self.num_light += 1,
                Color::Dark => self.num_dark += 1,
            }
        }
        prev
    }

    fn compute_result(&self) -> Option<GameResult> {
        if self.num_light == 0 || movegen::all_moves(&self.board, Color::Light).is_empty() {
            return Some(GameResult::DarkWins);
        }
        if self.num_dark == 0 || movegen::all_moves(&self.board, Color::Dark).is_empty() {
            return Some(GameResult::LightWins);
        }
        if self.moves_since_capture >= DRAW_MOVE_LIMIT {
            return Some(GameResult::Draw(DrawReason::InactivityLimit));
        }
        None
    }

    fn update_result(&mut self) {
        if self.board.winner().is_none() {
            if let Some(result) = self.compute_result() {
                self.board.set_winner(result);
            }
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
