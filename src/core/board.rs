//! The board and its cells.
//!
//! ## Board
//!
//! A `Board` is a complete assignment of all 64 squares to cells. It is a
//! plain value: rule operations take a board by reference and return a fresh
//! board, so no component ever holds a mutable alias into another's state.
//! The presentation layer keeps the current snapshot and replaces it
//! wholesale on each authoritative update.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::Position;

/// A side in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// External token: `"B"` or `"W"`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Color::Black => "B",
            Color::White => "W",
        }
    }

    /// Parse an external token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Color> {
        match token {
            "B" => Some(Color::Black),
            "W" => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Contents of one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Color),
}

impl Cell {
    /// External token: `"0"`, `"B"`, or `"W"`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Cell::Empty => "0",
            Cell::Taken(color) => color.token(),
        }
    }

    /// Parse an external token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Cell> {
        match token {
            "0" => Some(Cell::Empty),
            _ => Color::from_token(token).map(Cell::Taken),
        }
    }

    /// The occupying color, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Taken(color) => Some(color),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_taken(self) -> bool {
        !self.is_empty()
    }
}

/// Full board state: one cell per square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// A board with every square empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 64],
        }
    }

    /// The canonical starting layout.
    ///
    /// Ranks 1 and 8 hold Black on files B-G; ranks 2-7 hold White on
    /// files A and H. 12 pieces per side.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for pos in Position::all() {
            let edge_rank = pos.row() == 0 || pos.row() == 7;
            let edge_file = pos.col() == 0 || pos.col() == 7;
            let cell = match (edge_rank, edge_file) {
                (true, false) => Cell::Taken(Color::Black),
                (false, true) => Cell::Taken(Color::White),
                _ => Cell::Empty,
            };
            board.set(pos, cell);
        }
        board
    }

    /// Get the cell at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Set the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Iterate over the squares holding a given color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.get(pos) == Cell::Taken(color))
    }

    /// Number of pieces of a given color.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl fmt::Display for Board {
    /// Renders the grid rank by rank, rank 1 first, for test diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let pos = Position::new(row, col).ok_or(fmt::Error)?;
                write!(f, "{}", self.get(pos).token())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
