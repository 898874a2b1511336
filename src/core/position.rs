//! Board coordinates.
//!
//! A `Position` names one of the 64 squares. Externally a position is a
//! two-character key `<rank><file>` with rank `1`-`8` and file `A`-`H`
//! (e.g. `"3D"`); internally rows and columns are 0-based indices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::MalformedBoardError;

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board.
///
/// Immutable value type; equality and hashing by (row, col). Ordering is
/// row-major, matching the external key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position from 0-based row and column indices.
    ///
    /// Returns `None` if either index is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 0-based row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 0-based column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// External rank digit, `1`-`8`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.row + 1
    }

    /// External file letter, `A`-`H`.
    #[must_use]
    pub const fn file(self) -> char {
        (b'A' + self.col) as char
    }

    /// Index into a row-major 64-cell array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Step by a (row, col) delta, returning `None` past the board edge.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.file())
    }
}

impl FromStr for Position {
    type Err = MalformedBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(file), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(MalformedBoardError::InvalidKey(s.to_string()));
        };
        let row = rank as i32 - '1' as i32;
        let col = file as i32 - 'A' as i32;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(MalformedBoardError::InvalidKey(s.to_string()))
        }
    }
}

// Positions travel on the wire as their two-character key form.

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
