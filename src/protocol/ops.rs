//! Typed operation records exchanged with the host container.
//!
//! The container relays moves between players as ordered lists of these
//! records. The engine only ever produces well-formed sequences; it never
//! emits operations for a move it could not validate locally.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Cell, Position};

/// External key holding the side to move.
pub const TURN_KEY: &str = "turn";

/// A player id assigned by the host container.
///
/// Two ids are reserved: `-1` marks a match viewer and `0` the (never
/// implemented) AI seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub const VIEWER: PlayerId = PlayerId(-1);
    pub const AI: PlayerId = PlayerId(0);

    #[must_use]
    pub const fn is_viewer(self) -> bool {
        self.0 == Self::VIEWER.0
    }

    #[must_use]
    pub const fn is_ai(self) -> bool {
        self.0 == Self::AI.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One operation in a move sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Assign a board or meta key.
    Set { key: String, value: String },
    /// Hand the turn to a player.
    SetTurn { player: PlayerId },
    /// Terminate the match, awarding the win to a player.
    EndGame { winner: PlayerId },
}

impl Operation {
    /// A `Set` for an arbitrary key.
    #[must_use]
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Operation::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A `Set` assigning a cell to a board position.
    #[must_use]
    pub fn set_cell(pos: Position, cell: Cell) -> Self {
        Operation::set(pos.to_string(), cell.token())
    }
}
