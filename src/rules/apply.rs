//! Move application.
//!
//! `apply` is a pure function: it validates a move against the board it was
//! generated for and returns a fresh board, leaving the input untouched on
//! failure. Landing on an opposing piece overwrites it (a capture), so piece
//! counts only ever decrease.

use serde::{Deserialize, Serialize};

use super::movegen::legal_destinations;
use crate::core::{Board, Cell, Color, Position};
use crate::error::IllegalMoveError;

/// One origin-to-destination move by a side.
///
/// Moves are transient: each is validated against a specific board and
/// applied immediately, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub origin: Position,
    pub destination: Position,
    pub mover: Color,
}

impl Move {
    #[must_use]
    pub const fn new(origin: Position, destination: Position, mover: Color) -> Self {
        Self {
            origin,
            destination,
            mover,
        }
    }
}

/// Apply a move, producing the resulting board.
///
/// Fails if the origin is empty, holds the wrong color, or the destination
/// is not among `legal_destinations(board, origin)`.
pub fn apply(board: &Board, mv: &Move) -> Result<Board, IllegalMoveError> {
    match board.get(mv.origin).color() {
        None => return Err(IllegalMoveError::EmptyOrigin(mv.origin)),
        Some(color) if color != mv.mover => {
            return Err(IllegalMoveError::NotYourPiece {
                origin: mv.origin,
                mover: mv.mover,
            })
        }
        Some(_) => {}
    }

    if !legal_destinations(board, mv.origin)?.contains(&mv.destination) {
        return Err(IllegalMoveError::Unreachable {
            origin: mv.origin,
            destination: mv.destination,
        });
    }

    let mut next = board.clone();
    next.set(mv.origin, Cell::Empty);
    next.set(mv.destination, Cell::Taken(mv.mover));
    Ok(next)
}

/// Whether the move would land on an opposing piece.
#[must_use]
pub fn is_capture(board: &Board, mv: &Move) -> bool {
    board.get(mv.destination).color() == Some(mv.mover.opponent())
}
