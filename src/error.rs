//! Crate error taxonomy.
//!
//! Every engine operation is a pure function: a failed call returns one of
//! these errors and leaves its inputs untouched. There is no retry policy
//! here; the caller decides whether to re-prompt after a rejection.

use crate::core::{Color, Position};

/// A received board encoding is not a valid board.
///
/// Fatal to the decode call and never silently repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBoardError {
    #[error("key {0:?} is not a board position")]
    InvalidKey(String),

    #[error("no value for cell {0}")]
    MissingCell(Position),

    #[error("invalid token {value:?} for cell {key}")]
    InvalidToken { key: Position, value: String },

    #[error("no turn marker in board state")]
    MissingTurn,

    #[error("invalid turn marker {0:?}")]
    InvalidTurn(String),
}

/// A move was rejected before any operation was emitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("no piece at {0}")]
    EmptyOrigin(Position),

    #[error("piece at {origin} does not belong to {mover}")]
    NotYourPiece { origin: Position, mover: Color },

    #[error("{destination} is not reachable from {origin}")]
    Unreachable {
        origin: Position,
        destination: Position,
    },

    #[error("it is {0}'s turn")]
    OutOfTurn(Color),
}

/// A move was attempted after the game was already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the game is already over")]
pub struct GameAlreadyOverError;

/// An incoming operation sequence does not describe a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("empty operation sequence")]
    EmptyMoveSequence,

    #[error("operation sequence ends before the destination set")]
    TruncatedMoveSequence,

    #[error("unexpected operation: {0}")]
    UnexpectedOperation(String),

    #[error(transparent)]
    Malformed(#[from] MalformedBoardError),
}

/// Any failure surfaced by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no update received yet")]
    NotStarted,

    #[error(transparent)]
    Malformed(#[from] MalformedBoardError),

    #[error(transparent)]
    Illegal(#[from] IllegalMoveError),

    #[error(transparent)]
    Finished(#[from] GameAlreadyOverError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let pos: Position = "3D".parse().unwrap();

        let err = IllegalMoveError::EmptyOrigin(pos);
        assert_eq!(err.to_string(), "no piece at 3D");

        let err = MalformedBoardError::InvalidToken {
            key: pos,
            value: "X".to_string(),
        };
        assert_eq!(err.to_string(), "invalid token \"X\" for cell 3D");

        assert_eq!(
            GameAlreadyOverError.to_string(),
            "the game is already over"
        );
    }

    #[test]
    fn test_session_error_wraps_transparently() {
        let err: SessionError = GameAlreadyOverError.into();
        assert_eq!(err.to_string(), "the game is already over");

        let err: SessionError = IllegalMoveError::OutOfTurn(Color::Black).into();
        assert_eq!(err.to_string(), "it is Black's turn");
    }
}
