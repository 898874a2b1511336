//! The external key-value board encoding.
//!
//! The container persists the board as 64 string keys (`"1A"` through
//! `"8H"`) mapped to `"0"`, `"B"` or `"W"`, plus a `"turn"` key naming the
//! side to move. An empty mapping means the game has not started yet and
//! decodes to the canonical initial board with White to open.

use rustc_hash::FxHashMap;

use super::ops::TURN_KEY;
use crate::core::{Board, Cell, Color, Position};
use crate::error::MalformedBoardError;

/// The container's persisted state shape.
pub type ExternalState = FxHashMap<String, String>;

/// Decode the persisted board.
///
/// An empty mapping is the distinguished not-yet-started state and decodes
/// to `Board::initial()`. Otherwise every position key must be present with
/// a valid token, and no key other than positions and `"turn"` may appear.
pub fn decode(state: &ExternalState) -> Result<Board, MalformedBoardError> {
    if state.is_empty() {
        return Ok(Board::initial());
    }

    for key in state.keys() {
        if key != TURN_KEY {
            key.parse::<Position>()?;
        }
    }

    let mut board = Board::empty();
    for pos in Position::all() {
        let value = state
            .get(&pos.to_string())
            .ok_or(MalformedBoardError::MissingCell(pos))?;
        let cell =
            Cell::from_token(value).ok_or_else(|| MalformedBoardError::InvalidToken {
                key: pos,
                value: value.clone(),
            })?;
        board.set(pos, cell);
    }
    Ok(board)
}

/// Decode the side to move. White opens, so the empty mapping means White.
pub fn decode_turn(state: &ExternalState) -> Result<Color, MalformedBoardError> {
    if state.is_empty() {
        return Ok(Color::White);
    }
    let token = state.get(TURN_KEY).ok_or(MalformedBoardError::MissingTurn)?;
    Color::from_token(token).ok_or_else(|| MalformedBoardError::InvalidTurn(token.clone()))
}

/// Encode a board as its 64 position keys.
///
/// The `"turn"` key is written by the turn encoder, not here. Lossless:
/// `decode(&encode(b))` yields `b` for every board.
#[must_use]
pub fn encode(board: &Board) -> ExternalState {
    Position::all()
        .map(|pos| (pos.to_string(), board.get(pos).token().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_decodes_to_initial_board() {
        let state = ExternalState::default();
        assert_eq!(decode(&state).unwrap(), Board::initial());
        assert_eq!(decode_turn(&state).unwrap(), Color::White);
    }

    #[test]
    fn test_round_trip() {
        let board = Board::initial();
        let mut state = encode(&board);
        assert_eq!(state.len(), 64);
        assert_eq!(decode(&state).unwrap(), board);

        state.insert(TURN_KEY.to_string(), "B".to_string());
        assert_eq!(decode(&state).unwrap(), board);
        assert_eq!(decode_turn(&state).unwrap(), Color::Black);
    }

    #[test]
    fn test_missing_cell_rejected() {
        let mut state = encode(&Board::initial());
        state.remove("4D");

        let err = decode(&state).unwrap_err();
        assert_eq!(
            err,
            MalformedBoardError::MissingCell("4D".parse().unwrap())
        );
    }

    #[test]
    fn test_invalid_token_rejected() {
        let mut state = encode(&Board::initial());
        state.insert("4D".to_string(), "X".to_string());

        let err = decode(&state).unwrap_err();
        assert_eq!(
            err,
            MalformedBoardError::InvalidToken {
                key: "4D".parse().unwrap(),
                value: "X".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut state = encode(&Board::initial());
        state.insert("9Z".to_string(), "0".to_string());

        let err = decode(&state).unwrap_err();
        assert_eq!(err, MalformedBoardError::InvalidKey("9Z".to_string()));
    }

    #[test]
    fn test_missing_turn_rejected_on_started_board() {
        let state = encode(&Board::initial());
        assert_eq!(
            decode_turn(&state).unwrap_err(),
            MalformedBoardError::MissingTurn
        );

        let mut state = state;
        state.insert(TURN_KEY.to_string(), "X".to_string());
        assert_eq!(
            decode_turn(&state).unwrap_err(),
            MalformedBoardError::InvalidTurn("X".to_string())
        );
    }
}
