//! Turn encoding and decoding.
//!
//! A completed move travels to the host as an ordered operation list:
//! clear the origin, set the destination, (on the very first move) set
//! every remaining square of the initial layout, update the turn marker,
//! hand the turn over, and — if the move decided the game — end it.
//!
//! The first-move materialization compensates for the container starting
//! each match from an empty persisted state.

use super::ops::{Operation, PlayerId, TURN_KEY};
use crate::core::{Board, Cell, Color, Position};
use crate::error::{MalformedBoardError, ProtocolError};
use crate::rules::GameOutcome;

/// Who is moving, and the seat ids the operations must name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnContext {
    pub mover: Color,
    pub mover_id: PlayerId,
    pub opponent_id: PlayerId,
}

/// Encode a validated move as the operation sequence for the host.
///
/// The engine guarantees this is only called for moves that passed
/// `rules::apply`; the sequence is emitted in the exact order the
/// container's verifier expects.
#[must_use]
pub fn encode_move(
    ctx: &TurnContext,
    origin: Position,
    destination: Position,
    outcome: GameOutcome,
    first_move: bool,
) -> Vec<Operation> {
    let mut ops = vec![
        Operation::set_cell(origin, Cell::Empty),
        Operation::set_cell(destination, Cell::Taken(ctx.mover)),
    ];

    if first_move {
        let initial = Board::initial();
        for pos in Position::all() {
            if pos == origin || pos == destination {
                continue;
            }
            ops.push(Operation::set_cell(pos, initial.get(pos)));
        }
    }

    ops.push(Operation::set(TURN_KEY, ctx.mover.opponent().token()));
    ops.push(Operation::SetTurn {
        player: ctx.opponent_id,
    });

    if let GameOutcome::Won(winner) = outcome {
        let winner_id = if winner == ctx.mover {
            ctx.mover_id
        } else {
            ctx.opponent_id
        };
        ops.push(Operation::EndGame { winner: winner_id });
    }

    ops
}

/// A move reconstructed from an incoming operation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMove {
    pub origin: Position,
    pub destination: Position,
    pub mover: Color,
    /// The board after replaying every positional `Set` onto the prior
    /// board.
    pub board: Board,
    /// Set when the sequence ends the game.
    pub winner: Option<PlayerId>,
}

/// Decode an opponent's move from its operation sequence.
///
/// The first two operations must be the origin-clearing and
/// destination-setting `Set`s; the mover's color is read from the second.
/// All positional `Set`s are replayed onto `prior` so the caller can
/// animate the move and cross-check the next authoritative state.
pub fn decode_move(ops: &[Operation], prior: &Board) -> Result<IncomingMove, ProtocolError> {
    if ops.is_empty() {
        return Err(ProtocolError::EmptyMoveSequence);
    }
    if ops.len() < 2 {
        return Err(ProtocolError::TruncatedMoveSequence);
    }

    let (origin, origin_cell) = positional_set(&ops[0])?;
    let (destination, destination_cell) = positional_set(&ops[1])?;

    if !origin_cell.is_empty() {
        return Err(ProtocolError::UnexpectedOperation(format!(
            "move does not clear its origin {origin}"
        )));
    }
    let Some(mover) = destination_cell.color() else {
        return Err(ProtocolError::UnexpectedOperation(format!(
            "move does not place a piece on {destination}"
        )));
    };

    let mut board = prior.clone();
    let mut winner = None;
    for op in ops {
        match op {
            Operation::Set { key, value } if key != TURN_KEY => {
                let pos: Position = key.parse::<Position>().map_err(ProtocolError::from)?;
                let cell = Cell::from_token(value).ok_or_else(|| {
                    MalformedBoardError::InvalidToken {
                        key: pos,
                        value: value.clone(),
                    }
                })?;
                board.set(pos, cell);
            }
            Operation::Set { .. } | Operation::SetTurn { .. } => {}
            Operation::EndGame { winner: id } => winner = Some(*id),
        }
    }

    Ok(IncomingMove {
        origin,
        destination,
        mover,
        board,
        winner,
    })
}

fn positional_set(op: &Operation) -> Result<(Position, Cell), ProtocolError> {
    let Operation::Set { key, value } = op else {
        return Err(ProtocolError::UnexpectedOperation(format!("{op:?}")));
    };
    let pos: Position = key.parse::<Position>().map_err(ProtocolError::from)?;
    let cell = Cell::from_token(value).ok_or_else(|| MalformedBoardError::InvalidToken {
        key: pos,
        value: value.clone(),
    })?;
    Ok((pos, cell))
}
