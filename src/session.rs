//! Per-update context and the move-selection state machine.
//!
//! The host container pushes authoritative updates; between updates the
//! local player selects an origin and then a destination. This module owns
//! that sequencing: it rebuilds an immutable [`UpdateContext`] from every
//! incoming update (discarding any in-flight selection), validates
//! selections against the rule engine, and hands back the encoded
//! operation sequence once a legal move is complete.
//!
//! Rendering is the caller's concern: the session reports *what* to
//! present (`Prompt`/`SessionEvent`), never how.

use crate::core::{Board, Color, Position};
use crate::error::{GameAlreadyOverError, IllegalMoveError, SessionError};
use crate::protocol::{self, Operation, PlayerId, TurnContext};
use crate::rules::{apply, evaluate, is_capture, legal_destinations, movable_pieces, GameOutcome, Move};

/// The subset of the container's update the engine consumes.
#[derive(Clone, Debug)]
pub struct Update {
    pub your_player_id: PlayerId,
    /// Seat order fixed by the container: seat 0 moves White, seat 1 Black.
    pub player_ids: [PlayerId; 2],
    pub state: protocol::ExternalState,
    pub last_move: Vec<Operation>,
}

/// Everything the current update established, rebuilt fresh each time.
///
/// `your_color` is `None` when this client is a match viewer.
#[derive(Clone, Debug)]
pub struct UpdateContext {
    pub your_color: Option<Color>,
    pub opponent_color: Option<Color>,
    pub turn_owner: Color,
    pub board: Board,
}

/// What the caller should present after an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Your turn: pick one of these pieces.
    ChooseOrigin { origins: Vec<Position> },
    /// Opponent's turn.
    AwaitOpponent,
    /// Viewing only (viewer or AI seat); no moves from this client.
    Observe,
    /// The match is decided.
    GameOver { you_won: bool },
}

/// Result of a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// An origin was picked; these are its legal destinations.
    OriginChosen {
        origin: Position,
        destinations: Vec<Position>,
    },
    /// The origin was re-selected, cancelling it.
    SelectionCleared { origins: Vec<Position> },
    /// A legal move was completed: send `operations` to the host.
    MoveReady {
        operations: Vec<Operation>,
        outcome: GameOutcome,
        /// The local speculative board, for immediate display.
        board: Board,
        capture: bool,
    },
}

/// The origin/destination selection state machine for one client.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    context: Option<UpdateContext>,
    seats: Option<TurnContext>,
    selection: Option<Position>,
    first_move: bool,
    finished: bool,
}

fn seat_color(seat: usize) -> Color {
    if seat == 0 {
        Color::White
    } else {
        Color::Black
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The context built from the last update, if any.
    #[must_use]
    pub fn context(&self) -> Option<&UpdateContext> {
        self.context.as_ref()
    }

    /// Absorb an authoritative update from the host.
    ///
    /// Any in-flight selection is discarded; the context is rebuilt from
    /// scratch rather than patched.
    pub fn receive_update(&mut self, update: &Update) -> Result<Prompt, SessionError> {
        let board = protocol::decode(&update.state)?;
        let turn_owner = protocol::decode_turn(&update.state)?;
        let first_move = update.state.is_empty();

        let seat = update
            .player_ids
            .iter()
            .position(|&id| id == update.your_player_id);
        let your_color = seat.map(seat_color);

        let ended = matches!(update.last_move.last(), Some(Operation::EndGame { .. }));
        let prompt = if let Some(Operation::EndGame { winner }) = update.last_move.last() {
            Prompt::GameOver {
                you_won: *winner == update.your_player_id,
            }
        } else {
            match your_color {
                None => Prompt::Observe,
                Some(_) if update.your_player_id.is_ai() => Prompt::Observe,
                Some(color) if turn_owner == color => Prompt::ChooseOrigin {
                    origins: movable_pieces(&board, color),
                },
                Some(_) => Prompt::AwaitOpponent,
            }
        };

        self.selection = None;
        self.first_move = first_move;
        self.finished = ended;
        self.seats = seat.map(|s| TurnContext {
            mover: seat_color(s),
            mover_id: update.your_player_id,
            opponent_id: update.player_ids[1 - s],
        });
        self.context = Some(UpdateContext {
            your_color,
            opponent_color: your_color.map(Color::opponent),
            turn_owner,
            board,
        });

        Ok(prompt)
    }

    /// Handle a square selection from the local player.
    ///
    /// The first selection picks an origin, re-selecting it cancels, and a
    /// different selection attempts the move. No operations are ever
    /// emitted for a selection the rule engine rejects.
    pub fn select(&mut self, position: Position) -> Result<SessionEvent, SessionError> {
        if self.finished {
            return Err(GameAlreadyOverError.into());
        }
        let context = self.context.as_ref().ok_or(SessionError::NotStarted)?;
        let Some(your_color) = context.your_color else {
            return Err(IllegalMoveError::OutOfTurn(context.turn_owner).into());
        };
        if context.turn_owner != your_color {
            return Err(IllegalMoveError::OutOfTurn(context.turn_owner).into());
        }

        match self.selection {
            None => {
                match context.board.get(position).color() {
                    None => return Err(IllegalMoveError::EmptyOrigin(position).into()),
                    Some(color) if color != your_color => {
                        return Err(IllegalMoveError::NotYourPiece {
                            origin: position,
                            mover: your_color,
                        }
                        .into())
                    }
                    Some(_) => {}
                }
                let mut destinations: Vec<_> = legal_destinations(&context.board, position)?
                    .into_iter()
                    .collect();
                destinations.sort();
                self.selection = Some(position);
                Ok(SessionEvent::OriginChosen {
                    origin: position,
                    destinations,
                })
            }
            Some(origin) if origin == position => {
                self.selection = None;
                Ok(SessionEvent::SelectionCleared {
                    origins: movable_pieces(&context.board, your_color),
                })
            }
            Some(origin) => {
                let seats = self.seats.ok_or(SessionError::NotStarted)?;
                let mv = Move::new(origin, position, your_color);
                let capture = is_capture(&context.board, &mv);
                let board = apply(&context.board, &mv)?;
                let outcome = evaluate(&board, your_color);

                let operations =
                    protocol::encode_move(&seats, origin, position, outcome, self.first_move);

                self.selection = None;
                if outcome.is_over() {
                    self.finished = true;
                }
                Ok(SessionEvent::MoveReady {
                    operations,
                    outcome,
                    board,
                    capture,
                })
            }
        }
    }
}
