//! # loa-engine
//!
//! Rule engine and turn-protocol encoder for the board game Lines of Action,
//! embedded inside a generic turn-based multiplayer client.
//!
//! ## Design Principles
//!
//! 1. **Pure functions over value boards**: every operation takes a `Board`
//!    by reference and returns a fresh one. No component holds a mutable
//!    alias to another's state; the presentation layer replaces its snapshot
//!    wholesale on each authoritative update.
//!
//! 2. **Validate locally, emit nothing on rejection**: an operation
//!    sequence is only ever produced for a move the rule engine accepted.
//!
//! 3. **The engine does not know whose turn it is**: turn order, seats and
//!    selection sequencing live in the session layer; the rules operate on
//!    boards alone.
//!
//! ## Modules
//!
//! - `core`: positions, colors, cells, the board
//! - `rules`: move generation, move application, win detection
//! - `protocol`: the key-value board encoding and typed operation records
//! - `session`: per-update context and the origin/destination state machine
//! - `error`: the crate error taxonomy

pub mod core;
pub mod error;
pub mod protocol;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Color, Position};

pub use crate::rules::{
    apply, connected, evaluate, is_capture, legal_destinations, movable_pieces, GameOutcome, Move,
};

pub use crate::protocol::{
    decode, decode_move, decode_turn, encode, encode_move, ExternalState, IncomingMove, Operation,
    PlayerId, TurnContext, TURN_KEY,
};

pub use crate::session::{GameSession, Prompt, SessionEvent, Update, UpdateContext};

pub use crate::error::{
    GameAlreadyOverError, IllegalMoveError, MalformedBoardError, ProtocolError, SessionError,
};
