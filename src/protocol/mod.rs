//! The external protocol surface: board encoding, typed operation records,
//! and the turn encoder/decoder.
//!
//! Serialization of the records themselves and relaying them between
//! players is the host container's job; this module only builds and reads
//! the sequences.

pub mod ops;
pub mod state;
pub mod turn;

pub use ops::{Operation, PlayerId, TURN_KEY};
pub use state::{decode, decode_turn, encode, ExternalState};
pub use turn::{decode_move, encode_move, IncomingMove, TurnContext};
