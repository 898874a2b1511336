//! The rule engine: move generation, move application, win detection.
//!
//! All three are pure functions over a `Board`. The engine does not know
//! whose turn it is — the session layer enforces turn order before calling
//! in.

pub mod apply;
pub mod movegen;
pub mod win;

pub use apply::{apply, is_capture, Move};
pub use movegen::{legal_destinations, movable_pieces};
pub use win::{connected, evaluate, GameOutcome};
