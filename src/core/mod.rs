//! Core value types: positions, colors, cells, and the board.
//!
//! Everything here is a plain immutable-by-convention value. The rule
//! modules operate on these types without holding any hidden state.

pub mod board;
pub mod position;

pub use board::{Board, Cell, Color};
pub use position::{Position, BOARD_SIZE};
