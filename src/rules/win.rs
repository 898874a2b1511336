//! Win detection.
//!
//! A side wins when its remaining pieces form a single 8-directionally
//! adjacent group. Both sides are checked after every move; if a move
//! connects both sides at once, the side that just moved wins the tie.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Board, Cell, Color, Position};

/// Result of evaluating a post-move board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Won(Color),
}

impl GameOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameOutcome::Won(_))
    }
}

/// Evaluate a board after `mover` has completed a move.
///
/// The tie-break is asymmetric on purpose: a move that connects both sides
/// simultaneously wins for the mover, never the opponent.
#[must_use]
pub fn evaluate(board: &Board, mover: Color) -> GameOutcome {
    if connected(board, mover) {
        GameOutcome::Won(mover)
    } else if connected(board, mover.opponent()) {
        GameOutcome::Won(mover.opponent())
    } else {
        GameOutcome::InProgress
    }
}

/// Whether all of `color`'s pieces form one 8-connected group.
///
/// Stack-based flood fill from an arbitrary piece. A single piece is
/// trivially connected; a side with no pieces is not (it cannot win).
#[must_use]
pub fn connected(board: &Board, color: Color) -> bool {
    let Some(start) = board.pieces(color).next() else {
        return false;
    };

    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        for neighbor in neighbors(pos) {
            if board.get(neighbor) == Cell::Taken(color) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited.len() == board.piece_count(color)
}

/// The up-to-8 king-move neighbors of a square.
fn neighbors(pos: Position) -> SmallVec<[Position; 8]> {
    let mut out = SmallVec::new();
    for dr in -1..=1i8 {
        for dc in -1..=1i8 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if let Some(neighbor) = pos.offset(dr, dc) {
                out.push(neighbor);
            }
        }
    }
    out
}
