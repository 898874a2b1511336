//! Legal destination generation.
//!
//! A piece moves along one of the four lines through its square: the rank,
//! the file, and the two diagonals. The *weight* of a line is the number of
//! occupied squares anywhere along it, counting both colors and the moving
//! piece itself. Every square at distance `1..=weight` in an open direction
//! is a legal destination: own pieces are passed over, an opposing piece may
//! be landed on (a capture) but blocks continuation beyond itself.
//!
//! Note that this admits every distance up to the weight, not only the
//! square at exactly the weight. That is the behavior of the system being
//! reproduced and is kept as is.

use rustc_hash::FxHashSet;

use crate::core::{Board, Color, Position};
use crate::error::IllegalMoveError;

/// The four undirected axes through a square, as (row, col) steps.
const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Compute every square the piece at `origin` may legally move to.
///
/// The caller is responsible for restricting `origin` to the mover's own
/// color; the generator only requires the square to be occupied.
///
/// ```
/// use loa_engine::{legal_destinations, Board, Position};
///
/// let board = Board::initial();
/// let origin: Position = "2A".parse().unwrap();
/// let moves = legal_destinations(&board, origin).unwrap();
/// assert!(moves.contains(&"2C".parse().unwrap()));
/// ```
pub fn legal_destinations(
    board: &Board,
    origin: Position,
) -> Result<FxHashSet<Position>, IllegalMoveError> {
    let Some(mover) = board.get(origin).color() else {
        return Err(IllegalMoveError::EmptyOrigin(origin));
    };

    let mut destinations = FxHashSet::default();
    for (dr, dc) in AXES {
        let weight = line_weight(board, origin, dr, dc);
        walk(board, origin, dr, dc, weight, mover, &mut destinations);
        walk(board, origin, -dr, -dc, weight, mover, &mut destinations);
    }
    Ok(destinations)
}

/// Every square holding `color` — the candidate origins for that side.
///
/// Returned in row-major order.
#[must_use]
pub fn movable_pieces(board: &Board, color: Color) -> Vec<Position> {
    board.pieces(color).collect()
}

/// Occupied-square count along the full extent of one axis through `origin`.
fn line_weight(board: &Board, origin: Position, dr: i8, dc: i8) -> u32 {
    // The origin itself is occupied and counts once.
    let mut weight = 1;
    for (dr, dc) in [(dr, dc), (-dr, -dc)] {
        let mut cur = origin;
        while let Some(next) = cur.offset(dr, dc) {
            if board.get(next).is_taken() {
                weight += 1;
            }
            cur = next;
        }
    }
    weight
}

/// Walk outward in one direction, collecting destinations within `weight`.
fn walk(
    board: &Board,
    origin: Position,
    dr: i8,
    dc: i8,
    weight: u32,
    mover: Color,
    out: &mut FxHashSet<Position>,
) {
    let mut cur = origin;
    let mut distance = 0;
    while let Some(next) = cur.offset(dr, dc) {
        distance += 1;
        let cell = board.get(next);
        if distance <= weight && cell.color() != Some(mover) {
            out.insert(next);
        }
        // An opposing piece is a legal landing square but blocks anything
        // beyond it; own pieces are passed over.
        if cell.color() == Some(mover.opponent()) {
            break;
        }
        cur = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn pos(key: &str) -> Position {
        key.parse().unwrap()
    }

    fn sorted(set: &FxHashSet<Position>) -> Vec<String> {
        let mut v: Vec<_> = set.iter().copied().collect();
        v.sort();
        v.into_iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_empty_origin_rejected() {
        let board = Board::initial();
        let err = legal_destinations(&board, pos("4D")).unwrap_err();
        assert_eq!(err, IllegalMoveError::EmptyOrigin(pos("4D")));
    }

    #[test]
    fn test_initial_white_edge_piece() {
        // White at 2A on the initial board. File A holds 6 White pieces
        // (weight 6), rank 2 holds White at 2A and 2H (weight 2), the
        // rising diagonal from 2A holds 2A and the Black piece at 8G
        // (weight 2), the falling diagonal holds 2A and Black 1B (weight 2).
        let board = Board::initial();
        let destinations = legal_destinations(&board, pos("2A")).unwrap();

        // Rank 2 (weight 2): 2B, 2C. File A (weight 6): own pieces at
        // 3A-7A are passed over, landing on 1A (distance 1) and 8A
        // (distance 6). Rising diagonal (weight 2, Black at 8G far out):
        // 3B, 4C. Falling diagonal (weight 2): capture at 1B.
        assert_eq!(
            sorted(&destinations),
            vec!["1A", "1B", "2B", "2C", "3B", "4C", "8A"]
        );
    }

    #[test]
    fn test_initial_black_edge_piece() {
        // Black at 1B: rank 1 weight 6, file B weight 2 (1B and 8B),
        // rising diagonal weight 2 (1B and 7H), falling diagonal weight 2
        // (1B and White 2A).
        let board = Board::initial();
        let destinations = legal_destinations(&board, pos("1B")).unwrap();

        // Rank 1: own pieces at 1C..1G are passed over but cannot be
        // landed on; 1A is open at distance 1 and 1H open at distance 6.
        assert!(destinations.contains(&pos("1A")));
        assert!(destinations.contains(&pos("1H")));
        // File B: weight 2 (1B and 8B), so 2B and 3B.
        assert!(destinations.contains(&pos("2B")));
        assert!(destinations.contains(&pos("3B")));
        // Falling diagonal 1B-2A: White at 2A is a capture at distance 1.
        assert!(destinations.contains(&pos("2A")));
        // Rising diagonal 1B-8H holds 1B, 7H -> weight 2: 2C and 3D open.
        assert!(destinations.contains(&pos("2C")));
        assert!(destinations.contains(&pos("3D")));

        assert_eq!(destinations.len(), 7);
    }

    #[test]
    fn test_opponent_blocks_beyond_itself() {
        // White at 4D, Black at 4E, otherwise empty rank 4.
        // Rank weight = 2: distance 1 (4C open, 4E capture) and distance 2
        // (4B open) — but 4F is behind the Black blocker.
        let mut board = Board::empty();
        board.set(pos("4D"), Cell::Taken(Color::White));
        board.set(pos("4E"), Cell::Taken(Color::Black));

        let destinations = legal_destinations(&board, pos("4D")).unwrap();
        assert!(destinations.contains(&pos("4E"))); // capture
        assert!(!destinations.contains(&pos("4F"))); // blocked
        assert!(destinations.contains(&pos("4C")));
        assert!(destinations.contains(&pos("4B")));
    }

    #[test]
    fn test_own_piece_passed_over_not_landed_on() {
        // White at 4D and 4E. Rank weight = 2; 4E is own so not a
        // destination, but 4F at distance 2 is reachable through it.
        let mut board = Board::empty();
        board.set(pos("4D"), Cell::Taken(Color::White));
        board.set(pos("4E"), Cell::Taken(Color::White));

        let destinations = legal_destinations(&board, pos("4D")).unwrap();
        assert!(!destinations.contains(&pos("4E")));
        assert!(destinations.contains(&pos("4F")));
    }

    #[test]
    fn test_all_distances_up_to_weight_admitted() {
        // White at 4D with Black at 4G and 4H: rank weight 3, so
        // distances 1, 2 and 3 are all legal — not only distance 3.
        let mut board = Board::empty();
        board.set(pos("4D"), Cell::Taken(Color::White));
        board.set(pos("4G"), Cell::Taken(Color::Black));
        board.set(pos("4H"), Cell::Taken(Color::Black));

        let destinations = legal_destinations(&board, pos("4D")).unwrap();
        // Going left, every distance up to the weight is open.
        assert!(destinations.contains(&pos("4C")));
        assert!(destinations.contains(&pos("4B")));
        assert!(destinations.contains(&pos("4A")));
        // Going right, the capture at 4G blocks 4H behind it.
        assert!(destinations.contains(&pos("4E")));
        assert!(destinations.contains(&pos("4F")));
        assert!(destinations.contains(&pos("4G")));
        assert!(!destinations.contains(&pos("4H")));
    }

    #[test]
    fn test_weight_counts_both_colors() {
        let mut board = Board::empty();
        board.set(pos("4D"), Cell::Taken(Color::White));
        board.set(pos("4A"), Cell::Taken(Color::White));
        board.set(pos("4H"), Cell::Taken(Color::Black));

        let destinations = legal_destinations(&board, pos("4D")).unwrap();
        // Rank weight 3: 4E, 4F, 4G open going right; 4C, 4B going left
        // with 4A own at distance 3.
        assert!(destinations.contains(&pos("4G")));
        assert!(!destinations.contains(&pos("4A")));
        assert!(destinations.contains(&pos("4B")));
    }

    #[test]
    fn test_determinism() {
        let board = Board::initial();
        let first = legal_destinations(&board, pos("2A")).unwrap();
        let second = legal_destinations(&board, pos("2A")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_movable_pieces() {
        let board = Board::initial();
        let white = movable_pieces(&board, Color::White);
        let black = movable_pieces(&board, Color::Black);

        assert_eq!(white.len(), 12);
        assert_eq!(black.len(), 12);
        assert!(white.contains(&pos("2A")));
        assert!(black.contains(&pos("1B")));
    }
}
