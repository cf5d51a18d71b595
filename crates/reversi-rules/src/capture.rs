//! Capture resolution shared by the engine and the strategies.
//!
//! A placement captures along a direction when the ray leaving the placed
//! cell crosses one or more opponent discs and then lands on a disc of the
//! acting color. The union of all such rays is the capture set; a placement
//! is legal iff that set is non-empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coord;
use crate::disc::{Cell, Disc};
use crate::error::ParseNameError;

/// How a ray chooses its next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RayMode {
    /// Look up direction `i` in the neighbor list of the current cell at
    /// every step. On a hex board this keeps the ray on a straight line when
    /// it crosses from one row band into another.
    #[default]
    Rederive,
    /// Reuse the vector of the starting cell for the whole ray.
    Fixed,
}

impl fmt::Display for RayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RayMode::Rederive => write!(f, "rederive"),
            RayMode::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for RayMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rederive" => Ok(RayMode::Rederive),
            "fixed" => Ok(RayMode::Fixed),
            _ => Err(ParseNameError {
                kind: "ray mode",
                name: s.to_string(),
                expected: "rederive, fixed",
            }),
        }
    }
}

/// Computes the opponent discs captured along direction `index` if `disc`
/// were placed at `at`.
///
/// The cell at `at` itself is not inspected; see [`captures`].
pub fn ray(board: &dyn Board, at: Coord, index: usize, disc: Disc, mode: RayMode) -> Vec<Coord> {
    let Some(&first_step) = board.neighbor_directions(at).get(index) else {
        return Vec::new();
    };
    let own = Cell::from(disc);
    let opponent = Cell::from(disc.opposite());

    let mut collected = Vec::new();
    let mut current = at + first_step;
    while board.get(current).is_ok_and(|cell| cell == opponent) {
        collected.push(current);
        let step = match mode {
            RayMode::Rederive => match board.neighbor_directions(current).get(index) {
                Some(&step) => step,
                None => return Vec::new(),
            },
            RayMode::Fixed => first_step,
        };
        current = current + step;
    }

    if !collected.is_empty() && board.get(current).is_ok_and(|cell| cell == own) {
        collected
    } else {
        Vec::new()
    }
}

/// Computes every opponent disc that placing `disc` at `at` would flip.
///
/// Returns an empty set if `at` is outside the board or not empty.
pub fn captures(board: &dyn Board, at: Coord, disc: Disc, mode: RayMode) -> Vec<Coord> {
    if !board.get(at).is_ok_and(Cell::is_empty) {
        return Vec::new();
    }

    let mut captured = Vec::new();
    for index in 0..board.neighbor_directions(at).len() {
        for coord in ray(board, at, index, disc, mode) {
            if !captured.contains(&coord) {
                captured.push(coord);
            }
        }
    }
    captured
}

/// Returns `true` if placing `disc` at `at` captures at least one disc.
pub fn is_legal(board: &dyn Board, at: Coord, disc: Disc, mode: RayMode) -> bool {
    if !board.get(at).is_ok_and(Cell::is_empty) {
        return false;
    }
    (0..board.neighbor_directions(at).len()).any(|index| !ray(board, at, index, disc, mode).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HexBoard, SquareBoard, load_layout};

    fn empty_hex(size: usize) -> HexBoard {
        let mut board = HexBoard::new(size).unwrap();
        for coord in board.coords() {
            board.set(coord, Cell::Empty).unwrap();
        }
        board
    }

    #[test]
    fn test_square_opening_captures() {
        let board = SquareBoard::new(8).unwrap();
        // (3,3) and (4,4) are First; (3,4) and (4,3) are Second.
        let flipped = captures(&board, Coord::new(2, 4), Disc::First, RayMode::Rederive);
        assert_eq!(flipped, vec![Coord::new(3, 4)]);

        let flipped = captures(&board, Coord::new(5, 3), Disc::First, RayMode::Rederive);
        assert_eq!(flipped, vec![Coord::new(4, 3)]);

        assert!(captures(&board, Coord::new(2, 3), Disc::First, RayMode::Rederive).is_empty());
        assert!(captures(&board, Coord::new(0, 0), Disc::First, RayMode::Rederive).is_empty());
    }

    #[test]
    fn test_occupied_and_invalid_cells_capture_nothing() {
        let board = SquareBoard::new(4).unwrap();
        assert!(captures(&board, Coord::new(1, 1), Disc::Second, RayMode::Rederive).is_empty());
        assert!(captures(&board, Coord::new(9, 9), Disc::Second, RayMode::Rederive).is_empty());
        assert!(!is_legal(&board, Coord::new(1, 1), Disc::Second, RayMode::Rederive));
    }

    #[test]
    fn test_multiple_directions_union() {
        let mut board = SquareBoard::new(4).unwrap();
        load_layout(
            &mut board,
            "X - X -
             O O - -
             - - - -
             - - - -",
        )
        .unwrap();
        // (1,1) from (2,0) runs up-right onto (0,2); (1,0) runs up onto (0,0).
        let mut flipped = captures(&board, Coord::new(2, 0), Disc::First, RayMode::Rederive);
        flipped.sort();
        assert_eq!(flipped, vec![Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn test_ray_requires_closing_disc() {
        let mut board = SquareBoard::new(4).unwrap();
        load_layout(
            &mut board,
            "- O O -
             - - - -
             - - - -
             - - - -",
        )
        .unwrap();
        assert!(captures(&board, Coord::new(0, 0), Disc::First, RayMode::Rederive).is_empty());
        board.set(Coord::new(0, 3), Cell::First).unwrap();
        assert_eq!(
            captures(&board, Coord::new(0, 0), Disc::First, RayMode::Rederive),
            vec![Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_hex_opening_has_captures() {
        let board = HexBoard::new(4).unwrap();
        let legal: Vec<Coord> = board
            .coords()
            .into_iter()
            .filter(|&c| is_legal(&board, c, Disc::First, RayMode::Rederive))
            .collect();
        assert!(!legal.is_empty());
        for coord in legal {
            assert!(!captures(&board, coord, Disc::First, RayMode::Rederive).is_empty());
        }
    }

    #[test]
    fn test_rederived_ray_follows_straight_line_across_middle_row() {
        // Down-right from (1,1) on a size 4 hex: (2,2) -> (3,3) -> (4,3).
        let mut board = empty_hex(4);
        board.set(Coord::new(2, 2), Cell::Second).unwrap();
        board.set(Coord::new(3, 3), Cell::Second).unwrap();
        board.set(Coord::new(4, 3), Cell::First).unwrap();

        let at = Coord::new(1, 1);
        assert_eq!(
            captures(&board, at, Disc::First, RayMode::Rederive),
            vec![Coord::new(2, 2), Coord::new(3, 3)]
        );
        assert!(captures(&board, at, Disc::First, RayMode::Fixed).is_empty());
    }

    #[test]
    fn test_fixed_ray_keeps_starting_vector_across_middle_row() {
        // With a fixed (1,1) vector the ray reaches (4,4) instead of (4,3).
        let mut board = empty_hex(4);
        board.set(Coord::new(2, 2), Cell::Second).unwrap();
        board.set(Coord::new(3, 3), Cell::Second).unwrap();
        board.set(Coord::new(4, 4), Cell::First).unwrap();

        let at = Coord::new(1, 1);
        assert_eq!(
            captures(&board, at, Disc::First, RayMode::Fixed),
            vec![Coord::new(2, 2), Coord::new(3, 3)]
        );
        assert!(captures(&board, at, Disc::First, RayMode::Rederive).is_empty());
    }

    #[test]
    fn test_modes_agree_on_square_board() {
        let board = SquareBoard::new(8).unwrap();
        for coord in board.coords() {
            for disc in Disc::ALL {
                assert_eq!(
                    captures(&board, coord, disc, RayMode::Rederive),
                    captures(&board, coord, disc, RayMode::Fixed)
                );
            }
        }
    }
}
