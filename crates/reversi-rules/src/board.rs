//! Board abstraction shared by both topologies.
//!
//! The rules engine and the strategies only ever talk to a board through the
//! [`Board`] trait. [`HexBoard`] and [`SquareBoard`] are two independent
//! implementations that differ in their domain, their starting pattern, their
//! neighbor directions and their corners.

pub mod hex;
pub mod square;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::coord::{Coord, Direction};
use crate::disc::{Cell, Disc};
use crate::error::{ArgumentError, ParseNameError, Result};

pub use hex::{HexBoard, HexZone};
pub use square::SquareBoard;

/// Maximum number of neighbor directions of any topology.
pub const MAX_DIRECTIONS: usize = 8;

/// Ordered neighbor directions of a cell.
pub type Directions = ArrayVec<Direction, MAX_DIRECTIONS>;

/// Snapshot of every cell of a board, keyed by coordinate.
pub type BoardSnapshot = BTreeMap<Coord, Cell>;

/// Shape of the board domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    #[default]
    Hex,
    Square,
}

impl Topology {
    /// Conventional size when none is given.
    pub fn default_size(self) -> usize {
        match self {
            Topology::Hex => 4,
            Topology::Square => 8,
        }
    }

    /// Checks that `size` is a legal size parameter for this topology.
    ///
    /// Hex boards need an edge length of at least 2; square boards need an
    /// even side length of at least 2.
    pub fn validate_size(self, size: usize) -> std::result::Result<(), ArgumentError> {
        let valid = match self {
            Topology::Hex => size >= 2,
            Topology::Square => size >= 2 && size.is_multiple_of(2),
        };
        if valid {
            Ok(())
        } else {
            Err(ArgumentError::BoardSize {
                topology: self,
                size,
            })
        }
    }

    /// Creates a board of this topology in its starting position.
    pub fn new_board(self, size: usize) -> Result<Box<dyn Board>> {
        Ok(match self {
            Topology::Hex => Box::new(HexBoard::new(size)?),
            Topology::Square => Box::new(SquareBoard::new(size)?),
        })
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Hex => write!(f, "hex"),
            Topology::Square => write!(f, "square"),
        }
    }
}

impl FromStr for Topology {
    type Err = ParseNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "hexagon" => Ok(Topology::Hex),
            "square" => Ok(Topology::Square),
            _ => Err(ParseNameError {
                kind: "topology",
                name: s.to_string(),
                expected: "hex, square",
            }),
        }
    }
}

/// Capabilities every board topology provides.
///
/// Invariant: every coordinate of the domain holds exactly one [`Cell`], so
/// `count(Empty) + count(First) + count(Second) == domain_len()`.
pub trait Board: fmt::Debug + Send + Sync {
    fn topology(&self) -> Topology;

    /// The size parameter the board was constructed with.
    fn size(&self) -> usize;

    /// Number of rows of the domain.
    fn rows(&self) -> usize;

    /// Number of cells in `row`, or `0` if the row is outside the domain.
    fn row_len(&self, row: i32) -> usize;

    /// Resets every cell to empty and places the starting pattern.
    fn initialize(&mut self);

    /// Ordered neighbor directions of `coord`.
    ///
    /// Index `i` of the returned list names the same logical direction for
    /// every cell, even where the vectors themselves differ between cells.
    fn neighbor_directions(&self, coord: Coord) -> Directions;

    /// The extremal coordinates of the domain.
    fn corners(&self) -> Vec<Coord>;

    fn is_valid(&self, coord: Coord) -> bool;

    /// Returns the state of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `coord` is outside the domain.
    fn get(&self, coord: Coord) -> Result<Cell>;

    /// Overwrites the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `coord` is outside the domain.
    fn set(&mut self, coord: Coord, cell: Cell) -> Result<()>;

    /// Number of cells currently in state `cell`.
    fn count(&self, cell: Cell) -> usize;

    /// Deep copy of this board.
    fn clone_board(&self) -> Box<dyn Board>;

    fn count_disc(&self, disc: Disc) -> usize {
        self.count(Cell::from(disc))
    }

    fn domain_len(&self) -> usize {
        (0..self.rows()).map(|row| self.row_len(row as i32)).sum()
    }

    /// Every coordinate of the domain in row-major order.
    fn coords(&self) -> Vec<Coord> {
        let mut coords = Vec::with_capacity(self.domain_len());
        for row in 0..self.rows() as i32 {
            for col in 0..self.row_len(row) as i32 {
                coords.push(Coord::new(row, col));
            }
        }
        coords
    }

    fn is_corner(&self, coord: Coord) -> bool {
        self.corners().contains(&coord)
    }

    /// Valid cells adjacent to `coord`, in neighbor-direction order.
    fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.neighbor_directions(coord)
            .into_iter()
            .map(|dir| coord + dir)
            .filter(|&n| self.is_valid(n))
            .collect()
    }

    /// Copies the state of every cell into an ordered map.
    fn snapshot(&self) -> BoardSnapshot {
        self.coords()
            .into_iter()
            .map(|coord| (coord, self.get(coord).unwrap_or_default()))
            .collect()
    }
}

impl Clone for Box<dyn Board> {
    fn clone(&self) -> Self {
        self.clone_board()
    }
}

/// Fills a board from a textual layout.
///
/// The layout lists cells in row-major order using `X` for `First`, `O` for
/// `Second` and `-` (or `.`) for empty; whitespace is ignored. This is the
/// same notation the boards use when displayed.
///
/// # Errors
///
/// Returns `InvalidArgument` if the layout holds an unknown character or its
/// cell count differs from the board's domain.
pub fn load_layout(board: &mut dyn Board, layout: &str) -> Result<()> {
    let cells = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' | 'x' => Ok(Cell::First),
            'O' | 'o' => Ok(Cell::Second),
            '-' | '.' => Ok(Cell::Empty),
            other => Err(ArgumentError::Layout(format!("unexpected character '{other}'"))),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let coords = board.coords();
    if cells.len() != coords.len() {
        return Err(ArgumentError::Layout(format!(
            "expected {} cells, found {}",
            coords.len(),
            cells.len()
        ))
        .into());
    }

    for (coord, cell) in coords.into_iter().zip(cells) {
        board.set(coord, cell)?;
    }
    Ok(())
}

/// Row-major cell storage shared by the board implementations.
///
/// Rows may have different lengths; `offsets[row]` is the index of the first
/// cell of `row` and `offsets[rows]` the total cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid {
    offsets: Vec<usize>,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(row_lens: impl IntoIterator<Item = usize>) -> Self {
        let mut offsets = vec![0];
        for len in row_lens {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + len);
        }
        let total = offsets[offsets.len() - 1];
        Grid {
            offsets,
            cells: vec![Cell::Empty; total],
        }
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        let start = *self.offsets.get(row)?;
        let end = *self.offsets.get(row + 1)?;
        (start + col < end).then_some(start + col)
    }

    pub(crate) fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub(crate) fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Cells of `row`, used for display.
    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        &self.cells[self.offsets[row]..self.offsets[row + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert!(Topology::Hex.validate_size(2).is_ok());
        assert!(Topology::Hex.validate_size(3).is_ok());
        assert!(Topology::Hex.validate_size(1).is_err());
        assert!(Topology::Square.validate_size(2).is_ok());
        assert!(Topology::Square.validate_size(8).is_ok());
        assert!(Topology::Square.validate_size(7).is_err());
        assert!(Topology::Square.validate_size(0).is_err());
    }

    #[test]
    fn test_topology_parse() {
        assert_eq!("hex".parse::<Topology>().unwrap(), Topology::Hex);
        assert_eq!("Square".parse::<Topology>().unwrap(), Topology::Square);
        assert!("triangle".parse::<Topology>().is_err());
    }

    #[test]
    fn test_grid_ragged_rows() {
        let mut grid = Grid::new([2, 3, 1]);
        assert_eq!(grid.count(Cell::Empty), 6);
        assert!(grid.set(Coord::new(1, 2), Cell::First));
        assert!(!grid.set(Coord::new(2, 1), Cell::First));
        assert!(!grid.set(Coord::new(-1, 0), Cell::First));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Cell::First));
        assert_eq!(grid.get(Coord::new(0, 2)), None);
        assert_eq!(grid.row(1), &[Cell::Empty, Cell::Empty, Cell::First]);
    }

    #[test]
    fn test_boxed_board_clone_is_independent() {
        let original: Box<dyn Board> = Topology::Square.new_board(4).unwrap();
        let mut copy = original.clone();
        copy.set(Coord::new(0, 0), Cell::First).unwrap();
        assert_eq!(original.get(Coord::new(0, 0)).unwrap(), Cell::Empty);
        assert_eq!(copy.get(Coord::new(0, 0)).unwrap(), Cell::First);
    }

    #[test]
    fn test_load_layout() {
        let mut board = SquareBoard::new(2).unwrap();
        load_layout(&mut board, "X O\n- -").unwrap();
        assert_eq!(board.get(Coord::new(0, 0)).unwrap(), Cell::First);
        assert_eq!(board.get(Coord::new(0, 1)).unwrap(), Cell::Second);
        assert_eq!(board.count(Cell::Empty), 2);

        assert!(load_layout(&mut board, "XO-").is_err());
        assert!(load_layout(&mut board, "XO-?").is_err());
    }
}
