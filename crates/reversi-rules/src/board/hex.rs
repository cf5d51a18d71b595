//! Hexagonal board.
//!
//! A hex board of edge length `size` has `2 * size - 1` rows. Rows grow by
//! one cell per row down to the middle row (`2 * size - 1` cells) and shrink
//! again below it. Every row is addressed from column 0, so the same column
//! index shifts half a cell between rows and the vectors that reach a given
//! neighbor depend on which band of rows a cell lies in.

use std::fmt;

use crate::board::{Board, Directions, Grid, Topology};
use crate::coord::{Coord, Direction};
use crate::disc::Cell;
use crate::error::{ArgumentError, Result};

/// Row band of a hex cell. Each band has its own neighbor vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexZone {
    /// Rows above the middle row.
    Upper,
    /// The single widest row.
    Middle,
    /// Rows below the middle row.
    Lower,
}

// Per zone, in the order: up-left, up-right, east, down-right, down-left, west.
const UPPER_DIRECTIONS: [Direction; 6] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(0, -1),
];

const MIDDLE_DIRECTIONS: [Direction; 6] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
];

const LOWER_DIRECTIONS: [Direction; 6] = [
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
];

/// Hexagonal board with edge length `size >= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    size: usize,
    grid: Grid,
}

impl HexBoard {
    /// Creates a hex board in its starting position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size < 2`.
    pub fn new(size: usize) -> Result<Self> {
        Topology::Hex.validate_size(size)?;
        let rows = 2 * size - 1;
        let grid = Grid::new((0..rows).map(|row| Self::row_len_for(size, row)));
        let mut board = HexBoard { size, grid };
        board.initialize();
        Ok(board)
    }

    fn row_len_for(size: usize, row: usize) -> usize {
        if row < size {
            size + row
        } else {
            3 * size - 2 - row
        }
    }

    /// Returns the row band `coord` lies in.
    pub fn zone(&self, coord: Coord) -> HexZone {
        let middle = self.size as i32 - 1;
        match coord.row {
            row if row < middle => HexZone::Upper,
            row if row == middle => HexZone::Middle,
            _ => HexZone::Lower,
        }
    }

    /// The center cell of the middle row.
    pub fn center(&self) -> Coord {
        let s = self.size as i32 - 1;
        Coord::new(s, s)
    }
}

impl Board for HexBoard {
    fn topology(&self) -> Topology {
        Topology::Hex
    }

    fn size(&self) -> usize {
        self.size
    }

    fn rows(&self) -> usize {
        2 * self.size - 1
    }

    fn row_len(&self, row: i32) -> usize {
        match usize::try_from(row) {
            Ok(row) if row < self.rows() => Self::row_len_for(self.size, row),
            _ => 0,
        }
    }

    /// Places three discs of each color on the ring around the center,
    /// alternating colors.
    fn initialize(&mut self) {
        self.grid.clear();
        let center = self.center();
        for (i, dir) in MIDDLE_DIRECTIONS.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::First } else { Cell::Second };
            self.grid.set(center + *dir, cell);
        }
    }

    fn neighbor_directions(&self, coord: Coord) -> Directions {
        let dirs = match self.zone(coord) {
            HexZone::Upper => &UPPER_DIRECTIONS,
            HexZone::Middle => &MIDDLE_DIRECTIONS,
            HexZone::Lower => &LOWER_DIRECTIONS,
        };
        dirs.iter().copied().collect()
    }

    fn corners(&self) -> Vec<Coord> {
        let s = self.size as i32;
        vec![
            Coord::new(0, 0),
            Coord::new(0, s - 1),
            Coord::new(s - 1, 0),
            Coord::new(s - 1, 2 * s - 2),
            Coord::new(2 * s - 2, 0),
            Coord::new(2 * s - 2, s - 1),
        ]
    }

    fn is_valid(&self, coord: Coord) -> bool {
        let s = self.size as i32;
        if coord.row < 0 || coord.row >= 2 * s - 1 || coord.col < 0 {
            return false;
        }
        if coord.row < s {
            coord.col < s + coord.row
        } else {
            coord.col < 3 * s - 2 - coord.row
        }
    }

    fn get(&self, coord: Coord) -> Result<Cell> {
        if !self.is_valid(coord) {
            return Err(ArgumentError::OutOfBounds(coord).into());
        }
        self.grid
            .get(coord)
            .ok_or_else(|| ArgumentError::OutOfBounds(coord).into())
    }

    fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        if !self.is_valid(coord) || !self.grid.set(coord, cell) {
            return Err(ArgumentError::OutOfBounds(coord).into());
        }
        Ok(())
    }

    fn count(&self, cell: Cell) -> usize {
        self.grid.count(cell)
    }

    fn clone_board(&self) -> Box<dyn Board> {
        Box::new(self.clone())
    }
}

impl fmt::Display for HexBoard {
    /// Draws the board as a hexagon, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            let indent = self.rows() - self.row_len(row as i32);
            write!(f, "{}", " ".repeat(indent))?;
            let cells: Vec<String> = self
                .grid
                .row(row)
                .iter()
                .map(|c| c.to_char().to_string())
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
