//! Square board.

use std::fmt;

use crate::board::{Board, Directions, Grid, Topology};
use crate::coord::{Coord, Direction};
use crate::disc::Cell;
use crate::error::{ArgumentError, Result};

const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
];

/// `size × size` board with an even `size >= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareBoard {
    size: usize,
    grid: Grid,
}

impl SquareBoard {
    /// Creates a square board in its starting position.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is odd or smaller than 2.
    pub fn new(size: usize) -> Result<Self> {
        Topology::Square.validate_size(size)?;
        let mut board = SquareBoard {
            size,
            grid: Grid::new(std::iter::repeat_n(size, size)),
        };
        board.initialize();
        Ok(board)
    }
}

impl Board for SquareBoard {
    fn topology(&self) -> Topology {
        Topology::Square
    }

    fn size(&self) -> usize {
        self.size
    }

    fn rows(&self) -> usize {
        self.size
    }

    fn row_len(&self, row: i32) -> usize {
        if row >= 0 && (row as usize) < self.size {
            self.size
        } else {
            0
        }
    }

    /// Places the four central discs, equal colors on each diagonal.
    fn initialize(&mut self) {
        self.grid.clear();
        let h = (self.size / 2) as i32;
        self.grid.set(Coord::new(h - 1, h - 1), Cell::First);
        self.grid.set(Coord::new(h - 1, h), Cell::Second);
        self.grid.set(Coord::new(h, h - 1), Cell::Second);
        self.grid.set(Coord::new(h, h), Cell::First);
    }

    fn neighbor_directions(&self, _coord: Coord) -> Directions {
        DIRECTIONS.iter().copied().collect()
    }

    fn corners(&self) -> Vec<Coord> {
        let last = self.size as i32 - 1;
        vec![
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ]
    }

    fn is_valid(&self, coord: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coord.row) && (0..n).contains(&coord.col)
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

impl fmt::Display for SquareBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
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
