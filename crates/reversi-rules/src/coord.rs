use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Identifies a cell on the board by row and column.
///
/// Both topologies address cells as `(row, col)` with rows counted from the
/// top and columns from the left edge of each row. The derived ordering
/// compares the row first and the column second, so the minimum of a set of
/// coordinates is its upper-left-most member.
///
/// ```text
/// hex, size 3            square, size 4
///     0 1 2                0 1 2 3
///    0 1 2 3               0 1 2 3
///   0 1 2 3 4              0 1 2 3
///    0 1 2 3               0 1 2 3
///     0 1 2
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }
}

/// A single step between adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Direction { d_row, d_col }
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, dir: Direction) -> Coord {
        Coord::new(self.row + dir.d_row, self.col + dir.d_col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors that can occur when parsing a coordinate from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("invalid coordinate format: expected two integers such as '3 4' or '3,4'")]
    InvalidFormat,
    #[error("invalid coordinate component '{0}'")]
    InvalidNumber(String),
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parses `"row col"`, `"row,col"` or `"(row, col)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(CoordError::InvalidFormat);
        };

        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| CoordError::InvalidNumber(part.to_string()))
        };
        Ok(Coord::new(parse(row)?, parse(col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_direction() {
        let c = Coord::new(2, 3) + Direction::new(-1, 1);
        assert_eq!(c, Coord::new(1, 4));
    }

    #[test]
    fn test_ordering_is_upper_left_first() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 2)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 2), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("3 4".parse::<Coord>().unwrap(), Coord::new(3, 4));
        assert_eq!("3,4".parse::<Coord>().unwrap(), Coord::new(3, 4));
        assert_eq!(" (3, 4) ".parse::<Coord>().unwrap(), Coord::new(3, 4));
        assert_eq!("-1 0".parse::<Coord>().unwrap(), Coord::new(-1, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("3".parse::<Coord>(), Err(CoordError::InvalidFormat));
        assert_eq!("1 2 3".parse::<Coord>(), Err(CoordError::InvalidFormat));
        assert_eq!(
            "a 2".parse::<Coord>(),
            Err(CoordError::InvalidNumber("a".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(0, 7).to_string(), "(0, 7)");
    }
}
