//! Lattice coordinates and Moore-neighbourhood enumeration.
//!
//! The plane uses screen orientation: `y - 1` is north. Every step is a
//! checked `i64` add, so a cell on the representable boundary simply has
//! fewer neighbours instead of wrapping to the opposite edge.

use std::cmp::Ordering;

/// One coordinate on the unbounded `i64` plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `dir`, or `None` past the edge of the `i64` range.
    #[inline]
    pub fn neighbor(self, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.offset();
        Some(Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// All in-range Moore neighbours, in `Direction::ALL` order.
    #[inline]
    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            center: self,
            next: 0,
        }
    }
}

/// Row-major order: by `y`, then by `x`.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i64, i64) {
    #[inline]
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// The 8 directions of the Moore neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    NW    = 0, // (x-1, y-1)
    North = 1, // (x,   y-1)
    NE    = 2, // (x+1, y-1)
    West  = 3, // (x-1, y)
    East  = 4, // (x+1, y)
    SW    = 5, // (x-1, y+1)
    South = 6, // (x,   y+1)
    SE    = 7, // (x+1, y+1)
}

impl Direction {
    /// Enumeration order: the row above, the two sides, the row below.
    pub const ALL: [Direction; 8] = [
        Direction::NW,   Direction::North, Direction::NE,
        Direction::West,                   Direction::East,
        Direction::SW,   Direction::South, Direction::SE,
    ];

    #[inline]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::NW    => (-1, -1),
            Direction::North => (0, -1),
            Direction::NE    => (1, -1),
            Direction::West  => (-1, 0),
            Direction::East  => (1, 0),
            Direction::SW    => (-1, 1),
            Direction::South => (0, 1),
            Direction::SE    => (1, 1),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Iterator returned by [`Cell::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Cell,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            if let Some(cell) = self.center.neighbor(dir) {
                return Some(cell);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::ALL.len() - self.next))
    }
}

impl std::iter::FusedIterator for Neighbors {}
