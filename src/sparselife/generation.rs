//! Immutable alive-cell snapshots.

use super::neighbors::Cell;

/// All alive cells at one point in simulated time.
///
/// Cells are kept sorted in row-major order with duplicates removed, so two
/// generations with the same members compare equal and print identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation {
    cells: Vec<Cell>,
}

impl Generation {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a generation from any collection of coordinates; repeats collapse.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let first = self.cells.first()?;
        let last = self.cells.last()?;
        let (min_x, max_x) = self
            .cells
            .iter()
            .fold((first.x, first.x), |(lo, hi), c| (lo.min(c.x), hi.max(c.x)));
        Some((min_x, first.y, max_x, last.y))
    }

    /// Shift every cell by `(dx, dy)`; `None` if any cell would leave the plane.
    pub fn translate(&self, dx: i64, dy: i64) -> Option<Generation> {
        let cells = self
            .cells
            .iter()
            .map(|c| Some(Cell::new(c.x.checked_add(dx)?, c.y.checked_add(dy)?)))
            .collect::<Option<Vec<_>>>()?;
        // A uniform shift keeps row-major order and uniqueness.
        Some(Generation { cells })
    }
}

impl<C: Into<Cell>> FromIterator<C> for Generation {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Generation {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
