//! Board-wide candidate tracking.

use crate::{DigitGrid, DigitSet, Grid, Position};

/// Per-cell candidate sets for one solving session.
///
/// Every cell carries the set of digits still considered legally placeable
/// there. Two invariants hold for the lifetime of a session:
///
/// - a cell holding a non-zero value in the companion [`DigitGrid`] has an
///   empty candidate set;
/// - candidate sets only ever shrink once derived: digits are removed,
///   never added back.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{CandidateGrid, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     12_ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()
/// .unwrap();
/// let candidates = CandidateGrid::from_grid(&grid);
///
/// assert!(candidates.candidates_at(Position::new(0, 0)).is_empty());
/// assert!(!candidates.admits(Position::new(0, 8), 1)); // 1 taken in the row
/// assert!(candidates.admits(Position::new(8, 8), 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: Grid<DigitSet, 9>,
}

impl CandidateGrid {
    /// Derives the initial candidates for `grid`: an empty cell admits
    /// every digit from 1 to 9 not already present in its row, column, or
    /// box; a filled cell admits nothing.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut cells = Grid::new();
        for pos in grid.positions() {
            if grid[pos] == 0 {
                let seen = grid
                    .row_set(pos.row())
                    .union(grid.column_set(pos.col()))
                    .union(grid.neighborhood_values(pos));
                cells.set(pos, DigitSet::ALL.difference(seen));
            }
        }
        Self { cells }
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        *self.cells.get(pos)
    }

    /// Returns `true` when `digit` is still a candidate at `pos`.
    #[must_use]
    pub fn admits(&self, pos: Position, digit: u8) -> bool {
        self.cells.get(pos).contains(digit)
    }

    /// Removes `digit` from the candidates at `pos`. Returns `true` if it
    /// was present.
    pub fn remove(&mut self, pos: Position, digit: u8) -> bool {
        self.cells[pos].remove(digit)
    }

    /// Updates the candidates after `digit` was written at `pos`: the
    /// digit disappears from the cell's row, column, and box, and the
    /// cell's own set is cleared. Returns the number of candidates
    /// removed.
    pub fn eliminate_for_move(&mut self, pos: Position, digit: u8) -> usize {
        let mut removed = 0;
        for i in 0..9 {
            removed += usize::from(self.remove(Position::new(pos.row(), i), digit));
            removed += usize::from(self.remove(Position::new(i, pos.col()), digit));
        }
        let center = pos.box_center();
        for row in center.row() - 1..=center.row() + 1 {
            for col in center.col() - 1..=center.col() + 1 {
                removed += usize::from(self.remove(Position::new(row, col), digit));
            }
        }
        let stale = self.cells[pos];
        removed += stale.len();
        self.cells.set(pos, DigitSet::EMPTY);
        removed
    }

    /// Returns the first position (row-major) whose candidate set
    /// satisfies the predicate.
    pub fn find(&self, predicate: impl FnMut(&DigitSet) -> bool) -> Option<Position> {
        self.cells.find(predicate)
    }

    /// Returns every position whose candidate set satisfies the
    /// predicate, in row-major order.
    pub fn find_all(&self, predicate: impl FnMut(&DigitSet) -> bool) -> Vec<Position> {
        self.cells.find_all(predicate)
    }

    /// Counts the cells whose candidate set satisfies the predicate.
    pub fn count(&self, predicate: impl FnMut(&DigitSet) -> bool) -> usize {
        self.cells.count(predicate)
    }

    /// Returns a 3x3 copy of the candidate sets of the box containing
    /// `pos`, preserving relative layout.
    #[must_use]
    pub fn box_copy(&self, pos: Position) -> Grid<DigitSet, 3> {
        self.cells.box_copy(pos)
    }
}
