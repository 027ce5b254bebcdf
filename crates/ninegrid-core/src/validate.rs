//! Grid validation.
//!
//! Pure predicates with no state of their own; calling them any number of
//! times on the same grid yields the same answer.

use crate::{DigitGrid, Position};

/// Returns `true` when no row, column, or 3x3 box of `grid` holds the
/// same non-zero value twice.
///
/// Empty cells are ignored, so a partially filled grid can be valid.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{DigitGrid, Position, validate};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), 5);
/// grid.set(Position::new(0, 8), 5);
/// assert!(!validate::is_valid(&grid)); // two 5s in one row
/// ```
#[must_use]
pub fn is_valid(grid: &DigitGrid) -> bool {
    is_valid_with(grid, |_| true)
}

/// Like [`is_valid`], with an additional caller-supplied check that must
/// also hold.
#[must_use]
pub fn is_valid_with(grid: &DigitGrid, extra: impl FnOnce(&DigitGrid) -> bool) -> bool {
    // Columns are checked as rows of the transpose, so one duplicate scan
    // serves both orientations.
    let transposed = grid.transposed();
    for i in 0..9 {
        if has_duplicates(&grid.row(i)) || has_duplicates(&transposed.row(i)) {
            return false;
        }
    }
    for center in Position::BOX_CENTERS {
        let boxed = grid.box_copy(center);
        let mut values = [0u8; 9];
        for (slot, pos) in values.iter_mut().zip(boxed.positions()) {
            *slot = boxed[pos];
        }
        if has_duplicates(&values) {
            return false;
        }
    }
    extra(grid)
}

/// Duplicate check over an ordered sequence, ignoring empty cells.
fn has_duplicates(values: &[u8]) -> bool {
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] == values[j] && values[i] != 0 {
                return true;
            }
        }
    }
    false
}
