//! Square grid containers and the 9x9 digit grid.
//!
//! [`Grid`] is a fixed-size square container addressed by `(row, col)`.
//! The solver uses two instantiations: [`DigitGrid`] for cell values
//! (`0` marks an empty cell, `1..=9` are filled) and `Grid<DigitSet, 9>`
//! for per-cell candidate sets. 3x3 instantiations are produced by
//! [`Grid::box_copy`] so box-local algorithms can reuse the same
//! row/column extraction code.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use derive_more::{Display as DeriveDisplay, Error};

use crate::{DigitSet, Position};

/// A square `N`x`N` grid of cells.
///
/// Dimensions are fixed for the lifetime of the grid; indices outside
/// `0..N` are a programming error and panic. The logical API addresses
/// cells as `(row, col)` regardless of storage layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T, const N: usize = 9> {
    cells: [[T; N]; N],
}

/// A 9x9 grid of cell values; `0` denotes an empty cell.
pub type DigitGrid = Grid<u8, 9>;

impl<T: Copy + Default, const N: usize> Default for Grid<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Grid<T, N> {
    /// Creates a grid with every cell set to the default value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); N]; N],
        }
    }
}

impl<T, const N: usize> Grid<T, N> {
    /// Returns a reference to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> &T {
        &self.cells[pos.row()][pos.col()]
    }

    /// Replaces the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn set(&mut self, pos: Position, value: T) {
        self.cells[pos.row()][pos.col()] = value;
    }

    /// Returns the first position (row-major) whose cell satisfies the
    /// predicate, or `None`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Position> {
        for row in 0..N {
            for col in 0..N {
                if predicate(&self.cells[row][col]) {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Returns every position whose cell satisfies the predicate, in
    /// row-major order.
    pub fn find_all(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<Position> {
        let mut found = Vec::new();
        for row in 0..N {
            for col in 0..N {
                if predicate(&self.cells[row][col]) {
                    found.push(Position::new(row, col));
                }
            }
        }
        found
    }

    /// Counts the cells satisfying the predicate.
    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| predicate(cell))
            .count()
    }

    /// Iterates over every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..N).flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
    }
}

impl<T: Copy, const N: usize> Grid<T, N> {
    /// Returns row `row` as an ordered sequence, left to right.
    ///
    /// Ordered extraction keeps duplicates visible, which is what
    /// validation needs; membership-only callers want the set accessors
    /// on digit grids instead.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside `0..N`.
    #[must_use]
    pub fn row(&self, row: usize) -> [T; N] {
        self.cells[row]
    }

    /// Returns column `col` as an ordered sequence, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside `0..N`.
    #[must_use]
    pub fn column(&self, col: usize) -> [T; N] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Returns a grid with row and column roles swapped, so column-wise
    /// code can reuse row-wise logic.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            cells: std::array::from_fn(|row| std::array::from_fn(|col| self.cells[col][row])),
        }
    }
}

impl<T: Copy> Grid<T, 9> {
    /// Returns a 3x3 copy of the box containing `pos`, preserving the
    /// relative layout of its cells.
    #[must_use]
    pub fn box_copy(&self, pos: Position) -> Grid<T, 3> {
        let center = pos.box_center();
        Grid {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| self.cells[center.row() - 1 + row][center.col() - 1 + col])
            }),
        }
    }
}

impl<const N: usize> Grid<u8, N> {
    /// Returns the non-zero values of row `row` as a set.
    #[must_use]
    pub fn row_set(&self, row: usize) -> DigitSet {
        self.row(row).into_iter().filter(|&v| v != 0).collect()
    }

    /// Returns the non-zero values of column `col` as a set.
    #[must_use]
    pub fn column_set(&self, col: usize) -> DigitSet {
        self.column(col).into_iter().filter(|&v| v != 0).collect()
    }

    /// Counts the cells holding exactly `value`.
    #[must_use]
    pub fn count_value(&self, value: u8) -> usize {
        self.count(|&v| v == value)
    }

    /// Counts the empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.count_value(0)
    }

    /// Returns `true` when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Returns the most frequent cell value occurring fewer than `N`
    /// times, with its count; `(0, 0)` when nothing qualifies.
    ///
    /// The cutoff guards against a degenerate value that dominates every
    /// line (on an empty grid, the all-zero "value" is excluded). Ties
    /// resolve to the smallest value. Diagnostic only.
    #[must_use]
    pub fn modal_value(&self) -> (u8, usize) {
        let mut counts = [0usize; 10];
        for row in 0..N {
            for col in 0..N {
                counts[usize::from(self.cells[row][col])] += 1;
            }
        }
        let mut modal = (0u8, 0usize);
        for (value, &count) in (0u8..).zip(&counts) {
            if count > modal.1 && count < N {
                modal = (value, count);
            }
        }
        modal
    }
}

impl Grid<u8, 9> {
    /// Returns the filled values of the 3x3 box containing `pos`.
    #[must_use]
    pub fn neighborhood_values(&self, pos: Position) -> DigitSet {
        let center = pos.box_center();
        let mut values = DigitSet::new();
        for row in center.row() - 1..=center.row() + 1 {
            for col in center.col() - 1..=center.col() + 1 {
                let value = self.cells[row][col];
                if value != 0 {
                    values.insert(value);
                }
            }
        }
        values
    }
}

impl<T, const N: usize> Index<Position> for Grid<T, N> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        self.get(pos)
    }
}

impl<T, const N: usize> IndexMut<Position> for Grid<T, N> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self.cells[pos.row()][pos.col()]
    }
}

/// Error parsing a grid literal.
#[derive(Debug, DeriveDisplay, Error, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// A character other than a digit, `_`, `.`, or whitespace.
    #[display("invalid character {_0:?} in grid literal")]
    InvalidCharacter(#[error(not(source))] char),
    /// The literal does not describe exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid literal: digits are filled cells, `_`, `.`, and `0`
    /// are empty cells, whitespace is ignored. Cells are listed in the
    /// order the grid renders, left to right and top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::{DigitGrid, Position};
    ///
    /// let grid: DigitGrid = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()
    /// .unwrap();
    /// assert_eq!(grid[Position::new(0, 0)], 5);
    /// assert_eq!(grid[Position::new(0, 2)], 0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(81);
        for ch in s.chars() {
            match ch {
                c if c.is_whitespace() => {}
                '_' | '.' | '0' => values.push(0),
                c @ '1'..='9' => values.push(c as u8 - b'0'),
                c => return Err(ParseGridError::InvalidCharacter(c)),
            }
        }
        if values.len() != 81 {
            return Err(ParseGridError::WrongCellCount(values.len()));
        }
        let mut grid = Self::new();
        for (i, &value) in values.iter().enumerate() {
            grid.set(Position::new(i / 9, i % 9), value);
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Renders the grid one row per line; empty cells print as two
    /// spaces, filled cells as the digit and a trailing space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let value = self.cells[row][col];
                if value == 0 {
                    f.write_str("  ")?;
                } else {
                    write!(f, "{value} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
