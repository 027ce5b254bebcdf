//! Board positions and the 3x3 box geometry.

use derive_more::Display;

/// A cell position on the 9x9 board, addressed as `(row, col)`.
///
/// Both coordinates are in `0..9`. Positions order row-major, so the
/// "first" of two positions is the one a top-to-bottom, left-to-right scan
/// reaches first.
///
/// # Examples
///
/// ```
/// use ninegrid_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_center(), Position::new(4, 7));
/// assert!(pos.same_box(Position::new(5, 8)));
/// ```
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// The centers of the nine 3x3 boxes, in row-major order.
    pub const BOX_CENTERS: [Self; 9] = [
        Self { row: 1, col: 1 },
        Self { row: 1, col: 4 },
        Self { row: 1, col: 7 },
        Self { row: 4, col: 1 },
        Self { row: 4, col: 4 },
        Self { row: 4, col: 7 },
        Self { row: 7, col: 1 },
        Self { row: 7, col: 4 },
        Self { row: 7, col: 7 },
    ];

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..9`; an out-of-range
    /// position is a programming error, not a recoverable condition.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "position out of bounds");
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the center of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_center(self) -> Self {
        Self {
            row: center_line(self.row),
            col: center_line(self.col),
        }
    }

    /// Returns `true` when both positions fall in the same 3x3 box.
    #[must_use]
    pub const fn same_box(self, other: Self) -> bool {
        self.box_center().row == other.box_center().row
            && self.box_center().col == other.box_center().col
    }
}

/// Maps a coordinate to the center coordinate of its 3-cell band.
const fn center_line(i: usize) -> usize {
    match i % 3 {
        0 => i + 1,
        2 => i - 1,
        _ => i,
    }
}
