use ninegrid_core::{CandidateGrid, DigitGrid, Position};
use tinyvec::ArrayVec;

use super::{BoxedStrategy, Move, Strategy};

const NAME: &str = "fill box";

/// Finds a digit with exactly one admitting cell left in some box.
///
/// For each box and each digit not yet placed in it, the strategy counts
/// the box cells whose candidate set still admits the digit. A single
/// admitting cell means the digit has nowhere else to go in that box, so
/// placing it there is always correct.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{CandidateGrid, DigitGrid};
/// use ninegrid_solver::strategy::{FillBox, Strategy};
///
/// let grid = DigitGrid::new();
/// let candidates = CandidateGrid::from_grid(&grid);
/// assert!(FillBox::new().propose(&candidates, &grid).is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FillBox;

impl FillBox {
    /// Creates a new `FillBox` strategy.
    #[must_use]
    pub const fn new() -> Self {
        FillBox
    }
}

impl Strategy for FillBox {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn propose(&self, candidates: &CandidateGrid, grid: &DigitGrid) -> Option<Move> {
        for center in Position::BOX_CENTERS {
            let present = grid.neighborhood_values(center);
            for digit in 1..=9 {
                if present.contains(digit) {
                    continue;
                }
                let admitting = admitting_cells(candidates, center, digit);
                if let [position] = admitting.as_slice() {
                    return Some(Move {
                        position: *position,
                        digit,
                    });
                }
            }
        }
        None
    }
}

/// Absolute positions inside the box at `center` whose candidate sets
/// admit `digit`, in row-major order.
pub(crate) fn admitting_cells(
    candidates: &CandidateGrid,
    center: Position,
    digit: u8,
) -> ArrayVec<[Position; 9]> {
    let boxed = candidates.box_copy(center);
    let mut cells = ArrayVec::new();
    for pos in boxed.positions() {
        if boxed[pos].contains(digit) {
            cells.push(Position::new(
                center.row() - 1 + pos.row(),
                center.col() - 1 + pos.col(),
            ));
        }
    }
    cells
}
