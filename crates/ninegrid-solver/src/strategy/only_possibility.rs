use ninegrid_core::{CandidateGrid, DigitGrid};

use super::{BoxedStrategy, Move, Strategy};

const NAME: &str = "only possibility";

/// Finds a cell whose candidate set has exactly one member left.
///
/// When only one digit can legally occupy a cell, placing it is always
/// correct. If several such cells exist the first one in row-major order
/// is proposed; the rest surface on later passes once candidates are
/// re-derived.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{CandidateGrid, DigitGrid};
/// use ninegrid_solver::strategy::{OnlyPossibility, Strategy};
///
/// let grid = DigitGrid::new();
/// let candidates = CandidateGrid::from_grid(&grid);
/// // A fresh grid constrains nothing, so there is no move.
/// assert!(OnlyPossibility::new().propose(&candidates, &grid).is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyPossibility;

impl OnlyPossibility {
    /// Creates a new `OnlyPossibility` strategy.
    #[must_use]
    pub const fn new() -> Self {
        OnlyPossibility
    }
}

impl Strategy for OnlyPossibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn propose(&self, candidates: &CandidateGrid, _grid: &DigitGrid) -> Option<Move> {
        let position = candidates.find(|set| set.len() == 1)?;
        let digit = candidates.candidates_at(position).single()?;
        Some(Move { position, digit })
    }
}

#[cfg(test)]
mod tests {
    use ninegrid_core::Position;

    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_proposes_single_candidate_cell() {
        // (0, 2) sees 1-8 in its row, column, and box; only 9 remains.
        StrategyTester::from_str(
            "
            12_ 345 ___
            678 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_proposes(&OnlyPossibility::new(), Position::new(0, 2), 9);
    }

    #[test]
    fn test_prefers_first_cell_in_row_major_order() {
        let mut tester = StrategyTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        // Narrow two cells down to one candidate each by hand.
        for digit in 1..=8 {
            tester.candidates_mut().remove(Position::new(5, 5), digit);
            tester.candidates_mut().remove(Position::new(2, 2), digit);
        }
        tester.assert_proposes(&OnlyPossibility::new(), Position::new(2, 2), 9);
    }

    #[test]
    fn test_no_move_on_unconstrained_grid() {
        StrategyTester::from_str(
            "
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .assert_no_move(&OnlyPossibility::new());
    }
}
