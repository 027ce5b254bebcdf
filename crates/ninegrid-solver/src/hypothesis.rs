//! Enumeration of speculative placements.
//!
//! When the deterministic strategies and the cleaner both stall, the
//! solver tests hypotheses: candidate placements that are not provably
//! correct but cheap to check. Only strict two-way ambiguities qualify:
//! a single admitting cell is already handled by the deterministic
//! strategies, and wider ambiguities are too expensive to chase.

use std::collections::BTreeSet;

use ninegrid_core::{CandidateGrid, DigitGrid, Position};

use crate::strategy::{Move, admitting_cells};

/// Number of admitting cells that makes a digit worth hypothesizing over.
const AMBIGUITY: usize = 2;

/// Enumerates hypothesis moves for the current state.
///
/// For every box and every digit absent from it, the digit's admitting
/// cells inside the box are counted; exactly [`AMBIGUITY`] of them yield
/// one hypothesis per cell. The set orders moves row-major by position,
/// which fixes the order the solver tests them in.
pub(crate) fn hypothesis_moves(candidates: &CandidateGrid, grid: &DigitGrid) -> BTreeSet<Move> {
    let mut moves = BTreeSet::new();
    for center in Position::BOX_CENTERS {
        let present = grid.neighborhood_values(center);
        for digit in 1..=9 {
            if present.contains(digit) {
                continue;
            }
            let admitting = admitting_cells(candidates, center, digit);
            if admitting.len() == AMBIGUITY {
                for &position in admitting.iter() {
                    moves.insert(Move { position, digit });
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_two_way_ambiguity_yields_both_cells() {
        // In the top-left box, digit 1 is excluded from rows 0 and 1 and
        // from (2, 0), leaving exactly (2, 1) and (2, 2).
        let tester = StrategyTester::from_str(
            "
            ___ 1__ ___
            ___ ___ 1__
            4__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let moves = hypothesis_moves(tester.candidates(), tester.grid());

        assert!(moves.contains(&Move {
            position: Position::new(2, 1),
            digit: 1,
        }));
        assert!(moves.contains(&Move {
            position: Position::new(2, 2),
            digit: 1,
        }));
    }

    #[test]
    fn test_unconstrained_grid_yields_nothing() {
        // Nine admitting cells everywhere: far beyond the threshold.
        let tester = StrategyTester::from_str(
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
        assert!(hypothesis_moves(tester.candidates(), tester.grid()).is_empty());
    }

    #[test]
    fn test_digits_already_in_box_are_skipped() {
        let tester = StrategyTester::from_str(
            "
            12_ 3__ ___
            345 ___ ___
            678 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let moves = hypothesis_moves(tester.candidates(), tester.grid());
        // 3 already sits in the top-left box; no hypothesis may place
        // another 3 inside it.
        assert!(
            moves
                .iter()
                .all(|mv| !(mv.digit == 3 && mv.position.same_box(Position::new(1, 1))))
        );
    }
}
