//! Test helpers for strategy and solver tests.

use std::str::FromStr as _;

use ninegrid_core::{CandidateGrid, DigitGrid, Position};

use crate::strategy::{Move, Strategy};

/// Parses a grid literal, panicking on malformed input.
///
/// Test-only convenience over [`DigitGrid::from_str`].
#[track_caller]
pub(crate) fn parse_grid(s: &str) -> DigitGrid {
    DigitGrid::from_str(s).unwrap()
}

/// A harness for exercising strategies against grid literals.
///
/// Holds a grid and its derived candidates; assertion methods return
/// `self` so checks chain fluently and report the caller's location on
/// failure.
#[derive(Debug)]
pub(crate) struct StrategyTester {
    grid: DigitGrid,
    candidates: CandidateGrid,
}

impl StrategyTester {
    /// Creates a tester from a grid literal; candidates are derived the
    /// same way a solver session derives them.
    #[track_caller]
    pub(crate) fn from_str(s: &str) -> Self {
        let grid = parse_grid(s);
        let candidates = CandidateGrid::from_grid(&grid);
        Self { grid, candidates }
    }

    pub(crate) fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    pub(crate) fn candidates(&self) -> &CandidateGrid {
        &self.candidates
    }

    /// Mutable candidate access for tests that need a hand-crafted state.
    pub(crate) fn candidates_mut(&mut self) -> &mut CandidateGrid {
        &mut self.candidates
    }

    /// Asserts that `strategy` proposes exactly the given move.
    #[track_caller]
    pub(crate) fn assert_proposes(
        self,
        strategy: &dyn Strategy,
        position: Position,
        digit: u8,
    ) -> Self {
        let proposed = strategy.propose(&self.candidates, &self.grid);
        assert_eq!(
            proposed,
            Some(Move { position, digit }),
            "{} proposed {proposed:?}, expected {digit} at {position}",
            strategy.name()
        );
        self
    }

    /// Asserts that `strategy` has no move for this state.
    #[track_caller]
    pub(crate) fn assert_no_move(self, strategy: &dyn Strategy) -> Self {
        let proposed = strategy.propose(&self.candidates, &self.grid);
        assert_eq!(
            proposed,
            None,
            "{} unexpectedly proposed a move",
            strategy.name()
        );
        self
    }
}
