//! Deterministic solving strategies.
//!
//! A strategy inspects the candidate grid and the cell values and proposes
//! at most one move that is guaranteed correct: committing it never needs
//! undoing. The solver queries every strategy per pass and applies the
//! resulting batch; `None` is the no-move answer.

use std::fmt::Debug;

use derive_more::Display;
use ninegrid_core::{CandidateGrid, DigitGrid, Position};

pub use self::{fill_box::FillBox, only_possibility::OnlyPossibility};
pub(crate) use self::fill_box::admitting_cells;

mod fill_box;
mod only_possibility;

/// A proposed or applied move: `digit` placed at `position`.
///
/// Moves order by position first, so a batch of moves applies in row-major
/// order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[display("{digit} at {position}")]
pub struct Move {
    /// The cell receiving the digit.
    pub position: Position,
    /// The digit to place, in `1..=9`.
    pub digit: u8,
}

/// A deterministic solving strategy.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Proposes the next guaranteed-correct move for the given state, or
    /// `None` when the strategy does not apply.
    fn propose(&self, candidates: &CandidateGrid, grid: &DigitGrid) -> Option<Move>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the deterministic strategies in application order.
///
/// The set is closed: adding a strategy means adding a type here, not
/// subclassing anything.
#[must_use]
pub fn deterministic_strategies() -> Vec<BoxedStrategy> {
    vec![Box::new(OnlyPossibility::new()), Box::new(FillBox::new())]
}
