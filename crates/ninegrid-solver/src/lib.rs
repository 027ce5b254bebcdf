//! Candidate-narrowing Sudoku solving.
//!
//! This crate turns the containers of `ninegrid-core` into a solver. A
//! [`Solver`] session owns a candidate grid and iterates three passes to
//! a fixed point:
//!
//! - the deterministic [`strategy`] set proposes guaranteed-correct
//!   moves ([`OnlyPossibility`], [`FillBox`]);
//! - the [`Cleaner`] shrinks candidates with the locked-candidate rule;
//! - the hypothesis pass tests two-way ambiguities in nested sessions,
//!   pruning disproved digits and committing discovered solutions.
//!
//! Diagnostics flow through an injected [`TraceSink`]; the default is a
//! no-op and the solver behaves identically without one.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{DigitGrid, validate};
//! use ninegrid_solver::Solver;
//!
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solved = Solver::new(puzzle).solve();
//! assert!(solved.is_full());
//! assert!(validate::is_valid(&solved));
//! ```

pub use self::{
    cleaner::{Cleaner, Relation, Rule},
    solver::{Solver, SolverStats},
    strategy::{BoxedStrategy, FillBox, Move, OnlyPossibility, Strategy},
    trace::{FileTrace, LogTrace, NoopTrace, TraceSink},
};

pub mod cleaner;
mod hypothesis;
mod solver;
pub mod strategy;
pub mod trace;

#[cfg(test)]
mod testing;
