//! Core data structures for the ninegrid solver.
//!
//! This crate provides the containers every other ninegrid component is
//! built on:
//!
//! - [`Grid`]: a fixed-size square container with row/column/box
//!   extraction, with [`DigitGrid`] as the 9x9 cell-value instantiation
//!   (`0` = empty cell);
//! - [`DigitSet`]: a bitmask set of digits 1-9;
//! - [`CandidateGrid`]: per-cell candidate sets for one solving session;
//! - [`Position`]: `(row, col)` coordinates and the 3x3 box geometry;
//! - [`validate`]: pure row/column/box duplicate checking.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{CandidateGrid, DigitGrid, Position, validate};
//!
//! let grid: DigitGrid = "
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
//! assert!(validate::is_valid(&grid));
//!
//! let candidates = CandidateGrid::from_grid(&grid);
//! assert!(candidates.candidates_at(Position::new(0, 0)).is_empty());
//! ```

pub mod candidates;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod validate;

pub use self::{
    candidates::CandidateGrid,
    digit_set::DigitSet,
    grid::{DigitGrid, Grid, ParseGridError},
    position::Position,
};
