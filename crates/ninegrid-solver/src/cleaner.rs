//! Locked-candidate elimination.
//!
//! Counting admitting cells (the strategies' view) misses deductions that
//! need positional reasoning. The cleaner reasons about which line of a
//! box a digit is *forced* into: if a digit cannot occupy two of a box's
//! three local columns, it must land in the third, and can therefore be
//! struck from that column everywhere outside the box. The same holds for
//! rows. The pass only ever removes candidates; it never places a value.
//! Its effect is to unblock the deterministic strategies and the
//! hypothesis pass on later iterations.

use std::collections::BTreeSet;

use derive_more::Display;
use ninegrid_core::{CandidateGrid, DigitGrid, Position};

use crate::trace::{NoopTrace, TraceSink};

/// How a digit relates to one line of a 3x3 box.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relation {
    /// The digit is forced into this local row.
    #[display("must be in row")]
    MustBeInRow,
    /// The digit is forced into this local column.
    #[display("must be in column")]
    MustBeInColumn,
    /// The digit cannot occupy this local row.
    #[display("must not be in row")]
    MustNotBeInRow,
    /// The digit cannot occupy this local column.
    #[display("must not be in column")]
    MustNotBeInColumn,
}

/// A fact about a digit's placement within one box.
///
/// `index` is the 1-based row or column local to the box. Rules are
/// derived facts: recomputed on every pass, never persisted.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[display("{relation} {index}")]
pub struct Rule {
    /// The kind of placement constraint.
    pub relation: Relation,
    /// The 1-based line index local to the box.
    pub index: usize,
}

/// Derives the placement rules for `digit` in the box centered at
/// `center`.
///
/// A local line is excluded (`MustNotBeIn...`) when the full grid line
/// already contains the digit, or when the line has no empty cell left
/// inside the box. Exactly two exclusions force the digit into the
/// remaining line (`MustBeIn...`); three exclusions mean the box cannot
/// take the digit at all and yield no placement rule.
#[must_use]
pub fn box_rules(grid: &DigitGrid, digit: u8, center: Position) -> BTreeSet<Rule> {
    let boxed = grid.box_copy(center);
    let mut rules = BTreeSet::new();

    derive_line_rules(
        &mut rules,
        (Relation::MustNotBeInColumn, Relation::MustBeInColumn),
        |local| {
            grid.column_set(center.col() - 1 + local).contains(digit)
                || line_is_full(&boxed.column(local))
        },
    );
    derive_line_rules(
        &mut rules,
        (Relation::MustNotBeInRow, Relation::MustBeInRow),
        |local| {
            grid.row_set(center.row() - 1 + local).contains(digit)
                || line_is_full(&boxed.row(local))
        },
    );
    rules
}

/// Exclusion scan for one orientation: records the excluded lines and,
/// when exactly one line survives, the forced placement.
fn derive_line_rules(
    rules: &mut BTreeSet<Rule>,
    (must_not, must_be): (Relation, Relation),
    mut excluded: impl FnMut(usize) -> bool,
) {
    let mut open = None;
    let mut excluded_count = 0;
    for local in 0..3 {
        if excluded(local) {
            excluded_count += 1;
            rules.insert(Rule {
                relation: must_not,
                index: local + 1,
            });
        } else {
            open = Some(local + 1);
        }
    }
    if excluded_count == 2 {
        if let Some(index) = open {
            rules.insert(Rule {
                relation: must_be,
                index,
            });
        }
    }
}

fn line_is_full(line: &[u8; 3]) -> bool {
    line.iter().all(|&v| v != 0)
}

/// Shrinks candidate sets with the locked-candidate rule.
///
/// Owns its trace sink; construct with [`Cleaner::with_trace`] to watch
/// the eliminations happen.
#[derive(Debug)]
pub struct Cleaner {
    trace: Box<dyn TraceSink>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl Cleaner {
    /// Creates a cleaner with a no-op trace sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trace: Box::new(NoopTrace),
        }
    }

    /// Creates a cleaner reporting its eliminations to `sink`.
    #[must_use]
    pub fn with_trace(sink: Box<dyn TraceSink>) -> Self {
        Self { trace: sink }
    }

    /// Runs one elimination pass for every digit. Returns the number of
    /// candidates removed.
    ///
    /// # Panics
    ///
    /// Panics when `grid` has no empty cell: there is nothing left to
    /// clean, and reaching this state is a bug in the caller.
    pub fn clean(&mut self, grid: &DigitGrid, candidates: &mut CandidateGrid) -> usize {
        assert!(
            grid.count_empty() > 0,
            "clean pass invoked on a completed grid"
        );
        (1..=9)
            .map(|digit| self.clean_digit(grid, candidates, digit))
            .sum()
    }

    /// Runs the elimination pass for a single digit. Returns the number
    /// of candidates removed.
    ///
    /// Digits that are not on the board at all, or already placed nine
    /// times, offer nothing to deduce and are skipped.
    pub fn clean_digit(
        &mut self,
        grid: &DigitGrid,
        candidates: &mut CandidateGrid,
        digit: u8,
    ) -> usize {
        let count = grid.count_value(digit);
        if count == 0 || count == 9 {
            return 0;
        }
        self.trace
            .append(&format!("cleaning digit {digit}, {count} placed"));

        let mut removed = 0;
        for center in Position::BOX_CENTERS {
            if grid.neighborhood_values(center).contains(digit) {
                continue;
            }
            removed += self.clean_box(grid, candidates, digit, center);
        }
        removed
    }

    /// Applies the forced-line rules of one box.
    fn clean_box(
        &mut self,
        grid: &DigitGrid,
        candidates: &mut CandidateGrid,
        digit: u8,
        center: Position,
    ) -> usize {
        let mut removed = 0;
        for rule in box_rules(grid, digit, center) {
            let line: Vec<Position> = match rule.relation {
                Relation::MustBeInColumn => {
                    let col = center.col() - 1 + (rule.index - 1);
                    (0..9).map(|row| Position::new(row, col)).collect()
                }
                Relation::MustBeInRow => {
                    let row = center.row() - 1 + (rule.index - 1);
                    (0..9).map(|col| Position::new(row, col)).collect()
                }
                Relation::MustNotBeInRow | Relation::MustNotBeInColumn => continue,
            };
            self.trace.append(&format!(
                "digit {digit}: {rule} of box at {center}, pruning the rest of the line"
            ));
            for pos in line {
                if pos.same_box(center) {
                    continue;
                }
                if candidates.remove(pos, digit) {
                    removed += 1;
                    self.trace
                        .append(&format!("removed candidate {digit} at {pos}"));
                }
            }
        }
        removed
    }
}
