//! The solving session orchestrator.

use std::collections::BTreeSet;

use ninegrid_core::{CandidateGrid, DigitGrid, validate};

use crate::{
    cleaner::Cleaner,
    hypothesis,
    strategy::{self, BoxedStrategy, Move},
    trace::{NoopTrace, TraceSink},
};

/// Statistics collected during one solving session.
///
/// Tracks how often each strategy proposed a move, how many moves were
/// applied, and what the cleaner and the hypothesis pass contributed.
///
/// # Examples
///
/// ```
/// use ninegrid_core::DigitGrid;
/// use ninegrid_solver::Solver;
///
/// let solver = Solver::new(DigitGrid::new());
/// let (_, stats) = solver.solve_with_stats();
/// assert!(!stats.has_progress()); // nothing to deduce on an empty grid
/// ```
#[derive(Debug, Clone)]
pub struct SolverStats {
    applications: Vec<usize>,
    moves: usize,
    clean_passes: usize,
    candidates_pruned: usize,
    hypotheses_tested: usize,
    hypotheses_disproved: usize,
}

impl SolverStats {
    /// Returns per-strategy proposal counts, aligned with
    /// [`Solver::strategies`].
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of moves applied to the grid.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the number of cleaner passes that ran.
    #[must_use]
    pub fn clean_passes(&self) -> usize {
        self.clean_passes
    }

    /// Returns the number of candidates removed by the cleaner and by
    /// disproved hypotheses.
    #[must_use]
    pub fn candidates_pruned(&self) -> usize {
        self.candidates_pruned
    }

    /// Returns the number of hypotheses tested in nested sessions.
    #[must_use]
    pub fn hypotheses_tested(&self) -> usize {
        self.hypotheses_tested
    }

    /// Returns the number of hypotheses that ended in a contradiction and
    /// cost the tested digit its candidacy.
    #[must_use]
    pub fn hypotheses_disproved(&self) -> usize {
        self.hypotheses_disproved
    }

    /// Returns `true` if the session changed anything at all.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.moves > 0 || self.candidates_pruned > 0
    }
}

/// Solves one grid by narrowing candidates to a fixed point.
///
/// A `Solver` owns the authoritative [`CandidateGrid`] for one session.
/// Solving interleaves three passes until none makes progress:
///
/// 1. every configured [`Strategy`](crate::strategy::Strategy) proposes a
///    guaranteed-correct move and the batch is applied;
/// 2. the [`Cleaner`] shrinks candidates with the locked-candidate rule;
/// 3. two-way ambiguities are tested speculatively in nested sessions
///    (cloned grid and candidates, hypothesis pass disabled; one level
///    of lookahead only) and either committed or pruned.
///
/// The result is the best-effort grid: a puzzle beyond the strategy set
/// comes back partially filled rather than as an error.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{DigitGrid, validate};
/// use ninegrid_solver::Solver;
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
///
/// let solved = Solver::new(grid).solve();
/// assert!(solved.is_full());
/// assert!(validate::is_valid(&solved));
/// ```
#[derive(Debug)]
pub struct Solver {
    grid: DigitGrid,
    candidates: CandidateGrid,
    strategies: Vec<BoxedStrategy>,
    cleaner: Cleaner,
    trace: Box<dyn TraceSink>,
    hypotheses_enabled: bool,
}

impl Solver {
    /// Creates a session for `grid` with the deterministic strategies,
    /// the hypothesis pass enabled, and a no-op trace sink.
    ///
    /// The candidate grid is derived here: an empty cell admits every
    /// digit not present in its row, column, or box; a filled cell admits
    /// nothing.
    #[must_use]
    pub fn new(grid: DigitGrid) -> Self {
        let candidates = CandidateGrid::from_grid(&grid);
        Self {
            grid,
            candidates,
            strategies: strategy::deterministic_strategies(),
            cleaner: Cleaner::new(),
            trace: Box::new(NoopTrace),
            hypotheses_enabled: true,
        }
    }

    /// A nested session for hypothesis testing: same construction, but
    /// with the hypothesis pass disabled so lookahead stays single-level.
    fn nested(grid: DigitGrid) -> Self {
        Self::new(grid).with_hypotheses(false)
    }

    /// Replaces the strategy list.
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<BoxedStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Replaces the trace sink for this session.
    #[must_use]
    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = sink;
        self
    }

    /// Replaces the cleaner, e.g. to give it its own trace sink.
    #[must_use]
    pub fn with_cleaner(mut self, cleaner: Cleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Enables or disables the hypothesis pass for this session.
    ///
    /// With the pass disabled the session is purely deductive, the mode
    /// nested hypothesis sessions always run in.
    #[must_use]
    pub fn with_hypotheses(mut self, enabled: bool) -> Self {
        self.hypotheses_enabled = enabled;
        self
    }

    /// Returns the configured strategies in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolverStats::applications`].
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Creates a statistics object aligned with this solver's strategy
    /// order.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats {
            applications: vec![0; self.strategies.len()],
            moves: 0,
            clean_passes: 0,
            candidates_pruned: 0,
            hypotheses_tested: 0,
            hypotheses_disproved: 0,
        }
    }

    /// Solves the session grid as far as the configured passes can take
    /// it and returns the result.
    ///
    /// Cells the passes cannot decide stay empty; use
    /// [`validate::is_valid`] to judge the outcome.
    #[must_use]
    pub fn solve(self) -> DigitGrid {
        self.solve_with_stats().0
    }

    /// Like [`solve`](Self::solve), also returning session statistics.
    #[must_use]
    pub fn solve_with_stats(mut self) -> (DigitGrid, SolverStats) {
        let mut stats = self.new_stats();
        let mut grid = self.grid.clone();
        self.trace.append(&format!("new session\n{grid}"));

        if self.hypotheses_enabled {
            self.clean(&grid, &mut stats);
            self.run_hypotheses(&mut grid, &mut stats);
        }
        let mut moves = self.collect_moves(&grid, &mut stats);
        while !moves.is_empty() {
            while !moves.is_empty() {
                while !moves.is_empty() {
                    self.apply_batch(&mut grid, &moves, &mut stats);
                    moves = self.collect_moves(&grid, &mut stats);
                }
                self.clean(&grid, &mut stats);
                moves = self.collect_moves(&grid, &mut stats);
            }
            if self.hypotheses_enabled {
                self.run_hypotheses(&mut grid, &mut stats);
            }
            self.clean(&grid, &mut stats);
            moves = self.collect_moves(&grid, &mut stats);
        }

        self.trace.append(&format!(
            "session done, {} empty cells left\n{grid}",
            grid.count_empty()
        ));
        (grid, stats)
    }

    /// Queries every strategy once and gathers the proposals.
    ///
    /// The batch is a set: duplicate proposals collapse. Conflicting
    /// proposals for the same cell cannot arise from consistent
    /// candidates and are rejected when the batch is applied.
    fn collect_moves(&self, grid: &DigitGrid, stats: &mut SolverStats) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        for (i, strategy) in self.strategies.iter().enumerate() {
            if let Some(mv) = strategy.propose(&self.candidates, grid) {
                stats.applications[i] += 1;
                moves.insert(mv);
            }
        }
        moves
    }

    /// Writes every move of the batch and keeps the candidates in step.
    fn apply_batch(&mut self, grid: &mut DigitGrid, moves: &BTreeSet<Move>, stats: &mut SolverStats) {
        debug_assert_eq!(
            moves
                .iter()
                .map(|mv| mv.position)
                .collect::<BTreeSet<_>>()
                .len(),
            moves.len(),
            "conflicting proposals for a single cell"
        );
        for mv in moves {
            debug_assert_eq!(grid[mv.position], 0, "proposal overwrites a filled cell");
            grid.set(mv.position, mv.digit);
            self.candidates.eliminate_for_move(mv.position, mv.digit);
            stats.moves += 1;
            self.trace.append(&format!("placing {mv}"));
        }
    }

    /// One cleaner pass, skipped once the grid is complete (cleaning a
    /// completed grid is a contract violation of [`Cleaner::clean`]).
    fn clean(&mut self, grid: &DigitGrid, stats: &mut SolverStats) {
        if grid.is_full() {
            return;
        }
        stats.clean_passes += 1;
        stats.candidates_pruned += self.cleaner.clean(grid, &mut self.candidates);
    }

    /// Tests every hypothesis in a nested single-level session and folds
    /// the outcome back into this session.
    fn run_hypotheses(&mut self, grid: &mut DigitGrid, stats: &mut SolverStats) {
        let moves = hypothesis::hypothesis_moves(&self.candidates, grid);
        if moves.is_empty() {
            self.trace.append("hypothesis pass: nothing to test");
            return;
        }
        for mv in moves {
            stats.hypotheses_tested += 1;
            let mut scenario = grid.clone();
            scenario.set(mv.position, mv.digit);
            let outcome = Solver::nested(scenario).solve();

            let unfilled = outcome.count_empty();
            let valid = validate::is_valid(&outcome);
            if unfilled > 0 && !valid {
                // Dead end: the digit provably cannot go there.
                stats.hypotheses_disproved += 1;
                if self.candidates.remove(mv.position, mv.digit) {
                    stats.candidates_pruned += 1;
                }
                self.trace.append(&format!("hypothesis {mv} disproved"));
            } else if unfilled == 0 && valid {
                self.trace
                    .append(&format!("hypothesis {mv} completes the grid"));
                self.apply_batch(grid, &BTreeSet::from([mv]), stats);
                return;
            } else {
                self.trace.append(&format!("hypothesis {mv} inconclusive"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ninegrid_core::Position;

    use super::*;
    use crate::testing::parse_grid;

    fn classic_puzzle() -> DigitGrid {
        parse_grid(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        )
    }

    fn classic_solution() -> DigitGrid {
        parse_grid(
            "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        ",
        )
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let solved = Solver::new(classic_puzzle()).solve();
        assert_eq!(solved, classic_solution());
        assert!(validate::is_valid(&solved));
    }

    #[test]
    fn test_never_overwrites_input_cells() {
        let puzzle = classic_puzzle();
        let solved = Solver::new(puzzle.clone()).solve();
        for pos in puzzle.positions() {
            if puzzle[pos] != 0 {
                assert_eq!(solved[pos], puzzle[pos], "input cell {pos} changed");
            }
        }
    }

    #[test]
    fn test_complete_grid_round_trips_unchanged() {
        let solution = classic_solution();
        let (solved, stats) = Solver::new(solution.clone()).solve_with_stats();
        assert_eq!(solved, solution);
        assert!(validate::is_valid(&solved));
        assert!(!stats.has_progress());
    }

    #[test]
    fn test_single_empty_cell_is_filled_by_only_possibility() {
        // Scenario: one hole in a finished grid. The lone candidate must
        // be proposed by OnlyPossibility directly, and the solver commits
        // it without help from the cleaner or hypothesis passes.
        let mut puzzle = classic_solution();
        puzzle.set(Position::new(4, 4), 0);

        let solver = Solver::new(puzzle.clone());
        let proposal = solver.strategies()[0].propose(
            &ninegrid_core::CandidateGrid::from_grid(&puzzle),
            &puzzle,
        );
        assert_eq!(
            proposal,
            Some(Move {
                position: Position::new(4, 4),
                digit: 5,
            })
        );

        let (solved, stats) = solver.solve_with_stats();
        assert_eq!(solved, classic_solution());
        assert_eq!(stats.moves(), 1);
        assert_eq!(stats.candidates_pruned(), 0);
        assert_eq!(stats.hypotheses_tested(), 0);
    }

    #[test]
    fn test_empty_grid_comes_back_unchanged() {
        // Scenario: a fully empty grid constrains nothing. Every cell
        // keeps all nine candidates, no pass makes progress, and the
        // best-effort result is the input itself.
        let empty = DigitGrid::new();
        let candidates = CandidateGrid::from_grid(&empty);
        assert_eq!(candidates.count(|set| set.len() == 9), 81);

        let (solved, stats) = Solver::new(empty.clone()).solve_with_stats();
        assert_eq!(solved, empty);
        assert!(!stats.has_progress());
        assert_eq!(stats.hypotheses_tested(), 0);

        // The modal-value diagnostic excludes the dominating all-zero
        // value on this grid.
        assert_eq!(empty.modal_value(), (0, 0));
    }

    #[test]
    fn test_underdetermined_puzzle_returns_best_effort() {
        // Two clues cannot determine anything; the solver must stop at
        // the fixed point without inventing moves or erroring.
        let puzzle = parse_grid(
            "
            1__ ___ ___
            ___ 2__ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        );
        let solved = Solver::new(puzzle.clone()).solve();
        assert_eq!(solved, puzzle);
        assert!(validate::is_valid(&solved));
    }

    #[test]
    fn test_validity_is_preserved() {
        let solved = Solver::new(classic_puzzle()).solve();
        assert!(validate::is_valid(&solved));
    }

    /// A valid 36-clue puzzle (same unique solution as the classic one)
    /// that the deterministic strategies and the cleaner cannot finish on
    /// their own.
    fn stalling_puzzle() -> DigitGrid {
        parse_grid(
            "
            _3_ __8 9_2
            6__ 1__ 3__
            ___ __2 56_
            85_ 761 423
            ___ __3 _9_
            __3 ___ 8_6
            _6_ 53_ ___
            287 _19 __5
            34_ 2__ __9
        ",
        )
    }

    #[test]
    fn test_deterministic_passes_alone_stall() {
        // Without the hypothesis pass the session reaches a fixed point
        // with cells left over, and reports that as a best-effort grid
        // rather than an error.
        let (stalled, stats) = Solver::new(stalling_puzzle())
            .with_hypotheses(false)
            .solve_with_stats();
        assert!(stalled.count_empty() > 0);
        assert!(validate::is_valid(&stalled));
        assert!(stats.has_progress());
        assert_eq!(stats.hypotheses_tested(), 0);
    }

    #[test]
    fn test_hypothesis_pass_resolves_the_stall() {
        // The full pipeline must test hypotheses at least once and
        // converge to the unique completion.
        let (solved, stats) = Solver::new(stalling_puzzle()).solve_with_stats();
        assert_eq!(solved, classic_solution());
        assert!(validate::is_valid(&solved));
        assert!(stats.hypotheses_tested() > 0);
    }

    #[test]
    fn test_disproved_hypotheses_prune_candidates() {
        // On this puzzle one of the tested placements drives its nested
        // session into an invalid grid and is pruned; a later hypothesis
        // completes its nested session and is committed. Both arms feed
        // the statistics.
        let (solved, stats) = Solver::new(stalling_puzzle()).solve_with_stats();
        assert_eq!(solved, classic_solution());
        assert!(stats.hypotheses_disproved() > 0);
        assert!(stats.candidates_pruned() > 0);
        // The committed placement counts as a regular move; every empty
        // cell of the puzzle was filled exactly once.
        assert_eq!(stats.moves(), 45);
    }
}
