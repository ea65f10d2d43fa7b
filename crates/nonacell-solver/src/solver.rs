//! The solve entry point.

use crate::{board::Board, deduction, observer::SolveObserver, search};

/// Call-stack budget for the backtracking search.
///
/// Every guess commits at least one cell, so 81 levels can never be
/// reached on a 9x9 board; the budget turns a broken invariant into a
/// failed branch instead of a stack overflow.
const MAX_SEARCH_DEPTH: usize = 81;

/// The result of a solve attempt.
///
/// Unsolvability is a normal outcome, not an error: it is reported here
/// and through [`SolveObserver::completed`], never by panicking or by an
/// `Err` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// Every cell was filled with a digit consistent with the rules.
    Solved,
    /// The givens admit no completion; propagation and search were
    /// exhausted without finding one.
    Unsolvable,
}

/// Counters collected during a solve.
///
/// # Examples
///
/// ```
/// use nonacell_solver::{BacktrackingSolver, Board};
///
/// let mut board = Board::new("
///     _9_ 26_ _1_
///     3__ __9 4_5
///     _1_ ___ ___
///     _5_ 1_2 __3
///     4__ ___ __2
///     9__ 3_6 _7_
///     ___ ___ _5_
///     7_5 6__ __1
///     _8_ _35 _9_
/// ".parse()?);
/// let (outcome, stats) = BacktrackingSolver::new().solve(&mut board);
///
/// assert!(outcome.is_solved());
/// // This puzzle falls to propagation alone.
/// assert_eq!(stats.guesses(), 0);
/// assert!(stats.deduced() > 0);
/// # Ok::<(), nonacell_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    deduced: usize,
    guesses: usize,
    max_depth: usize,
}

impl SolveStats {
    /// Returns the number of placements made by propagation, across the
    /// top-level board and every speculative board.
    ///
    /// A placement discovered by more than one scan in the same step is
    /// counted once per discovery, matching the notifications emitted.
    #[must_use]
    pub const fn deduced(&self) -> usize {
        self.deduced
    }

    /// Returns the number of speculative values tried during search.
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// Returns the deepest search nesting reached (0 when no search ran).
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn count_deduced(&mut self, placements: usize) {
        self.deduced += placements;
    }

    pub(crate) fn count_guess(&mut self, depth: usize) {
        self.guesses += 1;
        self.max_depth = self.max_depth.max(depth + 1);
    }
}

/// Solves boards by candidate elimination followed by backtracking search.
///
/// The solve proceeds in three phases: derive candidate state from the
/// givens, run [`deduction::propagate`] to its fixed point, and — only if
/// the board is neither solved nor contradicted — search speculatively
/// over the most constrained cell, re-running the whole procedure on each
/// guess board.
///
/// # Examples
///
/// ```
/// use nonacell_solver::{BacktrackingSolver, Board};
///
/// // No givens at all: search finds some complete valid grid.
/// let mut board = Board::new(nonacell_core::DigitGrid::new());
/// let (outcome, _stats) = BacktrackingSolver::new().solve(&mut board);
///
/// assert!(outcome.is_solved());
/// assert!(board.digits().is_valid_solution());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves the board without progress notifications.
    pub fn solve(&self, board: &mut Board) -> (SolveOutcome, SolveStats) {
        self.solve_with_observer(board, &mut ())
    }

    /// Solves the board, reporting progress to the observer.
    ///
    /// The observer's [`digit_placed`](SolveObserver::digit_placed) fires
    /// for every deduced or copied-back value on the top-level board — not
    /// for the caller's givens — and
    /// [`completed`](SolveObserver::completed) fires exactly once with the
    /// final outcome. A board whose givens already contradict each other
    /// fails immediately, before any deduction runs.
    pub fn solve_with_observer(
        &self,
        board: &mut Board,
        observer: &mut dyn SolveObserver,
    ) -> (SolveOutcome, SolveStats) {
        let mut stats = SolveStats::default();
        let solved = solve_board(board, observer, 0, &mut stats);
        observer.completed(solved);

        let outcome = if solved {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Unsolvable
        };
        log::debug!(
            "solve finished: {outcome:?} ({} deduced, {} guesses, depth {})",
            stats.deduced,
            stats.guesses,
            stats.max_depth,
        );
        (outcome, stats)
    }
}

/// One full solve pass over a board: initialize, propagate, then search.
///
/// Shared between the top-level solve and the speculative boards spawned
/// during backtracking, which re-enter here one level deeper.
pub(crate) fn solve_board(
    board: &mut Board,
    observer: &mut dyn SolveObserver,
    depth: usize,
    stats: &mut SolveStats,
) -> bool {
    if depth > MAX_SEARCH_DEPTH {
        log::warn!("search depth budget exhausted, failing branch");
        return false;
    }

    board.initialize();
    if board.has_contradiction() {
        return false;
    }

    stats.count_deduced(deduction::propagate(board, observer));
    if board.is_solved() {
        return true;
    }
    if board.has_contradiction() {
        return false;
    }

    search::branch(board, observer, depth, stats)
}
