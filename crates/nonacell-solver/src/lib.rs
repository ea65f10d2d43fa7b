//! The Nonacell solving engine.
//!
//! Solving proceeds in two phases over a [`Board`]:
//!
//! 1. **Candidate elimination** ([`deduction`]): every cell forced by
//!    uniqueness constraints — naked singles per cell, single homes for a
//!    digit within a row, column, or 3x3 block — is committed, restarting
//!    the scan after each placement until a fixed point is reached.
//! 2. **Backtracking search** ([`BacktrackingSolver`]): if cells remain
//!    open, the most constrained cell is guessed, each candidate tried on
//!    a speculative board that re-runs the whole procedure, and the first
//!    branch that completes is committed.
//!
//! Progress is reported through the [`SolveObserver`] hooks; an
//! unsolvable puzzle is a normal [`SolveOutcome`], not an error.
//!
//! # Examples
//!
//! ```
//! use nonacell_solver::{BacktrackingSolver, Board};
//!
//! let mut board = Board::new("
//!     _9_ 26_ _1_
//!     3__ __9 4_5
//!     _1_ ___ ___
//!     _5_ 1_2 __3
//!     4__ ___ __2
//!     9__ 3_6 _7_
//!     ___ ___ _5_
//!     7_5 6__ __1
//!     _8_ _35 _9_
//! ".parse()?);
//!
//! let (outcome, _stats) = BacktrackingSolver::new().solve(&mut board);
//!
//! assert!(outcome.is_solved());
//! assert!(board.digits().is_valid_solution());
//! # Ok::<(), nonacell_core::ParseGridError>(())
//! ```

pub mod board;
pub mod deduction;
pub mod observer;
mod search;
pub mod solver;

pub use self::{
    board::Board,
    observer::SolveObserver,
    solver::{BacktrackingSolver, SolveOutcome, SolveStats},
};
