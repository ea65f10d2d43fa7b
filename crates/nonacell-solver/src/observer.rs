//! Observer hooks for solve progress.

use nonacell_core::{Digit, Position};

/// Receives notifications while a board is being solved.
///
/// Both methods default to no-ops, so implementors override only what they
/// need. The unit type `()` is the null observer used for boards solved
/// speculatively during backtracking.
///
/// [`digit_placed`](Self::digit_placed) fires for every digit the engine
/// deduces or copies back from a successful guess — never for the caller's
/// own givens, and never for the silent insertion of a guess into a
/// speculative board. [`completed`](Self::completed) fires exactly once per
/// top-level solve.
///
/// # Examples
///
/// ```
/// use nonacell_core::{Digit, Position};
/// use nonacell_solver::SolveObserver;
///
/// #[derive(Default)]
/// struct CountPlacements(usize);
///
/// impl SolveObserver for CountPlacements {
///     fn digit_placed(&mut self, _pos: Position, _digit: Digit) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called when the engine commits a deduced or solved value to a cell.
    fn digit_placed(&mut self, pos: Position, digit: Digit) {
        let _ = (pos, digit);
    }

    /// Called once when solving finishes, with `true` on success.
    fn completed(&mut self, solved: bool) {
        let _ = solved;
    }
}

/// The null observer: ignores every notification.
impl SolveObserver for () {}
