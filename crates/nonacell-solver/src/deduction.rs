//! Candidate elimination to a fixed point.

use nonacell_core::{Digit, Position};

use crate::{board::Board, observer::SolveObserver};

/// Tracks whether a scan found exactly one place for a value.
#[derive(Debug, Clone, Copy)]
struct SingleTracker {
    count: u8,
    found: Option<(Position, Digit)>,
}

impl SingleTracker {
    const fn new() -> Self {
        Self {
            count: 0,
            found: None,
        }
    }

    fn record(&mut self, pos: Position, digit: Digit) {
        self.count += 1;
        self.found = Some((pos, digit));
    }

    fn single(self) -> Option<(Position, Digit)> {
        (self.count == 1).then_some(self.found).flatten()
    }
}

/// Deduces every cell forced by uniqueness constraints, to a fixed point.
///
/// One full scan runs two passes. The first visits each cell `(i, j)` and
/// computes three counts over the shared 0-8 axis:
///
/// - candidates remaining for the cell itself (a count of 1 is a naked
///   single),
/// - cells in row `i` still able to take the digit with value index `j`,
/// - cells in column `i` still able to take that digit.
///
/// The second pass checks each 3x3 block for digits with exactly one home
/// left. Every count of one triggers an immediate assignment, and any
/// placement restarts the whole scan from the top, since one placement can
/// expose further singles. The fixed point is reached when a complete scan
/// places nothing.
///
/// Purely deductive: no guessing, no backtracking. Each placement notifies
/// the observer; the total number of placements is returned.
///
/// # Examples
///
/// ```
/// use nonacell_core::DigitGrid;
/// use nonacell_solver::{Board, deduction};
///
/// let mut board = Board::new(DigitGrid::new());
/// board.initialize();
///
/// // An empty board admits no deduction at all.
/// assert_eq!(deduction::propagate(&mut board, &mut ()), 0);
/// ```
pub fn propagate(board: &mut Board, observer: &mut dyn SolveObserver) -> usize {
    let mut placed = 0;
    'scan: loop {
        // Cell, row, and column singles in one interleaved pass.
        for i in 0..9 {
            for j in 0..9 {
                let value = Digit::ALL[usize::from(j)];
                let mut cell = SingleTracker::new();
                let mut row = SingleTracker::new();
                let mut col = SingleTracker::new();
                for k in 0..9 {
                    probe(board, &mut cell, Position::new(i, j), Digit::ALL[usize::from(k)]);
                    probe(board, &mut row, Position::new(i, k), value);
                    probe(board, &mut col, Position::new(k, i), value);
                }
                let mut progressed = false;
                for tracker in [cell, row, col] {
                    if let Some((pos, digit)) = tracker.single() {
                        place(board, observer, pos, digit);
                        placed += 1;
                        progressed = true;
                    }
                }
                if progressed {
                    continue 'scan;
                }
            }
        }
        // Digits with a single home left within a block.
        for block in 0..9 {
            for digit in Digit::ALL {
                let mut tracker = SingleTracker::new();
                for i in 0..9 {
                    probe(board, &mut tracker, Position::from_block(block, i), digit);
                }
                if let Some((pos, digit)) = tracker.single() {
                    place(board, observer, pos, digit);
                    placed += 1;
                    continue 'scan;
                }
            }
        }
        break;
    }
    placed
}

/// Records `digit` as possible at `pos` if the cell is unassigned and the
/// candidate is still open.
fn probe(board: &Board, tracker: &mut SingleTracker, pos: Position, digit: Digit) {
    if board.digit_at(pos).is_none() && board.candidates_at(pos).contains(digit) {
        tracker.record(pos, digit);
    }
}

fn place(board: &mut Board, observer: &mut dyn SolveObserver, pos: Position, digit: Digit) {
    log::trace!("deduced {digit} at {pos}");
    board.assign(pos, digit);
    observer.digit_placed(pos, digit);
}
