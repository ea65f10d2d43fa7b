//! Backtracking over the cell with the fewest candidates.

use nonacell_core::{Digit, Position};
use tinyvec::ArrayVec;

use crate::{
    board::Board,
    observer::SolveObserver,
    solver::{self, SolveStats},
};

/// Tries every candidate of the most constrained cell on speculative
/// boards, committing the first branch that solves.
///
/// Returns `true` if a solution was found and copied into `board`. On
/// failure the board is left untouched; the caller reports the dead end.
pub(crate) fn branch(
    board: &mut Board,
    observer: &mut dyn SolveObserver,
    depth: usize,
    stats: &mut SolveStats,
) -> bool {
    let Some(target) = select_cell(board) else {
        return false;
    };
    let candidates: ArrayVec<[u8; 9]> = board
        .candidates_at(target)
        .iter()
        .map(Digit::value)
        .collect();
    for value in candidates {
        let digit = Digit::from_value(value);
        log::trace!("guessing {digit} at {target} (depth {depth})");
        stats.count_guess(depth);

        // A guess board re-derives candidates from the committed digits
        // alone; the parent's exploratory eliminations must not leak in.
        let mut guess = Board::new(board.digits().clone());
        guess.initialize();
        guess.assign(target, digit);

        // Speculative boards report to nobody.
        if solver::solve_board(&mut guess, &mut (), depth + 1, stats) {
            for pos in Position::ALL {
                if board.digit_at(pos).is_some() {
                    continue;
                }
                let Some(solved) = guess.digit_at(pos) else {
                    continue;
                };
                board.assign(pos, solved);
                observer.digit_placed(pos, solved);
            }
            return true;
        }
    }
    false
}

/// Picks the branch cell: the first cell in row-major order with the
/// fewest candidates strictly greater than one.
///
/// The scan short-circuits on the first two-candidate cell, since two is
/// the smallest possible branching factor. Ties resolve by scan order.
fn select_cell(board: &Board) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in Position::ALL {
        let count = board.candidates_at(pos).len();
        if count > 1 && best.is_none_or(|(_, best_count)| count < best_count) {
            best = Some((pos, count));
            if count == 2 {
                break;
            }
        }
    }
    best.map(|(pos, _)| pos)
}
