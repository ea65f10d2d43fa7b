//! Board-wide candidate tracking.

use std::ops::Index;

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Candidate state for every cell of the board.
///
/// Each cell carries a [`DigitSet`] of the digits that are still legal
/// placements there. A fresh board has every digit available everywhere;
/// [`place`](Self::place) is the single elimination primitive through which
/// every committed assignment flows.
///
/// # Examples
///
/// ```
/// use nonacell_core::{CandidateBoard, Digit, Position};
///
/// let mut board = CandidateBoard::new();
/// assert_eq!(board.candidates_at(Position::new(0, 0)).len(), 9);
///
/// board.place(Position::new(0, 0), Digit::D1);
///
/// // The placed cell keeps only its digit
/// assert_eq!(board.candidates_at(Position::new(0, 0)).as_single(), Some(Digit::D1));
/// // Peers lose the digit
/// assert!(!board.candidates_at(Position::new(0, 5)).contains(Digit::D1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBoard {
    cells: [DigitSet; 81],
}

impl CandidateBoard {
    /// Creates a candidate board with every digit available in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Removes a single candidate from a cell, returning `true` if it was
    /// present.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].remove(digit)
    }

    /// Records a committed placement of `digit` at `pos`.
    ///
    /// The digit is removed from every cell in the same row and column and
    /// from every cell of the containing 3x3 block; the placed cell is then
    /// pinned to exactly the placed digit.
    ///
    /// Note that placing a digit a second time within a house empties the
    /// earlier cell's candidate set rather than failing: contradictions are
    /// left for the caller's contradiction scan to observe.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        for k in 0..9 {
            self.eliminate(Position::new(pos.row(), k), digit);
            self.eliminate(Position::new(k, pos.col()), digit);
        }
        let block = pos.block_index();
        for i in 0..9 {
            self.eliminate(Position::from_block(block, i), digit);
        }
        self.cells[pos.index()] = DigitSet::from_elem(digit);
    }

    /// Returns the first cell, in row-major order, whose candidate set is
    /// empty, or `None` if every cell still has at least one candidate.
    #[must_use]
    pub fn contradicted_cell(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.index()].is_empty())
    }
}

impl Default for CandidateBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for CandidateBoard {
    type Output = DigitSet;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_all_candidates() {
        let board = CandidateBoard::new();
        for pos in Position::ALL {
            assert_eq!(board.candidates_at(pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_place_pins_the_cell() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(4, 4), Digit::D5);
        assert_eq!(
            board.candidates_at(Position::new(4, 4)).as_single(),
            Some(Digit::D5)
        );
    }

    #[test]
    fn test_place_removes_row_candidates() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(0, 0), Digit::D5);
        for col in 1..9 {
            assert!(
                !board.candidates_at(Position::new(0, col)).contains(Digit::D5),
                "cell (0, {col}) should not have digit 5"
            );
        }
    }

    #[test]
    fn test_place_removes_column_candidates() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(3, 5), Digit::D3);
        for row in 0..9 {
            if row == 3 {
                continue;
            }
            assert!(
                !board.candidates_at(Position::new(row, 5)).contains(Digit::D3),
                "cell ({row}, 5) should not have digit 3"
            );
        }
    }

    #[test]
    fn test_place_removes_block_candidates() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(4, 4), Digit::D7);
        for i in 0..9 {
            let pos = Position::from_block(4, i);
            if pos == Position::new(4, 4) {
                continue;
            }
            assert!(
                !board.candidates_at(pos).contains(Digit::D7),
                "cell {pos} should not have digit 7"
            );
        }
    }

    #[test]
    fn test_place_leaves_unrelated_cells_untouched() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(0, 0), Digit::D1);
        assert_eq!(board.candidates_at(Position::new(4, 4)), DigitSet::FULL);
        // A row peer only loses the placed digit.
        assert_eq!(board.candidates_at(Position::new(0, 8)).len(), 8);
    }

    #[test]
    fn test_conflicting_placements_empty_the_earlier_cell() {
        let mut board = CandidateBoard::new();
        board.place(Position::new(0, 0), Digit::D5);
        board.place(Position::new(0, 7), Digit::D5);

        // The second placement of 5 in row 0 strips the first cell's pin.
        assert!(board.candidates_at(Position::new(0, 0)).is_empty());
        assert_eq!(board.contradicted_cell(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_contradicted_cell_none_on_fresh_board() {
        assert_eq!(CandidateBoard::new().contradicted_cell(), None);
    }
}
