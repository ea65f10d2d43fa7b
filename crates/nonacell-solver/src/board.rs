//! Solver board state.

use nonacell_core::{CandidateBoard, Digit, DigitGrid, DigitSet, Position};

/// The state a solve operates on: committed digits plus candidate state.
///
/// A board is created from an input grid and is inert until
/// [`initialize`](Self::initialize) derives the candidate state from the
/// givens. All mutation goes through [`assign`](Self::assign), which keeps
/// the row/column/block elimination invariant true by construction: after
/// assigning a digit, no peer of the cell still carries that digit as a
/// candidate.
///
/// During backtracking, guess boards are built from a parent's committed
/// grid only (`Board::new(parent.digits().clone())`) and re-derive their
/// candidates through initialization. Candidate state is never copied
/// between boards; eliminations always stem from committed values alone.
///
/// # Examples
///
/// ```
/// use nonacell_core::{Digit, Position};
/// use nonacell_solver::Board;
///
/// let mut board = Board::new("
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// ".parse()?);
/// board.initialize();
///
/// assert_eq!(board.digit_at(Position::new(0, 0)), Some(Digit::D5));
/// // Givens eliminate candidates from their peers.
/// assert!(!board.candidates_at(Position::new(0, 2)).contains(Digit::D5));
/// # Ok::<(), nonacell_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    digits: DigitGrid,
    candidates: CandidateBoard,
    initialized: bool,
}

impl Board {
    /// Creates a fresh, uninitialized board from an input grid.
    #[must_use]
    pub const fn new(input: DigitGrid) -> Self {
        Self {
            digits: input,
            candidates: CandidateBoard::new(),
            initialized: false,
        }
    }

    /// Derives candidate state from the input grid.
    ///
    /// Starts from a full candidate cube and an empty committed grid, then
    /// replays every given through [`assign`](Self::assign). Idempotent: a
    /// second call is a no-op, so repeated solve attempts do not disturb
    /// the derived state.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        let input = std::mem::take(&mut self.digits);
        self.candidates = CandidateBoard::new();
        for pos in Position::ALL {
            if let Some(digit) = input[pos] {
                self.assign(pos, digit);
            }
        }
        self.initialized = true;
    }

    /// Returns `true` if candidate state has been derived from the input.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the committed digit of a cell, or `None` if it is unknown.
    #[must_use]
    pub fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.digits[pos]
    }

    /// Returns the committed digit grid.
    #[must_use]
    pub const fn digits(&self) -> &DigitGrid {
        &self.digits
    }

    /// Consumes the board and returns the committed digit grid.
    #[must_use]
    pub fn into_digits(self) -> DigitGrid {
        self.digits
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// Commits `digit` at `pos` and eliminates it from all peers.
    ///
    /// This is the single mutation primitive: every given, deduction, and
    /// guess goes through it. Notification of observers is the caller's
    /// concern; the board itself carries no callback plumbing.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        self.digits[pos] = Some(digit);
        self.candidates.place(pos, digit);
    }

    /// Returns `true` if every cell has a committed digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.digits.is_complete()
    }

    /// Returns `true` if some cell has no remaining candidate.
    ///
    /// Assigned cells are scanned too: their sole candidate is cleared
    /// when a conflicting peer assignment lands, which is how duplicate
    /// givens surface before any search begins.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.candidates.contradicted_cell().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::new(
            "
                _9_ 26_ _1_
                3__ __9 4_5
                _1_ ___ ___
                _5_ 1_2 __3
                4__ ___ __2
                9__ 3_6 _7_
                ___ ___ _5_
                7_5 6__ __1
                _8_ _35 _9_
            "
            .parse()
            .unwrap(),
        )
    }

    #[test]
    fn test_initialize_applies_givens() {
        let mut board = sample_board();
        board.initialize();

        assert!(board.is_initialized());
        assert_eq!(board.digit_at(Position::new(0, 1)), Some(Digit::D9));
        assert_eq!(
            board.candidates_at(Position::new(0, 1)).as_single(),
            Some(Digit::D9)
        );
        // A given eliminates its digit from row, column, and block peers.
        assert!(!board.candidates_at(Position::new(0, 5)).contains(Digit::D9));
        assert!(!board.candidates_at(Position::new(5, 1)).contains(Digit::D9));
        assert!(!board.candidates_at(Position::new(2, 2)).contains(Digit::D9));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut once = sample_board();
        once.initialize();

        let mut twice = sample_board();
        twice.initialize();
        twice.initialize();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_assign_maintains_elimination_invariant() {
        let mut board = Board::new(DigitGrid::new());
        board.initialize();
        board.assign(Position::new(4, 4), Digit::D5);

        for k in 0..9 {
            if k != 4 {
                assert!(!board.candidates_at(Position::new(4, k)).contains(Digit::D5));
                assert!(!board.candidates_at(Position::new(k, 4)).contains(Digit::D5));
            }
        }
        for i in 0..9 {
            let pos = Position::from_block(4, i);
            if pos != Position::new(4, 4) {
                assert!(!board.candidates_at(pos).contains(Digit::D5));
            }
        }
        assert_eq!(
            board.candidates_at(Position::new(4, 4)).as_single(),
            Some(Digit::D5)
        );
    }

    #[test]
    fn test_duplicate_givens_contradict_after_initialization() {
        // Two 5s in row 0.
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        grid[Position::new(0, 6)] = Some(Digit::D5);

        let mut board = Board::new(grid);
        board.initialize();
        assert!(board.has_contradiction());
    }

    #[test]
    fn test_fresh_board_has_no_contradiction() {
        let mut board = sample_board();
        board.initialize();
        assert!(!board.has_contradiction());
        assert!(!board.is_solved());
    }
}
