//! The committed 9x9 grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 grid of optional digits.
///
/// This is the committed solution state: `None` means the cell is still
/// unknown. Cells are addressed by [`Position`] through the `Index` and
/// `IndexMut` implementations.
///
/// # Textual format
///
/// Grids parse from strings of 81 cells: digits `1`-`9` are filled cells,
/// `_`, `.` and `0` are blanks, and all whitespace is ignored, so grids can
/// be laid out freely:
///
/// ```
/// use nonacell_core::{Digit, DigitGrid, Position};
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
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// # Ok::<(), nonacell_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid with every cell unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a grid from raw cell values, with `0` denoting a blank cell.
    ///
    /// Rows are given top to bottom, cells within a row left to right.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] if any value is outside 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonacell_core::DigitGrid;
    ///
    /// let mut values = [[0u8; 9]; 9];
    /// values[4][4] = 5;
    /// let grid = DigitGrid::try_from_values(values)?;
    /// assert_eq!(grid.filled_count(), 1);
    ///
    /// values[0][0] = 12;
    /// assert!(DigitGrid::try_from_values(values).is_err());
    /// # Ok::<(), nonacell_core::InvalidCellValue>(())
    /// ```
    pub fn try_from_values(values: [[u8; 9]; 9]) -> Result<Self, InvalidCellValue> {
        let mut grid = Self::new();
        for (row, row_values) in (0..).zip(&values) {
            for (col, &value) in (0..).zip(row_values) {
                if value == 0 {
                    continue;
                }
                let digit = Digit::try_from_value(value)
                    .ok_or(InvalidCellValue { row, col, value })?;
                grid[Position::new(row, col)] = Some(digit);
            }
        }
        Ok(grid)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is a valid complete sudoku solution:
    /// every cell filled and every row, column, and 3x3 block containing
    /// each digit 1-9 exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonacell_core::DigitGrid;
    ///
    /// let solved: DigitGrid = "
    ///     594 263 817
    ///     376 819 425
    ///     218 574 639
    ///     857 142 963
    ///     463 957 182
    ///     921 386 574
    ///     649 721 358
    ///     735 698 241
    ///     182 435 796
    /// "
    /// .parse()?;
    /// assert!(solved.is_valid_solution());
    /// assert!(!DigitGrid::new().is_valid_solution());
    /// # Ok::<(), nonacell_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        for i in 0..9 {
            let row = self.house_digits(|k| Position::new(i, k));
            let col = self.house_digits(|k| Position::new(k, i));
            let block = self.house_digits(|k| Position::from_block(i, k));
            if row != DigitSet::FULL || col != DigitSet::FULL || block != DigitSet::FULL {
                return false;
            }
        }
        true
    }

    /// Collects the digits of one row, column, or block.
    fn house_digits<F>(&self, cell: F) -> DigitSet
    where
        F: Fn(u8) -> Position,
    {
        (0..9).filter_map(|k| self[cell(k)]).collect()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut cells = 0_usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '_' | '.' | '0' => None,
                '1'..='9' => {
                    let digit = character
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseGridError::UnexpectedCharacter { character })?;
                    Some(digit)
                }
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            if cells < 81 {
                grid.cells[cells] = cell;
            }
            cells += 1;
        }
        if cells != 81 {
            return Err(ParseGridError::WrongCellCount { cells });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..9 {
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contained a character that is neither a digit, a blank
    /// marker, nor whitespace.
    #[display("unexpected character {character:?} in grid")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {cells}")]
    WrongCellCount {
        /// The number of cells found.
        cells: usize,
    },
}

/// Error for a raw cell value outside the range 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("value {value} at row {row}, column {col} is outside 1-9")]
pub struct InvalidCellValue {
    /// Row of the offending cell (0-8).
    row: u8,
    /// Column of the offending cell (0-8).
    col: u8,
    /// The out-of-range value.
    value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "
        594 263 817
        376 819 425
        218 574 639
        857 142 963
        463 957 182
        921 386 574
        649 721 358
        735 698 241
        182 435 796
    ";

    #[test]
    fn test_parse_and_index() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(0, 1)], Some(Digit::D3));
        assert_eq!(grid[Position::new(0, 2)], None);
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_accepts_all_blank_markers() {
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, DigitGrid::new());
        assert_eq!(underscores, DigitGrid::new());
    }

    #[test]
    fn test_parse_rejects_unexpected_character() {
        let result = "x".repeat(81).parse::<DigitGrid>();
        assert_eq!(
            result,
            Err(ParseGridError::UnexpectedCharacter { character: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { cells: 3 })
        );
        assert_eq!(
            "_".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { cells: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        let reparsed: DigitGrid = grid.to_string().parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_try_from_values() {
        let mut values = [[0u8; 9]; 9];
        values[0][0] = 5;
        values[8][8] = 9;
        let grid = DigitGrid::try_from_values(values).unwrap();
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D9));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_try_from_values_rejects_out_of_range() {
        let mut values = [[0u8; 9]; 9];
        values[3][7] = 10;
        let error = DigitGrid::try_from_values(values).unwrap_err();
        assert_eq!(
            error.to_string(),
            "value 10 at row 3, column 7 is outside 1-9"
        );
    }

    #[test]
    fn test_is_valid_solution() {
        let solved: DigitGrid = SOLVED.parse().unwrap();
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn test_is_valid_solution_rejects_incomplete() {
        assert!(!DigitGrid::new().is_valid_solution());
    }

    #[test]
    fn test_is_valid_solution_rejects_duplicate() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        // Introduce a duplicate in row 0 (and column 1).
        grid[Position::new(0, 0)] = grid[Position::new(0, 1)];
        assert!(!grid.is_valid_solution());
    }
}
