//! Core data structures for the Nonacell sudoku engine.
//!
//! This crate provides the value types the solving engine operates on:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A nine-bit set of digits, used for per-cell candidates
//! - [`position`]: `(row, col)` board coordinates and block arithmetic
//! - [`digit_grid`]: The committed 9x9 grid of optional digits, with
//!   parsing, formatting, and solution validation
//! - [`candidate_board`]: Board-wide candidate tracking with the
//!   elimination primitive used by every assignment
//!
//! # Examples
//!
//! ```
//! use nonacell_core::{CandidateBoard, Digit, Position};
//!
//! let mut candidates = CandidateBoard::new();
//!
//! // Place a digit; peers in the same row, column, and block lose it
//! candidates.place(Position::new(4, 4), Digit::D5);
//!
//! assert!(!candidates.candidates_at(Position::new(4, 7)).contains(Digit::D5));
//! assert!(!candidates.candidates_at(Position::new(0, 4)).contains(Digit::D5));
//! ```

pub mod candidate_board;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod position;

pub use self::{
    candidate_board::CandidateBoard,
    digit::Digit,
    digit_grid::{DigitGrid, InvalidCellValue, ParseGridError},
    digit_set::DigitSet,
    position::Position,
};
