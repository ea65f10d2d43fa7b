//! Example demonstrating a full solve from the command line.
//!
//! The puzzle is given as a single argument of 81 cells: digits `1`-`9`
//! for givens, `_`, `.` or `0` for blanks, whitespace ignored.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "_9_26__1_3____94_5_1________5_1_2__34_______29__3_6_7________5_7_56____1_8__35_9_"
//! ```
//!
//! Show each deduced cell as it is found:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --steps "<puzzle>"
//! ```

use std::process;

use clap::Parser;
use nonacell_core::{Digit, DigitGrid, Position};
use nonacell_solver::{BacktrackingSolver, Board, SolveObserver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle grid: 81 cells, digits 1-9, blanks as `_`, `.` or `0`.
    puzzle: String,

    /// Print every deduced cell as it is found.
    #[arg(long)]
    steps: bool,
}

#[derive(Debug)]
struct ProgressPrinter {
    steps: bool,
}

impl SolveObserver for ProgressPrinter {
    fn digit_placed(&mut self, pos: Position, digit: Digit) {
        if self.steps {
            println!("  {pos} = {digit}");
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid: DigitGrid = match args.puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle:");
    print_grid(&grid);

    let mut board = Board::new(grid);
    let mut printer = ProgressPrinter { steps: args.steps };
    let (outcome, stats) =
        BacktrackingSolver::new().solve_with_observer(&mut board, &mut printer);

    if outcome.is_unsolvable() {
        eprintln!("No solution exists.");
        process::exit(1);
    }

    println!();
    println!("Solution:");
    print_grid(board.digits());
    println!();
    println!(
        "Placed {} by deduction, tried {} guesses (search depth {}).",
        stats.deduced(),
        stats.guesses(),
        stats.max_depth()
    );
}

fn print_grid(grid: &DigitGrid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}
