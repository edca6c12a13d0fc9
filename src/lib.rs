// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a backtracking solver for 9x9 Sudoku, covering the
//! classic rules as well as the diagonal variant (often called X-Sudoku),
//! which additionally requires both main diagonals to be free of duplicate
//! digits. It supports the following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Computing the candidate digits of any cell under the active rules
//! * Checking a board for constraint violations
//! * Solving boards with a depth-first backtracking search that reports how
//! many search steps were taken
//!
//! # Parsing and printing boards
//!
//! A board is written as 9 rows of 9 digits, where `0` stands for an empty
//! cell. Any character that is not a digit is ignored, so puzzles may be
//! formatted with spaces or block separators for readability. See
//! [Board::parse] for details.
//!
//! ```
//! use sudoku_x::Board;
//!
//! let board = Board::parse("
//!     530 | 070 | 000
//!     600 | 195 | 000
//!     098 | 000 | 060
//!     800 | 060 | 003
//!     400 | 803 | 001
//!     700 | 020 | 006
//!     060 | 000 | 280
//!     000 | 419 | 005
//!     000 | 080 | 079").unwrap();
//!
//! assert_eq!(5, board.get(0, 0));
//! assert_eq!(0, board.get(0, 2));
//! println!("{}", board);
//! ```
//!
//! # Solving boards
//!
//! Solving is done by a [BacktrackingSolver](solver::BacktrackingSolver)
//! behind the [Solver](solver::Solver) trait. The solver fills the board in
//! place and returns a [SolveReport](solver::SolveReport) carrying the
//! outcome and the number of search steps.
//!
//! ```
//! use sudoku_x::Board;
//! use sudoku_x::constraint::{self, PuzzleMode};
//! use sudoku_x::solver::{BacktrackingSolver, Solver};
//!
//! let mut board = Board::parse("
//!     530070000
//!     600195000
//!     098000060
//!     800060003
//!     400803001
//!     700020006
//!     060000280
//!     000419005
//!     000080079").unwrap();
//!
//! let report = BacktrackingSolver::new()
//!     .solve(&mut board, PuzzleMode::Classic);
//!
//! assert!(report.solved);
//! assert!(board.is_full());
//! assert!(constraint::check(&board, PuzzleMode::Classic));
//! ```
//!
//! In [PuzzleMode::Diagonal](constraint::PuzzleMode::Diagonal), the two main
//! diagonals participate in candidate computation and checking exactly like
//! rows, columns, and regions do.

pub mod constraint;
pub mod error;
pub mod solver;
pub mod util;

use error::{PuzzleParseError, PuzzleParseResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// A 9x9 Sudoku board. Each cell holds a digit from 1 to 9 or
/// [Board::EMPTY]. Rows and columns are indexed from 0 to 8, row-major, with
/// row 0 at the top.
///
/// Boards implement `Display` and render with their 3x3 regions visually
/// grouped:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │   │   ║ 1 │ 9 │ 5 ║   │   │   ║
/// ...
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    cells: [[u8; Board::SIZE]; Board::SIZE]
}

const TOP_ROW: &str = "╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗";
const THIN_SEPARATOR: &str = "╟───┼───┼───╫───┼───┼───╫───┼───┼───╢";
const THICK_SEPARATOR: &str = "╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣";
const BOTTOM_ROW: &str = "╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝";

fn to_char(digit: u8) -> char {
    if digit == Board::EMPTY {
        ' '
    }
    else {
        (b'0' + digit) as char
    }
}

fn content_row(board: &Board, row: usize) -> String {
    let mut result = String::new();

    for column in 0..Board::SIZE {
        if column % Board::BLOCK_SIZE == 0 {
            result.push('║');
        }
        else {
            result.push('│');
        }

        result.push(' ');
        result.push(to_char(board.get(row, column)));
        result.push(' ');
    }

    result.push('║');
    result
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..Board::SIZE {
            if row == 0 {
                writeln!(f, "{}", TOP_ROW)?;
            }
            else if row % Board::BLOCK_SIZE == 0 {
                writeln!(f, "{}", THICK_SEPARATOR)?;
            }
            else {
                writeln!(f, "{}", THIN_SEPARATOR)?;
            }

            writeln!(f, "{}", content_row(self, row))?;
        }

        write!(f, "{}", BOTTOM_ROW)
    }
}

impl Board {

    /// The number of rows and columns of a board.
    pub const SIZE: usize = 9;

    /// The width and height of one 3x3 region.
    pub const BLOCK_SIZE: usize = 3;

    /// The total number of cells of a board.
    pub const CELL_COUNT: usize = Board::SIZE * Board::SIZE;

    /// The value of a cell that does not hold a digit.
    pub const EMPTY: u8 = 0;

    /// Creates a new board with all cells empty.
    pub fn new() -> Board {
        Board {
            cells: [[Board::EMPTY; Board::SIZE]; Board::SIZE]
        }
    }

    /// Parses a board from its textual representation: 9 rows of 9 digits,
    /// where `0` denotes an empty cell. Characters that are not digits are
    /// ignored, and lines without any digit are skipped entirely, so input
    /// may be padded with whitespace or visual separators.
    ///
    /// # Errors
    ///
    /// * `PuzzleParseError::WrongRowLength` if a line carries digits, but
    /// not exactly 9 of them.
    /// * `PuzzleParseError::WrongNumberOfRows` if the number of digit rows
    /// is not exactly 9.
    pub fn parse(text: &str) -> PuzzleParseResult<Board> {
        let mut board = Board::new();
        let mut row = 0;

        for line in text.lines() {
            let digits = line.chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as u8)
                .collect::<Vec<u8>>();

            if digits.is_empty() {
                continue;
            }

            if digits.len() != Board::SIZE {
                return Err(PuzzleParseError::WrongRowLength);
            }

            if row == Board::SIZE {
                return Err(PuzzleParseError::WrongNumberOfRows);
            }

            for (column, &digit) in digits.iter().enumerate() {
                board.cells[row][column] = digit;
            }

            row += 1;
        }

        if row != Board::SIZE {
            return Err(PuzzleParseError::WrongNumberOfRows);
        }

        Ok(board)
    }

    /// Gets the content of the cell at the specified position, which is
    /// either a digit from 1 to 9 or [Board::EMPTY].
    ///
    /// # Panics
    ///
    /// If `row` or `column` is greater than 8.
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.cells[row][column]
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit is overwritten.
    ///
    /// # Panics
    ///
    /// If `row` or `column` is greater than 8 and, in debug mode, if `digit`
    /// is not in the range `[1, 9]`.
    pub fn set(&mut self, row: usize, column: usize, digit: u8) {
        debug_assert!(digit >= 1 && digit <= 9);

        self.cells[row][column] = digit;
    }

    /// Clears the content of the cell at the specified position, that is,
    /// resets it to [Board::EMPTY].
    ///
    /// # Panics
    ///
    /// If `row` or `column` is greater than 8.
    pub fn clear(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Board::EMPTY;
    }

    /// Indicates whether this board is full, i.e. no cell is empty. Note
    /// that this does not check any constraints; use
    /// [check](crate::constraint::check) for that.
    pub fn is_full(&self) -> bool {
        self.cells.iter()
            .all(|row| row.iter().all(|&cell| cell != Board::EMPTY))
    }

    /// Gets a reference to the two-dimensional array which holds the cells,
    /// indexed by row first.
    pub fn cells(&self) -> &[[u8; Board::SIZE]; Board::SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
