//! This module contains the constraint model for classic and diagonal
//! Sudoku.
//!
//! Most importantly, this module contains the definition of [candidates],
//! which computes the set of digits that may legally be placed in a cell
//! under the active [PuzzleMode], and [check], which validates an entire
//! board against every active constraint. Both are pure queries; neither
//! modifies the board.

use crate::Board;
use crate::error::ModeParseError;
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An enumeration of the supported puzzle variants. The mode is fixed for
/// the duration of one solve and selects which constraints participate in
/// candidate computation and checking.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PuzzleMode {

    /// Classic Sudoku rules: every row, column, and 3x3 region must contain
    /// each digit from 1 to 9 at most once.
    Classic,

    /// Classic rules plus uniqueness on the two main diagonals ( ╲ and ╱ ),
    /// often called X-Sudoku.
    Diagonal
}

impl Display for PuzzleMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleMode::Classic => write!(f, "classic"),
            PuzzleMode::Diagonal => write!(f, "diagonal")
        }
    }
}

impl FromStr for PuzzleMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<PuzzleMode, ModeParseError> {
        match s {
            "c" | "classic" => Ok(PuzzleMode::Classic),
            "d" | "diagonal" => Ok(PuzzleMode::Diagonal),
            _ => Err(ModeParseError::new(s))
        }
    }
}

/// One of the 9 axis-aligned 3x3 regions which partition the board. A region
/// is described by its inclusive start and end coordinates, both as
/// `(row, column)` pairs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    start: (usize, usize),
    end: (usize, usize)
}

impl Region {

    /// All 9 regions of the board, in row-major order of their position.
    /// This table is static; [Region::containing] indexes into it
    /// arithmetically.
    pub const ALL: [Region; 9] = [
        Region::new(0, 0), Region::new(0, 3), Region::new(0, 6),
        Region::new(3, 0), Region::new(3, 3), Region::new(3, 6),
        Region::new(6, 0), Region::new(6, 3), Region::new(6, 6)
    ];

    const fn new(start_row: usize, start_column: usize) -> Region {
        Region {
            start: (start_row, start_column),
            end: (start_row + Board::BLOCK_SIZE - 1,
                start_column + Board::BLOCK_SIZE - 1)
        }
    }

    /// Gets the region which contains the cell at the specified position.
    ///
    /// # Panics
    ///
    /// If `row` or `column` is greater than 8.
    pub fn containing(row: usize, column: usize) -> Region {
        let index = (row / Board::BLOCK_SIZE) * Board::BLOCK_SIZE
            + column / Board::BLOCK_SIZE;
        Region::ALL[index]
    }

    /// Indicates whether the cell at the specified position lies within this
    /// region.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row >= self.start.0 && row <= self.end.0 &&
            column >= self.start.1 && column <= self.end.1
    }

    /// Returns an iterator over the coordinates of the 9 cells of this
    /// region, as `(row, column)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (start_row, start_column) = self.start;
        let (end_row, end_column) = self.end;

        (start_row..=end_row).flat_map(move |row|
            (start_column..=end_column).map(move |column| (row, column)))
    }
}

fn on_main_diagonal(row: usize, column: usize) -> bool {
    row == column
}

fn on_anti_diagonal(row: usize, column: usize) -> bool {
    row + column == Board::SIZE - 1
}

fn insert_digit(set: &mut DigitSet, digit: u8) {
    if digit != Board::EMPTY {
        set.insert(digit);
    }
}

/// Computes the set of digits which may be placed in the cell at the
/// specified position without conflicting with any digit already on the
/// board, under the constraints active in the given mode. The used digits
/// are collected from the cell's row, its column, its containing region,
/// and, in [PuzzleMode::Diagonal], every diagonal the cell lies on. The
/// center cell lies on both diagonals and draws from both.
///
/// For a cell which already holds a digit, the result is the empty set.
/// The returned set iterates in ascending order, so exploration based on it
/// is deterministic.
///
/// # Panics
///
/// If `row` or `column` is greater than 8.
pub fn candidates(board: &Board, row: usize, column: usize, mode: PuzzleMode)
        -> DigitSet {
    if board.get(row, column) != Board::EMPTY {
        return DigitSet::new();
    }

    let mut used = DigitSet::new();

    for other_column in 0..Board::SIZE {
        insert_digit(&mut used, board.get(row, other_column));
    }

    for other_row in 0..Board::SIZE {
        insert_digit(&mut used, board.get(other_row, column));
    }

    for (region_row, region_column) in
            Region::containing(row, column).cells() {
        insert_digit(&mut used, board.get(region_row, region_column));
    }

    if mode == PuzzleMode::Diagonal {
        if on_main_diagonal(row, column) {
            for i in 0..Board::SIZE {
                insert_digit(&mut used, board.get(i, i));
            }
        }

        if on_anti_diagonal(row, column) {
            for i in 0..Board::SIZE {
                insert_digit(&mut used, board.get(i, Board::SIZE - 1 - i));
            }
        }
    }

    DigitSet::full() - used
}

fn insert_checked(set: &mut DigitSet, digit: u8) -> bool {
    digit == Board::EMPTY || set.insert(digit)
}

/// Checks the entire board for constraint violations under the given mode,
/// that is, whether any row, column, region, or, in [PuzzleMode::Diagonal],
/// diagonal contains a digit more than once. Empty cells never cause a
/// violation, so a partially filled board passes as long as its digits are
/// consistent with each other.
pub fn check(board: &Board, mode: PuzzleMode) -> bool {
    let mut set = DigitSet::new();

    for row in 0..Board::SIZE {
        set.clear();

        for column in 0..Board::SIZE {
            if !insert_checked(&mut set, board.get(row, column)) {
                return false;
            }
        }
    }

    for column in 0..Board::SIZE {
        set.clear();

        for row in 0..Board::SIZE {
            if !insert_checked(&mut set, board.get(row, column)) {
                return false;
            }
        }
    }

    for region in &Region::ALL {
        set.clear();

        for (row, column) in region.cells() {
            if !insert_checked(&mut set, board.get(row, column)) {
                return false;
            }
        }
    }

    if mode == PuzzleMode::Diagonal {
        set.clear();

        for i in 0..Board::SIZE {
            if !insert_checked(&mut set, board.get(i, i)) {
                return false;
            }
        }

        set.clear();

        for i in 0..Board::SIZE {
            if !insert_checked(&mut set, board.get(i, Board::SIZE - 1 - i)) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn regions_partition_the_grid() {
        for row in 0..Board::SIZE {
            for column in 0..Board::SIZE {
                let containing = Region::ALL.iter()
                    .filter(|region| region.contains(row, column))
                    .count();

                assert_eq!(1, containing,
                    "cell ({}, {}) is not in exactly one region", row,
                    column);
                assert!(Region::containing(row, column)
                    .contains(row, column));
            }
        }
    }

    #[test]
    fn region_cells_are_row_major() {
        let cells: Vec<(usize, usize)> =
            Region::containing(4, 7).cells().collect();

        assert_eq!(vec![
            (3, 6), (3, 7), (3, 8),
            (4, 6), (4, 7), (4, 8),
            (5, 6), (5, 7), (5, 8)
        ], cells);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(Ok(PuzzleMode::Classic), "c".parse());
        assert_eq!(Ok(PuzzleMode::Classic), "classic".parse());
        assert_eq!(Ok(PuzzleMode::Diagonal), "d".parse());
        assert_eq!(Ok(PuzzleMode::Diagonal), "diagonal".parse());
        assert!("x".parse::<PuzzleMode>().is_err());
        assert!("Classic".parse::<PuzzleMode>().is_err());
    }

    #[test]
    fn candidates_of_filled_cell_are_empty() {
        let mut board = Board::new();
        board.set(2, 5, 7);

        assert!(candidates(&board, 2, 5, PuzzleMode::Classic).is_empty());
        assert!(candidates(&board, 2, 5, PuzzleMode::Diagonal).is_empty());
    }

    #[test]
    fn candidates_of_empty_board_are_all_digits() {
        let board = Board::new();
        let digits: Vec<u8> =
            candidates(&board, 0, 0, PuzzleMode::Classic).iter().collect();

        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], digits);
    }

    #[test]
    fn candidates_exclude_row_column_and_region_digits() {
        let board = Board::parse("
            000030000
            000000000
            000000000
            000500000
            100000002
            000000000
            000000000
            000000000
            000040000").unwrap();
        let digits: Vec<u8> =
            candidates(&board, 4, 4, PuzzleMode::Classic).iter().collect();

        assert_eq!(vec![6, 7, 8, 9], digits);
    }

    #[test]
    fn diagonal_digits_are_ignored_in_classic_mode() {
        let mut board = Board::new();
        board.set(7, 7, 9);

        assert!(candidates(&board, 2, 2, PuzzleMode::Classic).contains(9));
    }

    #[test]
    fn diagonal_digits_are_excluded_in_diagonal_mode() {
        let mut board = Board::new();
        board.set(7, 7, 9);

        let digits = candidates(&board, 2, 2, PuzzleMode::Diagonal);

        assert!(!digits.contains(9));
        assert_eq!(8, digits.len());
    }

    #[test]
    fn center_cell_draws_from_both_diagonals() {
        let mut board = Board::new();
        board.set(0, 0, 6);
        board.set(0, 8, 7);

        let classic = candidates(&board, 4, 4, PuzzleMode::Classic);
        let diagonal = candidates(&board, 4, 4, PuzzleMode::Diagonal);

        assert_eq!(9, classic.len());
        assert!(!diagonal.contains(6));
        assert!(!diagonal.contains(7));
        assert_eq!(7, diagonal.len());
    }

    #[test]
    fn off_diagonal_cells_ignore_diagonals_in_diagonal_mode() {
        let mut board = Board::new();
        board.set(4, 4, 3);

        assert!(candidates(&board, 0, 1, PuzzleMode::Diagonal).contains(3));
    }

    #[test]
    fn check_accepts_empty_board() {
        let board = Board::new();

        assert!(check(&board, PuzzleMode::Classic));
        assert!(check(&board, PuzzleMode::Diagonal));
    }

    #[test]
    fn check_detects_row_duplicate() {
        let mut board = Board::new();
        board.set(3, 1, 4);
        board.set(3, 7, 4);

        assert!(!check(&board, PuzzleMode::Classic));
    }

    #[test]
    fn check_detects_column_duplicate() {
        let mut board = Board::new();
        board.set(0, 5, 2);
        board.set(8, 5, 2);

        assert!(!check(&board, PuzzleMode::Classic));
    }

    #[test]
    fn check_detects_region_duplicate() {
        let mut board = Board::new();
        board.set(0, 0, 1);
        board.set(1, 1, 1);

        assert!(!check(&board, PuzzleMode::Classic));
    }

    #[test]
    fn check_detects_main_diagonal_duplicate_only_in_diagonal_mode() {
        let mut board = Board::new();
        board.set(1, 1, 4);
        board.set(7, 7, 4);

        assert!(check(&board, PuzzleMode::Classic));
        assert!(!check(&board, PuzzleMode::Diagonal));
    }

    #[test]
    fn check_detects_anti_diagonal_duplicate_only_in_diagonal_mode() {
        let mut board = Board::new();
        board.set(0, 8, 2);
        board.set(8, 0, 2);

        assert!(check(&board, PuzzleMode::Classic));
        assert!(!check(&board, PuzzleMode::Diagonal));
    }

    #[test]
    fn check_accepts_consistent_partial_board() {
        let board = Board::parse("
            530070000
            600195000
            098000060
            800060003
            400803001
            700020006
            060000280
            000419005
            000080079").unwrap();

        assert!(check(&board, PuzzleMode::Classic));
    }
}
