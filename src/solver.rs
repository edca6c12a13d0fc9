//! This module contains the logic for solving Sudoku boards.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.

use crate::Board;
use crate::constraint::{self, PuzzleMode};

/// The outcome of one solve. Returned by [Solver::solve] alongside the
/// board, which is filled in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolveReport {

    /// `true` if a full assignment satisfying every active constraint was
    /// found. `false` means the puzzle is unsolvable from its fixed cells,
    /// which is a normal outcome and not an error.
    pub solved: bool,

    /// The number of search steps taken, counted once per visited cell.
    /// Diagnostic information only; it never affects the result.
    pub steps: u64
}

/// A trait for structs which have the ability to solve Sudoku boards.
pub trait Solver {

    /// Solves, or attempts to solve, the provided board under the given
    /// mode, filling it in place. If no solution is found, implementations
    /// must restore the board to the state in which they received it.
    fn solve(&self, board: &mut Board, mode: PuzzleMode) -> SolveReport;
}

/// A perfect [Solver] which fills the board by recursively testing all
/// candidate digits for each cell, in row-major order, undoing every
/// tentative placement whose subtree fails. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// board has many empty cells.
/// * It finds a solution whenever one exists from the given fixed cells and
/// otherwise proves that none does.
///
/// Two preliminary phases run before the general search. First, if the fixed
/// cells already violate a constraint, the solve fails immediately with zero
/// steps; the search only ever extends consistent boards, so an inconsistent
/// start can never be completed. Second, if the center cell is empty, its
/// candidates are tried before those of cell (0, 0), an ordering heuristic
/// that constrains the middle of the board early. The heuristic placement
/// takes part in the ordinary undo discipline, so it only affects
/// exploration order and step counts, never the outcome. It can be turned
/// off with [BacktrackingSolver::without_center_seed].
#[derive(Clone, Copy, Debug)]
pub struct BacktrackingSolver {
    center_seed: bool
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver with the center-cell heuristic
    /// enabled.
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver {
            center_seed: true
        }
    }

    /// Creates a new backtracking solver which does not try the center cell
    /// first.
    pub fn without_center_seed() -> BacktrackingSolver {
        BacktrackingSolver {
            center_seed: false
        }
    }

    fn solve_rec(board: &mut Board, mode: PuzzleMode, index: usize,
            steps: &mut u64) -> bool {
        if index == Board::CELL_COUNT {
            return true;
        }

        *steps += 1;
        let row = index / Board::SIZE;
        let column = index % Board::SIZE;

        if board.get(row, column) != Board::EMPTY {
            return BacktrackingSolver::solve_rec(board, mode, index + 1,
                steps);
        }

        for digit in constraint::candidates(board, row, column, mode) {
            board.set(row, column, digit);

            if BacktrackingSolver::solve_rec(board, mode, index + 1, steps) {
                return true;
            }

            board.clear(row, column);
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, board: &mut Board, mode: PuzzleMode) -> SolveReport {
        if !constraint::check(board, mode) {
            return SolveReport {
                solved: false,
                steps: 0
            };
        }

        let center = Board::SIZE / 2;
        let mut steps = 0;

        if self.center_seed && board.get(center, center) == Board::EMPTY {
            for digit in constraint::candidates(board, center, center, mode) {
                board.set(center, center, digit);

                if BacktrackingSolver::solve_rec(board, mode, 0, &mut steps) {
                    return SolveReport {
                        solved: true,
                        steps
                    };
                }

                board.clear(center, center);
            }

            SolveReport {
                solved: false,
                steps
            }
        }
        else {
            let solved =
                BacktrackingSolver::solve_rec(board, mode, 0, &mut steps);

            SolveReport {
                solved,
                steps
            }
        }
    }
}

impl Default for BacktrackingSolver {
    fn default() -> BacktrackingSolver {
        BacktrackingSolver::new()
    }
}
