//! The `sudoku-x` command line application. Reads a puzzle from a text file,
//! solves it under the selected mode, and prints the solved board together
//! with the number of search steps and the elapsed time.

use clap::Parser;

use log::{debug, error};

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use sudoku_x::Board;
use sudoku_x::constraint::{self, PuzzleMode};
use sudoku_x::solver::{BacktrackingSolver, Solver};

/// A backtracking solver for classic and diagonal (X) Sudoku puzzles.
#[derive(Parser)]
#[command(version, about)]
struct Cli {

    /// Path to the puzzle file: 9 rows of 9 digits, where 0 stands for an
    /// empty cell. Characters other than digits are ignored.
    #[arg(short, long)]
    board: PathBuf,

    /// The puzzle mode: "c"/"classic" or "d"/"diagonal".
    #[arg(short, long, default_value = "classic")]
    mode: PuzzleMode,

    /// Do not fill the center cell before the rest of the board.
    #[arg(long)]
    no_center_seed: bool
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let text = match fs::read_to_string(&cli.board) {
        Ok(text) => text,
        Err(e) => {
            error!("cannot read {}: {}", cli.board.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut board = match Board::parse(&text) {
        Ok(board) => board,
        Err(e) => {
            error!("cannot parse {}: {}", cli.board.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if !constraint::check(&board, cli.mode) {
        error!("the fixed cells of the puzzle already violate a {} \
            constraint", cli.mode);
        return ExitCode::FAILURE;
    }

    println!("puzzle mode {}, input board:", cli.mode);
    println!("{}", board);

    let solver = if cli.no_center_seed {
        BacktrackingSolver::without_center_seed()
    }
    else {
        BacktrackingSolver::new()
    };

    debug!("solving {} in {} mode", cli.board.display(), cli.mode);

    let start = Instant::now();
    let report = solver.solve(&mut board, cli.mode);
    let elapsed = start.elapsed();

    println!("steps={},during={:?}", report.steps, elapsed);

    if !report.solved {
        println!("no solution exists for the given fixed cells");
    }

    println!("{}", board);
    ExitCode::SUCCESS
}
