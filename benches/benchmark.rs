use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use sudoku_x::Board;
use sudoku_x::constraint::PuzzleMode;
use sudoku_x::solver::{BacktrackingSolver, Solver};

use std::time::Duration;

// The benchmark tasks are the WPF Sudoku Grand Prix 2020 Round 8 puzzles
// (Puzzles 2 + 6) that the solver tests use as well. The diagonal puzzle
// has fewer clues and dominates the runtime of its group.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SAMPLE_SIZE: usize = 100;

const CLASSIC_PUZZLE: &str =
    "000081000\n\
     002007800\n\
     053000170\n\
     370000000\n\
     600000003\n\
     000000024\n\
     069000230\n\
     005900400\n\
     000650000";

const CLASSIC_SOLUTION: &str =
    "746281359\n\
     912537846\n\
     853496172\n\
     374125698\n\
     628749513\n\
     591368724\n\
     169874235\n\
     285913467\n\
     437652981";

const DIAGONALS_PUZZLE: &str =
    "012345670\n\
     000000000\n\
     000000000\n\
     700000005\n\
     200000001\n\
     900000003\n\
     000000000\n\
     000000000\n\
     034567890";

const DIAGONALS_SOLUTION: &str =
    "812345679\n\
     375689124\n\
     496172358\n\
     741936285\n\
     263758941\n\
     958421763\n\
     527893416\n\
     689214537\n\
     134567892";

struct Task {
    puzzle: Board,
    solution: Board,
    mode: PuzzleMode
}

impl Task {
    fn new(puzzle: &str, solution: &str, mode: PuzzleMode) -> Task {
        Task {
            puzzle: Board::parse(puzzle).unwrap(),
            solution: Board::parse(solution).unwrap(),
            mode
        }
    }
}

fn solve_task<S: Solver>(task: &Task, solver: &S) {
    let mut board = task.puzzle.clone();
    let report = solver.solve(&mut board, task.mode);

    assert!(report.solved);
    assert_eq!(task.solution, board);
}

fn benchmark_task<S: Solver>(group: &mut BenchmarkGroup<WallTime>, id: &str,
        task: &Task, solver: &S) {
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function(id, |b| b.iter(|| solve_task(task, solver)));
}

fn benchmark_solver(c: &mut Criterion, group_name: &str,
        solver: BacktrackingSolver) {
    let mut group = c.benchmark_group(group_name);
    let classic =
        Task::new(CLASSIC_PUZZLE, CLASSIC_SOLUTION, PuzzleMode::Classic);
    let diagonals =
        Task::new(DIAGONALS_PUZZLE, DIAGONALS_SOLUTION, PuzzleMode::Diagonal);

    benchmark_task(&mut group, "classic", &classic, &solver);
    benchmark_task(&mut group, "diagonals", &diagonals, &solver);
}

fn benchmark_backtracking(c: &mut Criterion) {
    benchmark_solver(c, "backtracking", BacktrackingSolver::new())
}

fn benchmark_backtracking_without_center_seed(c: &mut Criterion) {
    benchmark_solver(c, "backtracking without center seed",
        BacktrackingSolver::without_center_seed())
}

criterion_group!(all,
    benchmark_backtracking,
    benchmark_backtracking_without_center_seed
);

criterion_main!(all);
