use clap::Parser;
use tracing_subscriber::EnvFilter;

use necto::{
    puzzles::{
        grid::{grid_from_assignment, render_grid, Grid},
        sudoku::Sudoku,
    },
    solver::{engine::SolverEngine, stats::render_stats_table},
};

/// Solve a Sudoku puzzle with the CSP engine.
#[derive(Parser, Debug)]
struct Args {
    /// Path to a JSON file holding a 9×9 array of digits, 0 for blanks.
    /// Defaults to a built-in puzzle.
    #[arg(long)]
    puzzle: Option<std::path::PathBuf>,
}

const DEFAULT_PUZZLE: Grid = [
    [0, 0, 0, 2, 0, 0, 0, 6, 3],
    [3, 0, 0, 0, 0, 5, 4, 0, 1],
    [0, 0, 1, 0, 0, 3, 9, 8, 0],
    [0, 0, 0, 0, 0, 0, 0, 9, 0],
    [0, 0, 0, 5, 3, 8, 0, 0, 0],
    [0, 3, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 6, 3, 0, 0, 5, 0, 0],
    [5, 0, 3, 0, 0, 0, 0, 0, 8],
    [9, 0, 0, 0, 0, 1, 0, 0, 0],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let grid: Grid = match &args.puzzle {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => DEFAULT_PUZZLE,
    };

    println!("Puzzle:");
    println!("{}", render_grid(&grid));

    let sudoku = Sudoku::from_grid(&grid);
    let problem = sudoku.to_problem()?;
    let (assignment, stats) = SolverEngine::default().solve(&problem);

    match assignment {
        Some(assignment) => {
            println!("Solved:");
            println!("{}", render_grid(&grid_from_assignment(&assignment, sudoku.filled())));
        }
        None => println!("No solution found."),
    }

    println!("{}", render_stats_table(&stats));
    Ok(())
}
