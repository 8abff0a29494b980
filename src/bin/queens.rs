use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use classic_search::queens::repair::{solve_queens, RepairOutcome};
use classic_search::scenario::{QueensScenario, DEFAULT_MAX_ITERATIONS, MIN_QUEENS};
use classic_search::solution::{write_report, QueensReport, Report};

/// Solve N-Queens with min-conflicts local repair.
#[derive(Debug, Parser)]
#[command(name = "queens")]
struct Args {
    /// Number of queens (prompted for when omitted).
    n: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Also write a JSON report to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn prompt_n() -> Option<usize> {
    print!("Please enter how many Queens you want: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}

fn main() {
    classic_search::logging::init();
    let args = Args::parse();

    let Some(n) = args.n.or_else(prompt_n) else {
        eprintln!("Expected a positive integer number of queens.");
        std::process::exit(2);
    };
    if n < MIN_QUEENS {
        println!("No solution is possible for the given number of queens.");
        std::process::exit(0);
    }

    let mut scn = QueensScenario::new(n).with_max_iterations(args.max_iterations);
    scn.seed = args.seed;

    let start = Instant::now();
    let result = match solve_queens(&scn) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    match &result.outcome {
        RepairOutcome::Solved(board) => {
            println!("Solution found:");
            for (row, col) in board.placements() {
                println!("Queen {} at column {}", row + 1, col + 1);
            }
        }
        RepairOutcome::Exhausted { conflicts, .. } => {
            println!(
                "No solution found after reaching maximum iterations ({conflicts} conflicts left)."
            );
        }
    }
    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());

    if let Some(path) = &args.json {
        let report = Report::Queens(QueensReport::new(&scn, &result));
        if let Err(e) = write_report(path, &report) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
    }

    if !result.outcome.is_solved() {
        std::process::exit(1);
    }
}
