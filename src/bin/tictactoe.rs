use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use classic_search::scenario::TicTacToeScenario;
use classic_search::scenarios;
use classic_search::solution::{write_report, MoveReport, Report};
use classic_search::tictactoe::game::{Game, Status};
use classic_search::tictactoe::grid::{Cell, Grid, Mark, SIZE};
use classic_search::tictactoe::minimax::{pick_first_max, Minimax};

/// Play Tic-Tac-Toe against a minimax engine, or analyze one position.
#[derive(Debug, Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Built-in start position.
    #[arg(long, default_value = "empty")]
    start: String,
    /// Mark played by the engine.
    #[arg(long, default_value = "O")]
    computer: Mark,
    /// Mark that moves first.
    #[arg(long, default_value = "X")]
    first: Mark,
    /// Analyze this grid (e.g. "XX-/OO-/---") for `--first` and exit.
    #[arg(long)]
    grid: Option<Grid>,
    /// With `--grid`, also write a JSON report to this path.
    #[arg(long, requires = "grid")]
    json: Option<PathBuf>,
}

fn analyze(mut grid: Grid, to_move: Mark, json: Option<&PathBuf>) {
    let mut engine = Minimax::new(to_move);
    let considered = match engine.scored_moves(&mut grid) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };
    let chosen = pick_first_max(&considered);

    print!("{grid}");
    println!("Heuristic values for {to_move}:");
    for m in &considered {
        println!("({}, {}): {}", m.cell.row + 1, m.cell.col + 1, m.score);
    }
    match chosen {
        Some(m) => println!(
            "Best move: ({}, {}) with heuristic value: {}",
            m.cell.row + 1,
            m.cell.col + 1,
            m.score
        ),
        None => println!("No move: the game is already over."),
    }

    if let Some(path) = json {
        let report = Report::Move(MoveReport::new(
            grid,
            to_move,
            considered,
            chosen,
            engine.counts(),
        ));
        if let Err(e) = write_report(path, &report) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
    }
}

fn read_cell() -> Option<Cell> {
    loop {
        print!("Enter row and column numbers to fix spot: ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        let nums: Vec<usize> = line
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        match nums.as_slice() {
            &[r, c] if (1..=SIZE).contains(&r) && (1..=SIZE).contains(&c) => {
                return Some(Cell::new(r - 1, c - 1))
            }
            _ => println!("Please enter two numbers between 1 and {SIZE}."),
        }
    }
}

fn play(scn: &TicTacToeScenario) {
    let mut game = match Game::new(scn) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid start: {e}");
            std::process::exit(2);
        }
    };

    let status = loop {
        let to_move = match game.status() {
            Status::InProgress { to_move } => to_move,
            done => break done,
        };
        println!("Player {to_move} turn");
        print!("{}", game.grid());

        if to_move == game.human() {
            let Some(cell) = read_cell() else {
                println!();
                return;
            };
            if let Err(e) = game.play_human(cell) {
                println!("{e}");
            }
        } else {
            println!("Computer ({to_move}) is thinking...");
            let turn = match game.play_computer() {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            };
            println!("Heuristic values for all considered states:");
            for m in &turn.considered {
                println!("({}, {}): {}", m.cell.row + 1, m.cell.col + 1, m.score);
            }
            println!(
                "Determination of the best move: ({}, {}) with heuristic value: {}",
                turn.chosen.cell.row + 1,
                turn.chosen.cell.col + 1,
                turn.chosen.score
            );
        }
        println!();
    };

    print!("{}", game.grid());
    match status {
        Status::Won(mark) => println!("Player {mark} wins the game!"),
        Status::Draw => println!("Match Draw!"),
        Status::InProgress { .. } => {}
    }
}

fn main() {
    classic_search::logging::init();
    let args = Args::parse();

    if let Some(grid) = args.grid {
        analyze(grid, args.first, args.json.as_ref());
        return;
    }

    let scn = match scenarios::tictactoe_by_name(&args.start) {
        Ok(Some(s)) => s,
        Ok(None) => {
            eprintln!(
                "Unknown start: {}\n\nAvailable starts:\n  - {}",
                args.start,
                scenarios::tictactoe_names().join("\n  - ")
            );
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Failed to build start {}: {e}", args.start);
            std::process::exit(1);
        }
    };

    play(
        &scn.with_computer(args.computer)
            .with_first_to_move(args.first),
    );
}
