use std::path::PathBuf;

use clap::Parser;

use classic_search::coloring::backtrack::{color_graph, ColoringOutcome};
use classic_search::scenario::ColoringScenario;
use classic_search::scenarios;
use classic_search::scenarios::file::coloring_from_file;
use classic_search::solution::{write_report, ColoringReport, Report};

/// Color a map graph by backtracking so that neighbors never share a color.
#[derive(Debug, Parser)]
#[command(name = "color_map")]
struct Args {
    /// Built-in map name.
    #[arg(long, default_value = "ksa_regions")]
    scenario: String,
    /// Load a custom map from a JSON file instead of a built-in one.
    #[arg(long, conflicts_with = "scenario")]
    map: Option<PathBuf>,
    /// Number of colors to use (default: the map's palette).
    #[arg(long)]
    colors: Option<usize>,
    /// Also write a JSON report to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load(args: &Args) -> ColoringScenario {
    if let Some(path) = &args.map {
        return match coloring_from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to load map: {e}");
                std::process::exit(2);
            }
        };
    }

    match scenarios::coloring_by_name(&args.scenario) {
        Ok(Some(s)) => s,
        Ok(None) => {
            eprintln!(
                "Unknown scenario: {}\n\nAvailable scenarios:\n  - {}",
                args.scenario,
                scenarios::coloring_names().join("\n  - ")
            );
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Failed to build scenario {}: {e}", args.scenario);
            std::process::exit(1);
        }
    }
}

fn main() {
    classic_search::logging::init();
    let args = Args::parse();

    let mut scn = load(&args);
    if let Some(k) = args.colors {
        scn = scn.with_palette_size(k);
    }

    let result = match color_graph(&scn) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Coloring failed: {e}");
            std::process::exit(2);
        }
    };

    match &result.outcome {
        ColoringOutcome::Colored(assignment) => {
            println!("Solution exists and following are the assigned colors:");
            println!("{:?}", assignment.colors());
            let labels: Vec<String> = (0..scn.vertex_count())
                .map(|v| {
                    let color = assignment.color(v);
                    format!(
                        "{}: {}",
                        scn.vertex_name(v),
                        scn.palette.name(color).unwrap_or("?")
                    )
                })
                .collect();
            println!("[{}]", labels.join(", "));
        }
        ColoringOutcome::NoColoring => {
            println!(
                "Solution doesn't exist with {} colors.",
                scn.palette.len()
            );
            if let Some(cycle) = scn.graph.find_odd_cycle().filter(|_| scn.palette.len() == 2) {
                let names: Vec<String> =
                    cycle.iter().map(|&v| scn.vertex_name(v).into_owned()).collect();
                println!("Odd cycle: {}", names.join(" - "));
            }
        }
    }

    if let Some(path) = &args.json {
        let report = Report::Coloring(ColoringReport::new(&scn, &result));
        if let Err(e) = write_report(path, &report) {
            eprintln!("Failed to write report: {e}");
            std::process::exit(1);
        }
    }

    if result.outcome.assignment().is_none() {
        std::process::exit(1);
    }
}
