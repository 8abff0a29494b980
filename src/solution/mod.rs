//! Exportable solve reports.
//!
//! A report is a small JSON document describing one solve: the inputs that matter for
//! reproducing it, the result, and the work counters. The binaries write one with `--json`;
//! tests read them back.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coloring::backtrack::{ColoringOutcome, ColoringResult};
use crate::queens::repair::{RepairOutcome, RepairResult};
use crate::scenario::{ColoringScenario, QueensScenario, ResourceCounts, SearchError};
use crate::tictactoe::grid::{Grid, Mark};
use crate::tictactoe::minimax::ScoredMove;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Queens(QueensReport),
    Coloring(ColoringReport),
    Move(MoveReport),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensReport {
    pub format_version: u32,
    pub n: usize,
    pub max_iterations: usize,
    pub seed: Option<u64>,
    pub solved: bool,
    /// Final placement (the solution, or the last state when exhausted).
    pub columns: Vec<usize>,
    pub conflicts: usize,
    pub iterations: usize,
    pub counts: ResourceCounts,
}

impl QueensReport {
    pub fn new(scn: &QueensScenario, result: &RepairResult) -> Self {
        let (solved, columns, conflicts) = match &result.outcome {
            RepairOutcome::Solved(board) => (true, board.columns().to_vec(), 0),
            RepairOutcome::Exhausted { board, conflicts } => {
                (false, board.columns().to_vec(), *conflicts)
            }
        };
        Self {
            format_version: FORMAT_VERSION,
            n: scn.n,
            max_iterations: scn.max_iterations,
            seed: scn.seed,
            solved,
            columns,
            conflicts,
            iterations: result.iterations,
            counts: result.counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexColor {
    pub vertex: usize,
    pub name: String,
    pub color: usize,
    pub color_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringReport {
    pub format_version: u32,
    pub scenario_name: String,
    pub palette_size: usize,
    pub colored: bool,
    /// Empty when no coloring exists.
    pub vertices: Vec<VertexColor>,
    pub counts: ResourceCounts,
}

impl ColoringReport {
    pub fn new(scn: &ColoringScenario, result: &ColoringResult) -> Self {
        let vertices = match &result.outcome {
            ColoringOutcome::Colored(assignment) => (0..scn.vertex_count())
                .map(|v| {
                    let color = assignment.color(v);
                    VertexColor {
                        vertex: v,
                        name: scn.vertex_name(v).into_owned(),
                        color,
                        color_name: scn.palette.name(color).unwrap_or("?").to_string(),
                    }
                })
                .collect(),
            ColoringOutcome::NoColoring => Vec::new(),
        };
        Self {
            format_version: FORMAT_VERSION,
            scenario_name: scn.name.clone(),
            palette_size: scn.palette.len(),
            colored: matches!(result.outcome, ColoringOutcome::Colored(_)),
            vertices,
            counts: result.counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub format_version: u32,
    pub grid: Grid,
    pub to_move: Mark,
    pub considered: Vec<ScoredMove>,
    pub chosen: Option<ScoredMove>,
    pub counts: ResourceCounts,
}

impl MoveReport {
    pub fn new(
        grid: Grid,
        to_move: Mark,
        considered: Vec<ScoredMove>,
        chosen: Option<ScoredMove>,
        counts: ResourceCounts,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            grid,
            to_move,
            considered,
            chosen,
            counts,
        }
    }
}

pub fn write_report(path: &Path, report: &Report) -> Result<(), SearchError> {
    let f = fs::File::create(path).map_err(|e| SearchError::Io {
        stage: "report_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(|e| SearchError::Io {
        stage: "report_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| SearchError::Io {
        stage: "report_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

pub fn read_report(path: &Path) -> Result<Report, SearchError> {
    let f = fs::File::open(path).map_err(|e| SearchError::Io {
        stage: "report_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let report: Report = serde_json::from_reader(BufReader::new(f)).map_err(|e| SearchError::Io {
        stage: "report_parse",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let version = match &report {
        Report::Queens(r) => r.format_version,
        Report::Coloring(r) => r.format_version,
        Report::Move(r) => r.format_version,
    };
    if version != FORMAT_VERSION {
        return Err(SearchError::Io {
            stage: "report_version",
            path: path.display().to_string(),
            error: format!("unsupported format_version {version} (expected {FORMAT_VERSION})"),
        });
    }
    Ok(report)
}
