//! Built-in scenarios (compile-time configs).

pub mod file;

use rustc_hash::FxHashMap;

use crate::coloring::graph::AdjacencyMatrix;
use crate::coloring::palette::Palette;
use crate::scenario::{ColoringScenario, QueensScenario, SearchError, TicTacToeScenario};
use crate::tictactoe::grid::Grid;

/// The 13 administrative regions of Saudi Arabia, in vertex order.
pub const KSA_REGIONS: [&str; 13] = [
    "Tabuk", "Jouf", "Northern", "Hail", "Madinah", "Qaseem", "Makkah", "Riyadh", "Baha", "Asir",
    "Najran", "Jazan", "Eastern",
];

/// Shared land borders between regions.
const KSA_BORDERS: [(&str, &str); 24] = [
    ("Tabuk", "Jouf"),
    ("Tabuk", "Hail"),
    ("Tabuk", "Madinah"),
    ("Jouf", "Northern"),
    ("Jouf", "Hail"),
    ("Northern", "Hail"),
    ("Northern", "Eastern"),
    ("Hail", "Madinah"),
    ("Hail", "Qaseem"),
    ("Madinah", "Qaseem"),
    ("Madinah", "Makkah"),
    ("Madinah", "Riyadh"),
    ("Qaseem", "Riyadh"),
    ("Qaseem", "Eastern"),
    ("Makkah", "Riyadh"),
    ("Makkah", "Baha"),
    ("Makkah", "Asir"),
    ("Riyadh", "Asir"),
    ("Riyadh", "Najran"),
    ("Riyadh", "Eastern"),
    ("Baha", "Asir"),
    ("Asir", "Najran"),
    ("Asir", "Jazan"),
    ("Najran", "Eastern"),
];

/// Colors used for the region map.
pub const KSA_COLORS: [&str; 3] = ["grey", "green", "brown"];

/// Build an adjacency matrix from named vertices and named edges.
pub fn graph_from_named_edges(
    names: &[&str],
    edges: &[(&str, &str)],
) -> Result<AdjacencyMatrix, SearchError> {
    let index: FxHashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    if index.len() != names.len() {
        return Err(SearchError::invalid("duplicate vertex name"));
    }

    let lookup = |name: &str| {
        index
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::invalid(format!("unknown vertex {name:?}")))
    };

    let mut pairs = Vec::with_capacity(edges.len());
    for &(a, b) in edges {
        pairs.push((lookup(a)?, lookup(b)?));
    }
    AdjacencyMatrix::from_edges(names.len(), &pairs)
}

/// The 13-region map with the grey/green/brown palette.
pub fn ksa_regions() -> Result<ColoringScenario, SearchError> {
    let graph = graph_from_named_edges(&KSA_REGIONS, &KSA_BORDERS)?;
    Ok(ColoringScenario::new("ksa_regions", graph, Palette::new(KSA_COLORS))
        .with_vertex_names(KSA_REGIONS))
}

/// Default min-conflicts run for `n` queens.
pub fn queens(n: usize) -> QueensScenario {
    QueensScenario::new(n)
}

/// Empty board, X (human) moves first, engine plays O.
pub fn tictactoe_empty() -> TicTacToeScenario {
    TicTacToeScenario::new("empty", Grid::EMPTY)
}

/// A mid-game position: `-OX / XOO / ---`, X to move, engine plays O.
pub fn tictactoe_demo() -> Result<TicTacToeScenario, SearchError> {
    Ok(TicTacToeScenario::new("demo", "-OX/XOO/---".parse()?))
}

/// Return a coloring config by name.
pub fn coloring_by_name(name: &str) -> Result<Option<ColoringScenario>, SearchError> {
    match name {
        "ksa_regions" => Ok(Some(ksa_regions()?)),
        _ => Ok(None),
    }
}

/// Return a Tic-Tac-Toe start by name.
pub fn tictactoe_by_name(name: &str) -> Result<Option<TicTacToeScenario>, SearchError> {
    match name {
        "empty" => Ok(Some(tictactoe_empty())),
        "demo" => Ok(Some(tictactoe_demo()?)),
        _ => Ok(None),
    }
}

pub fn coloring_names() -> &'static [&'static str] {
    &["ksa_regions"]
}

pub fn tictactoe_names() -> &'static [&'static str] {
    &["empty", "demo"]
}
