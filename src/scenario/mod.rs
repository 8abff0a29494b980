//! Scenario layer: problem configuration handed to the solvers.
//!
//! A scenario bundles everything one solve call needs:
//! - the problem parameters (board size, adjacency matrix + palette, start grid)
//! - explicit budgets via [`ResourceLimits`]
//!
//! Scenarios are plain immutable values. Solvers borrow them and keep their mutable working
//! state (board, assignment vector, grid) local to a single call, so one scenario can be solved
//! any number of times without aliasing.

use std::borrow::Cow;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coloring::graph::AdjacencyMatrix;
use crate::coloring::palette::Palette;
use crate::tictactoe::grid::{Grid, Mark};

/// Smallest board size the repair solver accepts.
pub const MIN_QUEENS: usize = 4;

/// Default iteration budget of the repair solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Search budgets used to bound running time.
///
/// - `max_nodes`: recursion nodes visited by the backtracking and minimax searches
/// - `max_runtime_steps`: generic loop-iteration guard (repair iterations)
pub struct ResourceLimits {
    pub max_nodes: u64,
    pub max_runtime_steps: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_nodes: 50_000_000,
            max_runtime_steps: 200_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub nodes: u64,
    pub runtime_steps: u64,
}

#[derive(Debug, Error)]
/// Structured errors returned by solvers and scenario validation.
///
/// Running out of iterations or proving that no coloring exists is *not* an error; those are
/// ordinary outcomes reported by each solver's result type.
pub enum SearchError {
    /// The scenario is internally inconsistent (e.g. `n <= 3`, asymmetric matrix).
    #[error("invalid scenario: {reason}")]
    InvalidScenario { reason: String },
    /// A move was rejected at the game boundary.
    #[error("illegal move at row {row}, column {col}: {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: String,
    },
    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(nodes={}, runtime_steps={})",
        .counts.nodes,
        .counts.runtime_steps
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// I/O failure (reports, custom map files).
    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl SearchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SearchError::InvalidScenario {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An N-Queens min-conflicts run.
pub struct QueensScenario {
    /// Board size (number of queens).
    pub n: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fixed seed for reproducible runs; `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub limits: ResourceLimits,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl QueensScenario {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.n < MIN_QUEENS {
            return Err(SearchError::invalid(format!(
                "no solution is possible for {} queens (need at least {MIN_QUEENS})",
                self.n
            )));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::invalid("max_iterations must be >= 1"));
        }
        // One runtime step per iteration; running out of iterations must not trip the budget.
        if self.max_iterations as u64 > self.limits.max_runtime_steps {
            return Err(SearchError::invalid(format!(
                "max_iterations ({}) exceeds max_runtime_steps ({})",
                self.max_iterations, self.limits.max_runtime_steps
            )));
        }
        Ok(())
    }

    /// Random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A vertex-coloring problem: immutable graph + palette configuration.
pub struct ColoringScenario {
    pub name: String,
    pub graph: AdjacencyMatrix,
    pub palette: Palette,
    /// Optional human-readable vertex names (empty means `v0`, `v1`, ...).
    #[serde(default)]
    pub vertex_names: Vec<String>,
    /// Order in which vertices are colored; `None` is index order.
    #[serde(default)]
    pub order: Option<Vec<usize>>,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl ColoringScenario {
    pub fn new(name: impl Into<String>, graph: AdjacencyMatrix, palette: Palette) -> Self {
        Self {
            name: name.into(),
            graph,
            palette,
            vertex_names: Vec::new(),
            order: None,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_vertex_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.vertex_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_order(mut self, order: Vec<usize>) -> Self {
        self.order = Some(order);
        self
    }

    /// Keep only the first `k` palette colors (or pad with generic names).
    pub fn with_palette_size(mut self, k: usize) -> Self {
        self.palette = self.palette.resized(k);
        self
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.len()
    }

    pub fn vertex_name(&self, v: usize) -> Cow<'_, str> {
        match self.vertex_names.get(v) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("v{v}")),
        }
    }

    pub fn vertex_order(&self) -> Cow<'_, [usize]> {
        match &self.order {
            Some(order) => Cow::Borrowed(order.as_slice()),
            None => Cow::Owned((0..self.vertex_count()).collect()),
        }
    }

    /// Validate scenario invariants. The matrix itself is checked when it is built.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.palette.is_empty() {
            return Err(SearchError::invalid("palette must contain at least one color"));
        }

        let n = self.vertex_count();
        if !self.vertex_names.is_empty() && self.vertex_names.len() != n {
            return Err(SearchError::invalid(format!(
                "expected {n} vertex names, got {}",
                self.vertex_names.len()
            )));
        }

        if let Some(order) = &self.order {
            let mut seen = vec![false; n];
            for &v in order {
                if v >= n || std::mem::replace(&mut seen[v], true) {
                    return Err(SearchError::invalid(format!(
                        "vertex order is not a permutation of 0..{n} (offending entry {v})"
                    )));
                }
            }
            if order.len() != n {
                return Err(SearchError::invalid(format!(
                    "vertex order has {} entries, expected {n}",
                    order.len()
                )));
            }
        }

        Ok(())
    }
}

/// A Tic-Tac-Toe game setup: the start grid, who moves first and which mark the engine plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeScenario {
    pub name: String,
    pub grid: Grid,
    pub first_to_move: Mark,
    pub computer: Mark,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl TicTacToeScenario {
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
            first_to_move: Mark::X,
            computer: Mark::O,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_first_to_move(mut self, mark: Mark) -> Self {
        self.first_to_move = mark;
        self
    }

    pub fn with_computer(mut self, mark: Mark) -> Self {
        self.computer = mark;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.grid.is_winner(Mark::X) && self.grid.is_winner(Mark::O) {
            return Err(SearchError::invalid(
                "start grid has a completed line for both marks",
            ));
        }
        Ok(())
    }
}
