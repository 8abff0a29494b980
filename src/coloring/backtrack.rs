//! Exhaustive backtracking vertex coloring.
//!
//! Vertices are colored one at a time in the scenario's vertex order. Each vertex tries colors
//! `1..=K` ascending; a color is kept only if the rest of the order can be completed. A failed
//! branch resets its vertex to [`UNCOLORED`] before trying the next color, while a successful
//! branch leaves its assignment in place all the way up.
//!
//! The search is deterministic: the same scenario always yields the same assignment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coloring::graph::AdjacencyMatrix;
use crate::coloring::palette::UNCOLORED;
use crate::scenario::{ColoringScenario, ResourceCounts, SearchError};
use crate::search::resources::ResourceTracker;

/// One color per vertex, `1..=K` once complete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorAssignment {
    colors: Vec<usize>,
}

impl ColorAssignment {
    pub fn from_colors(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn color(&self, v: usize) -> usize {
        self.colors[v]
    }

    #[inline]
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|&c| c != UNCOLORED)
    }

    /// Complete, and no edge joins two vertices of the same color.
    pub fn is_proper(&self, graph: &AdjacencyMatrix) -> bool {
        self.colors.len() == graph.len()
            && self.is_complete()
            && graph
                .edges()
                .into_iter()
                .all(|(u, v)| self.colors[u] != self.colors[v])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColoringOutcome {
    Colored(ColorAssignment),
    /// The palette is too small for this graph.
    NoColoring,
}

impl ColoringOutcome {
    pub fn assignment(&self) -> Option<&ColorAssignment> {
        match self {
            ColoringOutcome::Colored(a) => Some(a),
            ColoringOutcome::NoColoring => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColoringResult {
    pub outcome: ColoringOutcome,
    pub counts: ResourceCounts,
}

/// Whether no neighbor of `vertex` already holds `color`.
pub fn is_safe(graph: &AdjacencyMatrix, vertex: usize, assignment: &[usize], color: usize) -> bool {
    graph.neighbors(vertex).all(|u| assignment[u] != color)
}

/// Color the scenario's graph with at most `palette.len()` colors.
pub fn color_graph(scn: &ColoringScenario) -> Result<ColoringResult, SearchError> {
    scn.validate()?;

    let order = scn.vertex_order();
    let mut colorer = Colorer {
        graph: &scn.graph,
        palette_size: scn.palette.len(),
        order: &order,
        colors: vec![UNCOLORED; scn.vertex_count()],
        tracker: ResourceTracker::new(scn.limits),
    };

    let found = colorer.assign(0)?;
    let counts = colorer.tracker.counts();
    debug!(
        scenario = %scn.name,
        palette = scn.palette.len(),
        found,
        nodes = counts.nodes,
        "backtracking coloring finished"
    );

    let outcome = if found {
        ColoringOutcome::Colored(ColorAssignment::from_colors(colorer.colors))
    } else {
        ColoringOutcome::NoColoring
    };
    Ok(ColoringResult { outcome, counts })
}

struct Colorer<'a> {
    graph: &'a AdjacencyMatrix,
    palette_size: usize,
    order: &'a [usize],
    colors: Vec<usize>,
    tracker: ResourceTracker,
}

impl Colorer<'_> {
    /// Color `order[position..]`; `Ok(true)` leaves a complete proper assignment in place.
    fn assign(&mut self, position: usize) -> Result<bool, SearchError> {
        let Some(&vertex) = self.order.get(position) else {
            return Ok(true);
        };

        for color in 1..=self.palette_size {
            self.tracker.bump_nodes("coloring_assign", 1)?;
            if !is_safe(self.graph, vertex, &self.colors, color) {
                continue;
            }

            self.colors[vertex] = color;
            if self.assign(position + 1)? {
                return Ok(true);
            }
            self.colors[vertex] = UNCOLORED;
        }

        Ok(false)
    }
}
