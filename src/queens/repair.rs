//! Min-conflicts local repair for N-Queens.
//!
//! Semantics:
//! - start from one uniformly random column per row,
//! - each iteration picks a conflicted row uniformly at random and moves its queen to the column
//!   with the fewest total conflicts (first such column on ties),
//! - the run stops at zero conflicts or after `max_iterations` iterations.
//!
//! This is a heuristic: it can wander on plateaus, so running out of iterations is an ordinary
//! outcome rather than an error.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::queens::board::QueenBoard;
use crate::queens::conflicts::{conflicted_rows, count_conflicts};
use crate::scenario::{QueensScenario, ResourceCounts, SearchError};
use crate::search::resources::ResourceTracker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairOutcome {
    /// A zero-conflict placement.
    Solved(QueenBoard),
    /// The iteration budget ran out; `board` is the last state reached.
    Exhausted { board: QueenBoard, conflicts: usize },
}

impl RepairOutcome {
    pub fn solution(&self) -> Option<&QueenBoard> {
        match self {
            RepairOutcome::Solved(board) => Some(board),
            RepairOutcome::Exhausted { .. } => None,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, RepairOutcome::Solved(_))
    }
}

#[derive(Debug, Clone)]
pub struct RepairResult {
    pub outcome: RepairOutcome,
    /// Repair moves committed before the run stopped.
    pub iterations: usize,
    pub counts: ResourceCounts,
}

/// Solve with the scenario's own random source (seeded if `scn.seed` is set).
pub fn solve_queens(scn: &QueensScenario) -> Result<RepairResult, SearchError> {
    let mut rng = scn.rng();
    min_conflicts(scn, &mut rng)
}

/// Run min-conflicts with an injected random source.
pub fn min_conflicts<R: Rng + ?Sized>(
    scn: &QueensScenario,
    rng: &mut R,
) -> Result<RepairResult, SearchError> {
    scn.validate()?;

    let mut tracker = ResourceTracker::new(scn.limits);
    let mut board = QueenBoard::random(scn.n, rng);
    debug!(n = scn.n, max_iterations = scn.max_iterations, "min-conflicts start");

    for iteration in 0..scn.max_iterations {
        tracker.bump_steps("min_conflicts", 1)?;

        let conflicts = count_conflicts(&board);
        if conflicts == 0 {
            debug!(iterations = iteration, "min-conflicts solved");
            return Ok(RepairResult {
                outcome: RepairOutcome::Solved(board),
                iterations: iteration,
                counts: tracker.counts(),
            });
        }

        // Non-empty whenever conflicts > 0.
        let candidates = conflicted_rows(&board);
        let row = candidates[rng.random_range(0..candidates.len())];

        let (col, after) = best_column(&mut board, row);
        trace!(iteration, conflicts, row, col, after, "repair move");
        board.set_column(row, col);
    }

    let conflicts = count_conflicts(&board);
    debug!(conflicts, "min-conflicts exhausted");
    Ok(RepairResult {
        outcome: RepairOutcome::Exhausted { board, conflicts },
        iterations: scn.max_iterations,
        counts: tracker.counts(),
    })
}

/// Try every column for `row` and return the first one with the fewest total conflicts,
/// together with that count. The row is left on the last column tried.
pub fn best_column(board: &mut QueenBoard, row: usize) -> (usize, usize) {
    let mut best_col = board.column(row);
    let mut best = usize::MAX;
    for col in 0..board.len() {
        board.set_column(row, col);
        let conflicts = count_conflicts(board);
        if conflicts < best {
            best = conflicts;
            best_col = col;
        }
    }
    (best_col, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_column_prefers_first_minimum() {
        // Row 3 totals per column: [1, 3, 0, 1].
        let mut board = QueenBoard::from_columns(vec![1, 3, 0, 0]);
        let (col, conflicts) = best_column(&mut board, 3);
        assert_eq!((col, conflicts), (2, 0));

        // Row 0 totals per column: [6, 4, 4, 4].
        let mut board = QueenBoard::from_columns(vec![0, 0, 0, 0]);
        let (col, conflicts) = best_column(&mut board, 0);
        assert_eq!((col, conflicts), (1, 4));
    }
}
