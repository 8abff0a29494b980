//! Full-depth minimax for Tic-Tac-Toe.
//!
//! Scores are from the maximizing mark's point of view: `+1` win, `-1` loss, `0` draw.
//! Terminal scores ignore depth, so a slow forced win is as good as an immediate one.
//!
//! The grid is searched in place: every trial move goes through [`Grid::with_trial`], so the
//! caller's grid is unchanged when a call returns (successfully or not).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};
use crate::search::resources::ResourceTracker;
use crate::tictactoe::grid::{Cell, Grid, Mark};

pub type Score = i8;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub cell: Cell,
    pub score: Score,
}

#[derive(Debug, Clone)]
pub struct Minimax {
    max_mark: Mark,
    tracker: ResourceTracker,
}

impl Minimax {
    pub fn new(max_mark: Mark) -> Self {
        Self::with_limits(max_mark, ResourceLimits::default())
    }

    pub fn with_limits(max_mark: Mark, limits: ResourceLimits) -> Self {
        Self {
            max_mark,
            tracker: ResourceTracker::new(limits),
        }
    }

    #[inline]
    pub fn max_mark(&self) -> Mark {
        self.max_mark
    }

    #[inline]
    pub fn min_mark(&self) -> Mark {
        self.max_mark.opponent()
    }

    /// Nodes visited since construction (or the last [`Minimax::reset_counts`]).
    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.tracker.counts()
    }

    #[inline]
    pub fn reset_counts(&mut self) {
        self.tracker.reset();
    }

    /// Static score of a terminal grid, `None` if play continues.
    ///
    /// A maximizing line is checked before a minimizing one, then a full board.
    pub fn static_score(&self, grid: &Grid) -> Option<Score> {
        if grid.is_winner(self.max_mark) {
            Some(WIN)
        } else if grid.is_winner(self.min_mark()) {
            Some(LOSS)
        } else if grid.is_full() {
            Some(DRAW)
        } else {
            None
        }
    }

    /// Minimax value of `grid` with the maximizing side to move iff `maximizing`.
    pub fn evaluate(&mut self, grid: &mut Grid, maximizing: bool) -> Result<Score, SearchError> {
        self.tracker.bump_nodes("minimax", 1)?;

        if let Some(score) = self.static_score(grid) {
            return Ok(score);
        }

        let mark = if maximizing {
            self.max_mark
        } else {
            self.min_mark()
        };

        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for cell in grid.empty_cells().collect::<Vec<_>>() {
            let score = grid.with_trial(cell, mark, |g| self.evaluate(g, !maximizing))?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }

    /// Score every empty cell as a maximizing move, in row-major order.
    pub fn scored_moves(&mut self, grid: &mut Grid) -> Result<Vec<ScoredMove>, SearchError> {
        let mut out = Vec::with_capacity(9);
        if grid.is_terminal() {
            return Ok(out);
        }

        for cell in grid.empty_cells().collect::<Vec<_>>() {
            let score = grid.with_trial(cell, self.max_mark, |g| self.evaluate(g, false))?;
            out.push(ScoredMove { cell, score });
        }
        Ok(out)
    }

    /// The first row-major move with the highest score, `None` on a terminal grid.
    pub fn best_move(&mut self, grid: &mut Grid) -> Result<Option<ScoredMove>, SearchError> {
        let moves = self.scored_moves(grid)?;
        let best = pick_first_max(&moves);
        if let Some(m) = best {
            debug!(
                mark = %self.max_mark,
                row = m.cell.row,
                col = m.cell.col,
                score = m.score,
                nodes = self.counts().nodes,
                "minimax best move"
            );
        }
        Ok(best)
    }
}

/// Strictly-greater scan, so the earliest maximum wins ties.
pub fn pick_first_max(moves: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &m in moves {
        if best.map_or(true, |b| m.score > b.score) {
            best = Some(m);
        }
    }
    best
}
