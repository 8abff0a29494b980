//! Turn alternation between a human and the minimax engine.
//!
//! The driver owns the grid, validates human moves, asks [`Minimax`] for the engine's reply
//! and reports the game status after every move. It does no I/O.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scenario::{SearchError, TicTacToeScenario};
use crate::tictactoe::grid::{Cell, Grid, Mark};
use crate::tictactoe::minimax::{pick_first_max, Minimax, ScoredMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress { to_move: Mark },
    Won(Mark),
    Draw,
}

impl Status {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

/// The engine's answer to one position.
#[derive(Debug, Clone)]
pub struct ComputerTurn {
    pub chosen: ScoredMove,
    /// Every candidate the engine scored, row-major.
    pub considered: Vec<ScoredMove>,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    to_move: Mark,
    engine: Minimax,
}

impl Game {
    pub fn new(scn: &TicTacToeScenario) -> Result<Self, SearchError> {
        scn.validate()?;
        Ok(Self {
            grid: scn.grid,
            to_move: scn.first_to_move,
            engine: Minimax::with_limits(scn.computer, scn.limits),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn computer(&self) -> Mark {
        self.engine.max_mark()
    }

    #[inline]
    pub fn human(&self) -> Mark {
        self.engine.min_mark()
    }

    pub fn status(&self) -> Status {
        match self.grid.winner() {
            Some(mark) => Status::Won(mark),
            None if self.grid.is_full() => Status::Draw,
            None => Status::InProgress {
                to_move: self.to_move,
            },
        }
    }

    pub fn play_human(&mut self, cell: Cell) -> Result<Status, SearchError> {
        self.turn_check(self.human())
            .map_err(|reason| SearchError::IllegalMove {
                row: cell.row,
                col: cell.col,
                reason,
            })?;
        self.grid.try_place(cell, self.human())?;
        Ok(self.finish_move(self.human()))
    }

    pub fn play_computer(&mut self) -> Result<ComputerTurn, SearchError> {
        let mark = self.computer();
        self.turn_check(mark).map_err(SearchError::invalid)?;

        self.engine.reset_counts();
        let considered = self.engine.scored_moves(&mut self.grid)?;
        let Some(chosen) = pick_first_max(&considered) else {
            return Err(SearchError::invalid("no move available for the computer"));
        };
        debug!(
            row = chosen.cell.row,
            col = chosen.cell.col,
            score = chosen.score,
            nodes = self.engine.counts().nodes,
            "computer move"
        );

        self.grid.place(chosen.cell, mark);
        let status = self.finish_move(mark);
        Ok(ComputerTurn {
            chosen,
            considered,
            status,
        })
    }

    fn turn_check(&self, mark: Mark) -> Result<(), String> {
        match self.status() {
            Status::InProgress { to_move } if to_move == mark => Ok(()),
            Status::InProgress { to_move } => Err(format!("it is {to_move}'s turn, not {mark}'s")),
            _ => Err("the game is already over".to_string()),
        }
    }

    fn finish_move(&mut self, mover: Mark) -> Status {
        if !self.status().is_over() {
            self.to_move = mover.opponent();
        }
        self.status()
    }
}
