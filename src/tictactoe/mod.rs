//! Tic-Tac-Toe: grid, minimax solver and a turn-taking driver.

pub mod game;
pub mod grid;
pub mod minimax;
