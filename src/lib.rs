//! Classical combinatorial search: min-conflicts N-Queens, backtracking graph coloring and
//! minimax Tic-Tac-Toe.
//!
//! Solvers take an immutable scenario from [`scenario`] and return plain result values; the
//! binaries under `src/bin` handle prompts and printing.

pub mod coloring;
pub mod logging;
pub mod queens;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;
pub mod tictactoe;
