//! Graph vertex coloring by exhaustive backtracking.

pub mod backtrack;
pub mod graph;
pub mod palette;
