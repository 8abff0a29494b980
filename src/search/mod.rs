//! Search utilities shared by the solvers.

pub mod resources;
