//! N-Queens: placement state, conflict evaluation and min-conflicts repair.

pub mod board;
pub mod conflicts;
pub mod repair;
