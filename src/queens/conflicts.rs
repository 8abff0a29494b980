//! Pairwise conflict evaluation for queen placements.
//!
//! Conflicts are derived from the board on demand and never cached.

use crate::queens::board::QueenBoard;

/// Whether the queens in rows `i` and `j` attack each other (shared column or diagonal).
///
/// Callers pass distinct rows; rows never conflict by construction.
#[inline]
pub fn attacks(board: &QueenBoard, i: usize, j: usize) -> bool {
    let (a, b) = (board.column(i), board.column(j));
    a == b || a.abs_diff(b) == i.abs_diff(j)
}

/// Number of attacking pairs over all `n * (n - 1) / 2` row pairs.
pub fn count_conflicts(board: &QueenBoard) -> usize {
    let n = board.len();
    let mut conflicts = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if attacks(board, i, j) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Whether the queen in `row` attacks at least one other queen.
pub fn is_in_conflict(board: &QueenBoard, row: usize) -> bool {
    (0..board.len()).any(|other| other != row && attacks(board, row, other))
}

/// All rows currently in conflict, ascending.
pub fn conflicted_rows(board: &QueenBoard) -> Vec<usize> {
    (0..board.len())
        .filter(|&row| is_in_conflict(board, row))
        .collect()
}
