use rand::Rng;
use serde::{Deserialize, Serialize};

/// A queen placement: one queen per row, `columns[row]` is that queen's column.
///
/// The one-queen-per-row invariant holds by construction, so conflicts can only come from
/// shared columns or diagonals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueenBoard {
    columns: Vec<usize>,
}

impl QueenBoard {
    pub fn from_columns(columns: Vec<usize>) -> Self {
        debug_assert!(columns.iter().all(|&c| c < columns.len()));
        Self { columns }
    }

    /// One uniformly random column per row.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let columns = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { columns }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[inline]
    pub fn column(&self, row: usize) -> usize {
        self.columns[row]
    }

    #[inline]
    pub fn set_column(&mut self, row: usize, col: usize) {
        debug_assert!(col < self.len());
        self.columns[row] = col;
    }

    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// `(row, column)` pairs in row order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }
}
