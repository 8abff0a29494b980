use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::scenario::SearchError;

/// A validated undirected simple graph as a square 0/1 adjacency matrix.
///
/// Construction rejects anything that is not square, symmetric, 0/1 valued and zero on the
/// diagonal, so solvers never re-check these properties. Serialized as a nested array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, SearchError> {
        let n = rows.len();
        if n == 0 {
            return Err(SearchError::invalid("adjacency matrix is empty"));
        }

        let mut cells = Vec::with_capacity(n * n);
        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SearchError::invalid(format!(
                    "adjacency matrix is not square: row {u} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (v, &x) in row.iter().enumerate() {
                match x {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => {
                        return Err(SearchError::invalid(format!(
                            "adjacency entry [{u}][{v}] = {x} is not 0 or 1"
                        )))
                    }
                }
            }
        }

        for u in 0..n {
            if cells[u * n + u] {
                return Err(SearchError::invalid(format!(
                    "vertex {u} is adjacent to itself"
                )));
            }
            for v in (u + 1)..n {
                if cells[u * n + v] != cells[v * n + u] {
                    return Err(SearchError::invalid(format!(
                        "adjacency matrix is not symmetric at [{u}][{v}]"
                    )));
                }
            }
        }

        Ok(Self { n, cells })
    }

    /// Build from an undirected edge list over `n` vertices. Duplicate edges are harmless.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, SearchError> {
        let mut rows = vec![vec![0u8; n]; n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(SearchError::invalid(format!(
                    "edge ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            rows[u][v] = 1;
            rows[v][u] = 1;
        }
        Self::new(rows)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.cells[u * self.n + v]
    }

    /// Neighbors of `v` in index order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&u| self.is_adjacent(v, u))
    }

    /// Edges as `(u, v)` with `u < v`, lexicographic.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if self.is_adjacent(u, v) {
                    out.push((u, v));
                }
            }
        }
        out
    }

    pub fn has_edges(&self) -> bool {
        self.cells.iter().any(|&b| b)
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.n)
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect()
    }

    /// Find a cycle of odd length, if any, as a vertex sequence (closing edge implied).
    ///
    /// A graph is 2-colorable iff this returns `None`. BFS layers give each vertex a side; the
    /// first edge joining two vertices on the same side closes an odd cycle through their lowest
    /// common BFS ancestor.
    pub fn find_odd_cycle(&self) -> Option<Vec<usize>> {
        let n = self.n;
        let mut depth: Vec<Option<usize>> = vec![None; n];
        let mut parent: Vec<usize> = (0..n).collect();

        for root in 0..n {
            if depth[root].is_some() {
                continue;
            }
            depth[root] = Some(0);
            let mut q = VecDeque::from([root]);

            while let Some(u) = q.pop_front() {
                let du = depth[u].unwrap_or(0);
                for v in self.neighbors(u) {
                    match depth[v] {
                        None => {
                            depth[v] = Some(du + 1);
                            parent[v] = u;
                            q.push_back(v);
                        }
                        Some(dv) if dv % 2 == du % 2 => {
                            return Some(self.close_cycle(&depth, &parent, u, v));
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        None
    }

    fn close_cycle(
        &self,
        depth: &[Option<usize>],
        parent: &[usize],
        mut a: usize,
        mut b: usize,
    ) -> Vec<usize> {
        let d = |x: usize| depth[x].unwrap_or(0);
        let mut left = vec![a];
        let mut right = vec![b];
        while a != b {
            if d(a) >= d(b) {
                a = parent[a];
                left.push(a);
            } else {
                b = parent[b];
                right.push(b);
            }
        }
        // Both paths now end in the common ancestor; keep it once. The walk runs from the
        // ancestor down to `a`, across the closing edge to `b`, then back up.
        right.pop();
        left.reverse();
        left.extend(right);
        left
    }

    #[inline]
    pub fn is_bipartite(&self) -> bool {
        self.find_odd_cycle().is_none()
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = SearchError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(m: AdjacencyMatrix) -> Self {
        m.rows()
    }
}
