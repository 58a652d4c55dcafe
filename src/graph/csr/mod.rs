//! A compact CSR (compressed sparse row) digraph.
//!
//! CSR stores all out-edges in one contiguous array, row by row, which makes
//! the forward walks of the ancestor search cache-friendly.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `edges`: contiguous `usize` targets for each row

use crate::graph::Digraph;

/// An immutable CSR digraph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_digraph` | \(O(n + m)\) | Copies the adjacency lists |
/// | `neighbors` | \(O(1)\) | Returns iterator over outgoing neighbors |
/// | `degree` | \(O(1)\) | Returns out-degree |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of neighbors |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrDigraph {
    offsets: Vec<usize>,
    edges: Vec<usize>,
}

impl CsrDigraph {
    /// Copies a [`Digraph`] into CSR form, keeping each row's edge order.
    pub fn from_digraph(graph: &Digraph) -> Self {
        let n = graph.vertex_count();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut edges = Vec::with_capacity(graph.edge_count());

        for v in 0..n {
            edges.extend(graph.neighbors(v));
            offsets.push(edges.len());
        }

        Self { offsets, edges }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len().saturating_sub(1)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the out-neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(v).iter().copied()
    }

    /// Returns the out-degree of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn degree(&self, v: usize) -> usize {
        self.row(v).len()
    }

    /// Checks if an edge exists from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count() && self.row(from).contains(&to)
    }

    #[inline]
    fn row(&self, v: usize) -> &[usize] {
        assert!(v < self.vertex_count(), "vertex {v} out of bounds");
        &self.edges[self.offsets[v]..self.offsets[v + 1]]
    }
}

#[cfg(test)]
mod tests;
