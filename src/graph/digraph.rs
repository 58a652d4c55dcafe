//! A mutable adjacency-list digraph, the input format for validation.
//!
//! Loaders build a [`Digraph`] edge by edge; [`RootedDag::validate`] then takes
//! an immutable CSR copy of it.
//!
//! [`RootedDag::validate`]: crate::graph::RootedDag::validate

use std::fs;
use std::path::Path;

use crate::error::{LoadError, ScaError};

/// A directed graph over vertices `0..vertex_count`.
///
/// An edge `v -> w` reads "w is a hypernym (ancestor) of v". Out-neighbors are
/// reported in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Digraph {
    /// Creates a digraph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a digraph from adjacency lists.
    ///
    /// Fails with [`ScaError::OutOfRange`] if any edge target is not a vertex.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, ScaError> {
        let mut graph = Self::new(adjacency.len());
        for (v, targets) in adjacency.iter().enumerate() {
            for &w in targets {
                graph.add_edge(v, w)?;
            }
        }
        Ok(graph)
    }

    /// Builds a digraph with `vertex_count` vertices from an edge list.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, ScaError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Adds the edge `v -> w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), ScaError> {
        let n = self.vertex_count();
        if v >= n {
            return Err(ScaError::out_of_range(v, n));
        }
        if w >= n {
            return Err(ScaError::out_of_range(w, n));
        }
        self.adjacency[v].push(w);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[v].iter().copied()
    }

    /// Out-degree of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Parses the whitespace-separated text format `V E v1 w1 ... vE wE`.
    ///
    /// `input` names the source in error messages.
    pub fn parse(input: &str, text: &str) -> Result<Self, LoadError> {
        let mut tokens = text.split_whitespace();
        let mut next = |what: &str| -> Result<usize, LoadError> {
            let token = tokens
                .next()
                .ok_or_else(|| LoadError::parse(input, 0, format!("missing {what}")))?;
            token
                .parse()
                .map_err(|_| LoadError::parse(input, 0, format!("invalid {what} `{token}`")))
        };

        let vertex_count = next("vertex count")?;
        let edge_count = next("edge count")?;
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| LoadError::parse(input, 0, "vertex count too large"))?;
        adjacency.resize_with(vertex_count, Vec::new);
        let mut graph = Self {
            adjacency,
            edge_count: 0,
        };
        for _ in 0..edge_count {
            let v = next("edge source")?;
            let w = next("edge target")?;
            graph
                .add_edge(v, w)
                .map_err(|err| LoadError::parse(input, 0, err.to_string()))?;
        }
        Ok(graph)
    }

    /// Reads and parses a digraph file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_tracks_counts_and_order() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(g.out_degree(2), 0);
    }

    #[test]
    fn add_edge_rejects_unknown_vertices() {
        let mut g = Digraph::new(2);
        assert_eq!(
            g.add_edge(0, 2),
            Err(ScaError::OutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn from_adjacency_matches_edges() {
        let g = Digraph::from_adjacency(&[vec![1, 2], vec![2], vec![]]).unwrap();
        let h = Digraph::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g, h);
    }

    #[test]
    fn parse_reads_counts_then_pairs() {
        let g = Digraph::parse("digraph1.txt", "3\n2\n1 0\n2 0\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn parse_reports_truncated_input() {
        let err = Digraph::parse("g", "3 2 1 0 2").unwrap_err();
        assert_eq!(err.to_string(), "g: missing edge target");

        let err = Digraph::parse("g", "3 x").unwrap_err();
        assert_eq!(err.to_string(), "g: invalid edge count `x`");

        let err = Digraph::parse("g", "2 1 0 5").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn parse_rejects_unallocatable_vertex_count() {
        let err = Digraph::parse("g", &format!("{} 0", usize::MAX)).unwrap_err();
        assert_eq!(err.to_string(), "g: vertex count too large");
    }
}
