//! Rooted DAG validation.
//!
//! A graph is usable for ancestor queries only if it is acyclic and has
//! exactly one vertex with no outgoing edges (the root every other vertex
//! eventually reaches). [`RootedDag::validate`] checks both once, at
//! construction, and keeps an immutable CSR copy of the input.

use std::collections::VecDeque;

use crate::error::ScaError;
use crate::graph::{CsrDigraph, Digraph};

/// A validated, single-rooted DAG.
///
/// Holds its own copy of the graph; mutating the [`Digraph`] it was built
/// from has no effect on it.
#[derive(Debug, Clone)]
pub struct RootedDag {
    graph: CsrDigraph,
    root: usize,
    topo_order: Vec<usize>,
}

impl RootedDag {
    /// Validates `graph` and takes a copy of it.
    ///
    /// Checks run in this order:
    /// 1. [`ScaError::CycleDetected`] if any directed cycle exists
    ///    (self-loops included).
    /// 2. [`ScaError::EmptyGraph`] if there are no vertices.
    /// 3. [`ScaError::MultipleOrNoRoots`] unless exactly one vertex has
    ///    out-degree zero.
    pub fn validate(graph: &Digraph) -> Result<Self, ScaError> {
        let graph = CsrDigraph::from_digraph(graph);

        let Some(topo_order) = topological_sort(&graph) else {
            tracing::debug!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "rejected graph: directed cycle"
            );
            return Err(ScaError::CycleDetected);
        };

        if graph.vertex_count() == 0 {
            return Err(ScaError::EmptyGraph);
        }

        let mut roots = (0..graph.vertex_count()).filter(|&v| graph.degree(v) == 0);
        let root = match (roots.next(), roots.count()) {
            (Some(root), 0) => root,
            (first, rest) => {
                let roots = usize::from(first.is_some()) + rest;
                tracing::debug!(roots, "rejected graph: not single-rooted");
                return Err(ScaError::MultipleOrNoRoots { roots });
            }
        };

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            root,
            "validated rooted DAG"
        );

        Ok(Self {
            graph,
            root,
            topo_order,
        })
    }

    /// The unique vertex with out-degree zero.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Out-neighbors (direct hypernyms) of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.neighbors(v)
    }

    /// Out-degree of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn out_degree(&self, v: usize) -> usize {
        self.graph.degree(v)
    }

    /// A topological order of the vertices: every edge points from an earlier
    /// vertex to a later one, so the root comes last.
    pub fn topological_order(&self) -> &[usize] {
        &self.topo_order
    }

    /// The underlying CSR graph.
    pub fn graph(&self) -> &CsrDigraph {
        &self.graph
    }
}

/// Kahn's algorithm. Returns `None` if the graph has a cycle.
fn topological_sort(graph: &CsrDigraph) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    let mut indeg = vec![0usize; n];
    for u in 0..n {
        for v in graph.neighbors(u) {
            indeg[v] += 1;
        }
    }

    // Sources in increasing order for determinism.
    let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in graph.neighbors(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    // Vertices on or behind a cycle never reach in-degree zero.
    (order.len() == n).then_some(order)
}

#[cfg(test)]
mod tests;
