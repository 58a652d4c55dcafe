//! Dual multi-source BFS with distance-table merge.
//!
//! The search walks forward edges (towards the root) twice: once from source
//! set A to completion, then once from source set B. While B's traversal
//! dequeues vertices, each one already reached from A is a common ancestor
//! candidate with length `dist_a + dist_b`. Since A's table is final before B
//! starts, every candidate is exact.

use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::access::DistanceTable;
use crate::graph::CsrDigraph;

/// A shortest common ancestor and the length of the ancestral path through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ancestry {
    /// The common ancestor vertex.
    pub ancestor: usize,
    /// Sum of the distances from each source set to `ancestor`.
    pub length: usize,
}

/// A multi-source breadth-first traversal over forward edges.
///
/// This iterator yields `(vertex, distance)` pairs in dequeue order, where
/// `distance` is the number of edges from the nearest source. Sources are
/// seeded at distance 0 in the order given; repeated sources are seeded once.
pub struct AncestorBfs<'g> {
    graph: &'g CsrDigraph,
    table: DistanceTable,
    queue: VecDeque<usize>,
}

impl<'g> AncestorBfs<'g> {
    /// Starts a traversal from every vertex in `sources`.
    ///
    /// # Panics
    /// Panics if any source is not a vertex of `graph`.
    pub fn new(graph: &'g CsrDigraph, sources: &[usize]) -> Self {
        let mut table = DistanceTable::new(graph.vertex_count());
        let mut queue = VecDeque::with_capacity(sources.len());
        for &s in sources {
            if table.insert_first(s, 0) {
                queue.push_back(s);
            }
        }
        Self {
            graph,
            table,
            queue,
        }
    }

    /// Distance from the source set to `v`, if `v` has been discovered.
    pub fn distance(&self, v: usize) -> Option<usize> {
        self.table.get(v)
    }

    /// Number of vertices discovered so far, dequeued or not.
    pub fn discovered(&self) -> usize {
        self.table.reached()
    }

    /// Runs the traversal to completion.
    fn finish(mut self) -> DistanceTable {
        while self.next().is_some() {}
        self.table
    }
}

impl Iterator for AncestorBfs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let d = self.table.get(u)?;

        for v in self.graph.neighbors(u) {
            if self.table.insert_first(v, d + 1) {
                self.queue.push_back(v);
            }
        }

        Some((u, d))
    }
}

/// Finds the shortest common ancestor of source sets `a` and `b`.
///
/// Returns `None` if no vertex is reachable from both sets. Among ancestors
/// with the same minimal length, the one dequeued first by B's traversal wins.
/// Two equal single-vertex sets return that vertex at length 0 without
/// traversing.
///
/// # Panics
/// Panics if any source is not a vertex of `graph`.
pub fn search(graph: &CsrDigraph, a: &[usize], b: &[usize]) -> Option<Ancestry> {
    if let ([v], [w]) = (a, b) {
        if v == w {
            return Some(Ancestry {
                ancestor: *v,
                length: 0,
            });
        }
    }

    let from_a = AncestorBfs::new(graph, a).finish();
    debug_assert_eq!(from_a.capacity(), graph.vertex_count());

    let mut best: Option<Ancestry> = None;
    for (p, dist_b) in AncestorBfs::new(graph, b) {
        let Some(dist_a) = from_a.get(p) else {
            continue;
        };
        let length = dist_a + dist_b;
        if best.map_or(true, |best| length < best.length) {
            best = Some(Ancestry {
                ancestor: p,
                length,
            });
        }
    }

    tracing::trace!(
        sources_a = a.len(),
        sources_b = b.len(),
        reached_a = from_a.reached(),
        ?best,
        "ancestor search"
    );
    best
}
