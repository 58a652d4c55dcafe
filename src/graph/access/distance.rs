//! Vertex-indexed BFS distance tables.

use crate::graph::access::visited::VisitedBits;

/// Distances from a source set, indexed directly by vertex.
///
/// A vertex is recorded at most once, with the first distance offered. Under
/// BFS that first distance is the minimum. Unreached vertices have no entry.
#[derive(Debug, Clone)]
pub(crate) struct DistanceTable {
    dist: Vec<usize>,
    reached: VisitedBits,
}

impl DistanceTable {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![0; vertex_count],
            reached: VisitedBits::new(vertex_count),
        }
    }

    /// Records `distance` for `v` unless `v` already has one.
    ///
    /// Returns `true` if this call recorded the distance.
    #[inline]
    pub(crate) fn insert_first(&mut self, v: usize, distance: usize) -> bool {
        if self.reached.try_visit(v) {
            self.dist[v] = distance;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn get(&self, v: usize) -> Option<usize> {
        self.reached.is_visited(v).then(|| self.dist[v])
    }

    /// Number of vertices with a recorded distance.
    pub(crate) fn reached(&self) -> usize {
        self.reached.count()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.reached.len()
    }
}
