//! Query facade over a validated rooted DAG.

use crate::error::ScaError;
use crate::graph::{Digraph, RootedDag};
use crate::sca::search::{search, Ancestry};
use crate::sca::source_set::SourceSet;

/// Shortest-common-ancestor queries over a single-rooted DAG.
///
/// The graph is validated once, in [`ShortestCommonAncestor::new`]. Every query
/// checks its arguments and then runs a fresh search; nothing is cached
/// between calls, and queries only read the graph, so a shared
/// `&ShortestCommonAncestor` can serve queries from many threads.
///
/// ### Query Cost
/// | Operation | Time | Space |
/// |-----------|------|-------|
/// | `length`, `ancestor` | \(O(V + E)\) | \(O(V)\) |
/// | `length_sets`, `ancestor_sets` | \(O(V + E)\) plus one pass over each set | \(O(V)\) |
#[derive(Debug, Clone)]
pub struct ShortestCommonAncestor {
    dag: RootedDag,
}

impl ShortestCommonAncestor {
    /// Validates `graph` and takes ownership of a copy of it.
    ///
    /// See [`RootedDag::validate`] for the rejection rules.
    pub fn new(graph: &Digraph) -> Result<Self, ScaError> {
        RootedDag::validate(graph).map(Self::from_dag)
    }

    /// Wraps an already validated DAG.
    pub fn from_dag(dag: RootedDag) -> Self {
        Self { dag }
    }

    /// The validated graph.
    pub fn dag(&self) -> &RootedDag {
        &self.dag
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.dag.vertex_count()
    }

    /// Converts a signed vertex id (as read from text input) to an index.
    ///
    /// Negative and too-large ids fail with [`ScaError::OutOfRange`].
    pub fn vertex(&self, raw: i64) -> Result<usize, ScaError> {
        let vertex_count = self.vertex_count();
        usize::try_from(raw)
            .ok()
            .filter(|&v| v < vertex_count)
            .ok_or(ScaError::OutOfRange {
                vertex: raw,
                vertex_count,
            })
    }

    /// Length of a shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: usize, w: usize) -> Result<usize, ScaError> {
        self.ancestry(v, w).map(|r| r.length)
    }

    /// A shortest common ancestor of `v` and `w`.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<usize, ScaError> {
        self.ancestry(v, w).map(|r| r.ancestor)
    }

    /// Shortest common ancestor of `v` and `w` together with its path length.
    pub fn ancestry(&self, v: usize, w: usize) -> Result<Ancestry, ScaError> {
        self.check(v)?;
        self.check(w)?;
        self.run(&[v], &[w])
    }

    /// Length of a shortest ancestral path between vertex sets `a` and `b`.
    pub fn length_sets<A, B>(&self, a: A, b: B) -> Result<usize, ScaError>
    where
        A: IntoIterator<Item = usize>,
        B: IntoIterator<Item = usize>,
    {
        self.ancestry_sets(a, b).map(|r| r.length)
    }

    /// A shortest common ancestor of vertex sets `a` and `b`.
    pub fn ancestor_sets<A, B>(&self, a: A, b: B) -> Result<usize, ScaError>
    where
        A: IntoIterator<Item = usize>,
        B: IntoIterator<Item = usize>,
    {
        self.ancestry_sets(a, b).map(|r| r.ancestor)
    }

    /// Shortest common ancestor of vertex sets `a` and `b` with its path length.
    ///
    /// `a` is fully checked before `b`. Fails with [`ScaError::OutOfRange`] if
    /// any member is not a vertex and [`ScaError::EmptySet`] if a set is empty.
    pub fn ancestry_sets<A, B>(&self, a: A, b: B) -> Result<Ancestry, ScaError>
    where
        A: IntoIterator<Item = usize>,
        B: IntoIterator<Item = usize>,
    {
        let a = SourceSet::collect(a, self.vertex_count())?;
        let b = SourceSet::collect(b, self.vertex_count())?;
        self.run(a.as_slice(), b.as_slice())
    }

    fn check(&self, v: usize) -> Result<(), ScaError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(ScaError::out_of_range(v, self.vertex_count()))
        }
    }

    fn run(&self, a: &[usize], b: &[usize]) -> Result<Ancestry, ScaError> {
        search(self.dag.graph(), a, b).ok_or(ScaError::NoCommonAncestor)
    }
}
