//! Validated, owned source sets for set-to-set queries.

use crate::error::ScaError;

/// A non-empty list of vertices, all below the graph's vertex count.
///
/// Built by draining a caller's iterator exactly once, so single-use
/// iterators are safe to pass to set queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    vertices: Vec<usize>,
}

impl SourceSet {
    /// Collects `vertices`, checking each against `vertex_count`.
    ///
    /// Fails with [`ScaError::OutOfRange`] on the first out-of-range member,
    /// or [`ScaError::EmptySet`] if the iterator yields nothing.
    pub fn collect<I>(vertices: I, vertex_count: usize) -> Result<Self, ScaError>
    where
        I: IntoIterator<Item = usize>,
    {
        let vertices = vertices
            .into_iter()
            .map(|v| {
                if v < vertex_count {
                    Ok(v)
                } else {
                    Err(ScaError::out_of_range(v, vertex_count))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if vertices.is_empty() {
            return Err(ScaError::EmptySet);
        }
        Ok(Self { vertices })
    }

    /// The members, in the order they were supplied.
    pub fn as_slice(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of members, counting repeats.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the set has no members, which a collected set never does.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
