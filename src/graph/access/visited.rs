//! Dense visited sets for graph traversals.
//!
//! Each traversal owns its own [`VisitedBits`]; nothing is shared between
//! queries, so a read-only graph can serve many traversals at once.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set over `0..len`.
#[derive(Debug, Clone)]
pub(crate) struct VisitedBits {
    words: Vec<u64>,
    len: usize,
}

impl VisitedBits {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "node {node} out of bounds for {}", self.len);
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.len && self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }

    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
