//! # `wordnet-sca` - Shortest Common Ancestors in Rooted DAGs
//!
//! Computes the shortest common ancestor (SCA) of two vertices, or two vertex
//! sets, in a rooted directed acyclic graph, together with the length of the
//! shortest ancestral path through it. On top of that core sits a small
//! WordNet layer that maps nouns to synsets and finds outcasts.
//!
//! ## Architecture
//!
//! 1. **Graphs** (`graph`):
//!    - [`Digraph`]: mutable adjacency lists, produced by loaders
//!    - [`CsrDigraph`]: immutable compressed rows, read by traversals
//!    - [`RootedDag`]: validation (acyclic, exactly one root) plus an owned copy
//!
//! 2. **Queries** (`sca`):
//!    - [`search()`]: two forward breadth-first traversals; A runs to completion,
//!      then B merges against A's distance table as it dequeues
//!    - [`ShortestCommonAncestor`]: argument checks and the public query API
//!
//! 3. **WordNet** (`wordnet`):
//!    - [`WordNet`]: synsets/hypernyms loading, noun `distance` and `sca`
//!    - [`Outcast`]: the noun farthest from the rest of a list
//!
//! ### Invariants
//!
//! - A validated graph has no directed cycle and exactly one vertex of
//!   out-degree zero, so every vertex reaches the root and any two source
//!   sets have a common ancestor.
//! - Each query owns its distance tables; the graph is never written after
//!   validation, so queries may run concurrently on a shared facade.
//! - Ties between equally short ancestors go to the vertex dequeued first by
//!   the second traversal.
//!
//! ## Example
//!
//! ```rust
//! use wordnet_sca::{Digraph, ShortestCommonAncestor};
//!
//! // 0 -> 2, 1 -> 2, 2 -> 3 (root)
//! let graph = Digraph::from_edges(4, [(0, 2), (1, 2), (2, 3)]).unwrap();
//! let sca = ShortestCommonAncestor::new(&graph).unwrap();
//!
//! assert_eq!(sca.length(0, 1).unwrap(), 2);
//! assert_eq!(sca.ancestor(0, 1).unwrap(), 2);
//! assert_eq!(sca.length_sets([0, 1], [2]).unwrap(), 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod sca;
pub mod wordnet;

pub use error::{LoadError, ScaError, WordNetError};
pub use graph::{CsrDigraph, Digraph, RootedDag};
pub use sca::{search, AncestorBfs, Ancestry, ShortestCommonAncestor, SourceSet};
pub use wordnet::{Outcast, WordNet};

// Compile-time assertions for the sharing guarantees queries rely on.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ShortestCommonAncestor>();
    assert_send_sync::<WordNet>();
};
