//! Graph layouts and validation for ancestor queries.
//!
//! - `digraph`: the mutable adjacency-list input format loaders produce
//! - `csr`: the immutable compressed layout traversals run over
//! - `dag`: single-rooted DAG validation

pub mod csr;
pub mod dag;
pub mod digraph;
pub(crate) mod access;

pub use csr::CsrDigraph;
pub use dag::RootedDag;
pub use digraph::Digraph;
