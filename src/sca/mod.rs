//! Shortest common ancestor (SCA) queries.
//!
//! - `search`: the pure dual-BFS engine
//! - `source_set`: validated source sets for set-to-set queries
//! - `facade`: [`ShortestCommonAncestor`], the checked query API

pub mod facade;
pub mod search;
pub mod source_set;

pub use facade::ShortestCommonAncestor;
pub use search::{search, AncestorBfs, Ancestry};
pub use source_set::SourceSet;
