//! Per-traversal scratch storage: visited bitsets and distance tables.

pub(crate) mod distance;
pub(crate) mod visited;

pub(crate) use distance::DistanceTable;
