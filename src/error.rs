//! Error types for graph validation, queries and file loading.

use core::fmt;
use std::path::PathBuf;

/// Failures raised by DAG validation and shortest-common-ancestor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaError {
    /// The graph contains at least one directed cycle.
    CycleDetected,
    /// The graph has no vertices.
    EmptyGraph,
    /// The number of zero out-degree vertices is not exactly one.
    MultipleOrNoRoots {
        /// How many zero out-degree vertices were found.
        roots: usize,
    },
    /// A vertex index lies outside `[0, vertex_count)`.
    OutOfRange {
        /// The offending vertex, as supplied by the caller.
        vertex: i64,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A source set yielded no vertices.
    EmptySet,
    /// The two source sets share no ancestor.
    NoCommonAncestor,
}

impl fmt::Display for ScaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CycleDetected => f.write_str("graph contains a directed cycle"),
            Self::EmptyGraph => f.write_str("graph has no vertices"),
            Self::MultipleOrNoRoots { roots } => {
                write!(f, "graph must have exactly one root, found {roots}")
            }
            Self::OutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph with {vertex_count} vertices"
            ),
            Self::EmptySet => f.write_str("source set is empty"),
            Self::NoCommonAncestor => f.write_str("source sets have no common ancestor"),
        }
    }
}

impl std::error::Error for ScaError {}

impl ScaError {
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Failures raised while reading a digraph or WordNet files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The input text is malformed.
    Parse {
        /// Name of the input being parsed (file name or a label).
        input: String,
        /// 1-based line number, or 0 when the input is not line-oriented.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// The parsed graph failed validation.
    Graph(ScaError),
}

impl LoadError {
    pub(crate) fn parse(input: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "failed to read {}", path.display()),
            Self::Parse {
                input,
                line: 0,
                message,
            } => write!(f, "{input}: {message}"),
            Self::Parse {
                input,
                line,
                message,
            } => write!(f, "{input}:{line}: {message}"),
            Self::Graph(err) => write!(f, "invalid graph: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Graph(err) => Some(err),
            Self::Parse { .. } => None,
        }
    }
}

impl From<ScaError> for LoadError {
    fn from(err: ScaError) -> Self {
        Self::Graph(err)
    }
}

/// Failures raised by noun-level WordNet queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordNetError {
    /// The word is not a WordNet noun.
    UnknownNoun(String),
    /// The underlying ancestor query failed.
    Sca(ScaError),
}

impl fmt::Display for WordNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNoun(word) => write!(f, "`{word}` is not a WordNet noun"),
            Self::Sca(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for WordNetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sca(err) => Some(err),
            Self::UnknownNoun(_) => None,
        }
    }
}

impl From<ScaError> for WordNetError {
    fn from(err: ScaError) -> Self {
        Self::Sca(err)
    }
}
