//! Data types for the circuit enumerator: graph, search config, errors.
//!
//! Kept small and explicit so that `validate` and `dfs` read top to bottom.

use std::fmt;

/// One elementary circuit `[v0, v1, ..., vk, v0]`, closed by repeating its
/// minimum vertex.
pub type Circuit<V = usize> = Vec<V>;

/// Simple directed graph on the dense vertex set `0..n`.
///
/// Invariants (checked by `validate`, not by construction):
/// - every successor is `< n`;
/// - no successor appears twice in the same list.
///
/// Successor order is significant: it fixes the order circuits are discovered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digraph {
    pub adj: Vec<Vec<usize>>, // successors of vertex k, in exploration order
}

impl Digraph {
    #[inline]
    pub fn new(adj: Vec<Vec<usize>>) -> Self {
        Self { adj }
    }

    /// Graph with `n` isolated vertices.
    #[inline]
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Append `from → to` at the end of `from`'s successor list.
    ///
    /// Grows the vertex set so that both endpoints exist.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let need = from.max(to) + 1;
        if self.adj.len() < need {
            self.adj.resize_with(need, Vec::new);
        }
        self.adj[from].push(to);
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Successors of `v`; empty for an out-of-range vertex.
    #[inline]
    pub fn successors(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors(from).contains(&to)
    }
}

impl From<Vec<Vec<usize>>> for Digraph {
    fn from(adj: Vec<Vec<usize>>) -> Self {
        Self::new(adj)
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Maximum number of vertices on the active search path. Recursion depth
    /// equals the path length, so this bounds stack usage; a run that needs
    /// more fails with `EnumerateError::DepthExceeded`.
    pub max_depth: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self { max_depth: 4096 }
    }
}

/// Why an enumeration run did not produce a result.
///
/// Input errors are reported before any search begins; `DepthExceeded` aborts
/// a run in progress. No partial result is returned in either case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumerateError<V = usize> {
    /// An edge points at a vertex that is not part of the graph.
    UnknownVertex { from: V, to: V },
    /// The same edge is listed twice; only simple digraphs are supported.
    ParallelEdge { from: V, to: V },
    /// The search path grew beyond `SearchCfg::max_depth`.
    DepthExceeded { limit: usize },
}

impl<V> EnumerateError<V> {
    /// Translate the vertex identifiers carried by the error.
    pub fn map_vertex<W>(self, mut f: impl FnMut(V) -> W) -> EnumerateError<W> {
        match self {
            EnumerateError::UnknownVertex { from, to } => EnumerateError::UnknownVertex {
                from: f(from),
                to: f(to),
            },
            EnumerateError::ParallelEdge { from, to } => EnumerateError::ParallelEdge {
                from: f(from),
                to: f(to),
            },
            EnumerateError::DepthExceeded { limit } => EnumerateError::DepthExceeded { limit },
        }
    }
}

impl<V: fmt::Debug> fmt::Display for EnumerateError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerateError::UnknownVertex { from, to } => {
                write!(f, "edge {:?} -> {:?} references an unknown vertex", from, to)
            }
            EnumerateError::ParallelEdge { from, to } => write!(
                f,
                "edge {:?} -> {:?} is listed more than once (multigraphs are not supported)",
                from, to
            ),
            EnumerateError::DepthExceeded { limit } => {
                write!(f, "search path exceeded the depth limit of {} vertices", limit)
            }
        }
    }
}

impl<V: fmt::Debug> std::error::Error for EnumerateError<V> {}
