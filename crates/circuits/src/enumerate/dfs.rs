//! Depth-first circuit search with mark/unmark bookkeeping.
//!
//! Model
//! - Start vertices are taken in ascending order. A search rooted at `s` only
//!   walks vertices `>= s`, so every circuit is reported once, from its
//!   minimum vertex.
//! - A vertex is marked while it is on the path or was explored without
//!   closing a circuit. When a subtree closes at least one circuit, everything
//!   marked since entering it is unmarked so other branches may reuse it.
//! - All marks are cleared between start vertices.
//!
//! Unblocking is coarse: a productive subtree releases every vertex it marked,
//! not only those provably able to reach the start again. This costs repeated
//! exploration on graphs where many circuits share vertices, never correctness.

use super::types::{Circuit, Digraph, EnumerateError, SearchCfg};
use super::validate::validate;

/// Enumerate every elementary circuit with the default search config.
///
/// Circuits come back in discovery order, each as `[v0, ..., vk, v0]` with
/// `v0` the smallest vertex of the circuit.
pub fn enumerate_circuits(g: &Digraph) -> Result<Vec<Circuit>, EnumerateError> {
    enumerate_circuits_with(g, SearchCfg::default())
}

/// Enumerate every elementary circuit.
pub fn enumerate_circuits_with(
    g: &Digraph,
    cfg: SearchCfg,
) -> Result<Vec<Circuit>, EnumerateError> {
    let mut out = Vec::new();
    for_each_circuit(g, cfg, |c| out.push(c.to_vec()))?;
    Ok(out)
}

/// Count elementary circuits without materializing them.
pub fn count_circuits(g: &Digraph, cfg: SearchCfg) -> Result<usize, EnumerateError> {
    for_each_circuit(g, cfg, |_| {})
}

/// Stream each closed circuit to `sink` in discovery order; returns the count.
///
/// The graph is validated before the first circuit is produced. On
/// `DepthExceeded` the sink may already have seen some circuits.
pub fn for_each_circuit<F>(g: &Digraph, cfg: SearchCfg, sink: F) -> Result<usize, EnumerateError>
where
    F: FnMut(&[usize]),
{
    validate(g)?;
    tracing::debug!(
        vertices = g.num_vertices(),
        edges = g.num_edges(),
        max_depth = cfg.max_depth,
        "circuit search start"
    );
    let found = CircuitRunner::new(g, cfg, sink).run()?;
    tracing::debug!(circuits = found, "circuit search done");
    Ok(found)
}

/// DFS runner carrying the per-run state.
struct CircuitRunner<'a, F> {
    g: &'a Digraph,
    cfg: SearchCfg,
    marked: Vec<bool>,
    marked_stack: Vec<usize>,
    path: Vec<usize>,
    sink: F,
    found: usize,
}

impl<'a, F: FnMut(&[usize])> CircuitRunner<'a, F> {
    fn new(g: &'a Digraph, cfg: SearchCfg, sink: F) -> Self {
        let n = g.num_vertices();
        Self {
            g,
            cfg,
            marked: vec![false; n],
            marked_stack: Vec::new(),
            path: Vec::new(),
            sink,
            found: 0,
        }
    }

    fn run(&mut self) -> Result<usize, EnumerateError> {
        for start in 0..self.g.num_vertices() {
            self.recur(start, start)?;
            while let Some(v) = self.marked_stack.pop() {
                self.marked[v] = false;
            }
            debug_assert!(self.path.is_empty());
        }
        Ok(self.found)
    }

    /// Explore from `cur`; returns whether any circuit through `cur` closed.
    fn recur(&mut self, start: usize, cur: usize) -> Result<bool, EnumerateError> {
        if self.path.len() >= self.cfg.max_depth {
            tracing::warn!(start, limit = self.cfg.max_depth, "search path too deep");
            return Err(EnumerateError::DepthExceeded {
                limit: self.cfg.max_depth,
            });
        }
        self.path.push(cur);
        self.marked[cur] = true;
        self.marked_stack.push(cur);

        let g = self.g;
        let mut found = false;
        for &child in g.successors(cur) {
            if child < start {
                // Retired: every circuit through `child` was reported when it
                // was the start vertex.
                continue;
            }
            if child == start {
                self.close();
                found = true;
            } else if !self.marked[child] && self.recur(start, child)? {
                found = true;
            }
        }

        if found {
            while let Some(v) = self.marked_stack.pop() {
                self.marked[v] = false;
                if v == cur {
                    break;
                }
            }
        }
        self.path.pop();
        Ok(found)
    }

    /// Report the current path, closed by its start vertex.
    fn close(&mut self) {
        let start = self.path[0];
        self.path.push(start);
        (self.sink)(&self.path);
        self.path.pop();
        self.found += 1;
    }
}
