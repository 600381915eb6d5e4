//! Circuit Enumerator: every elementary circuit of a simple digraph.
//!
//! Purpose
//! - Given a dense adjacency list, list each elementary circuit exactly once,
//!   attributed to its minimum vertex, in a reproducible order fixed by the
//!   successor order of the input.
//!
//! Layout
//! - `types.rs` (graph, config, errors), `validate.rs` (input checks before
//!   search), `dfs.rs` (the search).
//!
//! The input graph is only borrowed. Instead of deleting edges out of vertices
//! that can no longer start a circuit, the search skips every successor below
//! the current start vertex; start vertices only increase, so the effect is
//! the same as permanent pruning.

mod dfs;
mod types;
mod validate;

pub use dfs::{count_circuits, enumerate_circuits, enumerate_circuits_with, for_each_circuit};
pub use types::{Circuit, Digraph, EnumerateError, SearchCfg};
pub use validate::validate;
