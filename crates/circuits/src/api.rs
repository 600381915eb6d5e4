//! Curated re-exports for callers that want one import path (CLI, bindings,
//! benches). Not a stability promise.

pub use crate::check::{verify_circuits, CircuitDefect};
pub use crate::enumerate::{
    count_circuits, enumerate_circuits, enumerate_circuits_with, for_each_circuit, validate,
    Circuit, Digraph, EnumerateError, SearchCfg,
};
pub use crate::labeled::{enumerate_labeled, enumerate_labeled_with, LabeledGraph};
pub use crate::rand::{
    complete_digraph, directed_cycle, directed_path, draw_digraph, transitive_tournament,
    RandomDigraphCfg, ReplayToken,
};
