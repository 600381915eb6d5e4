//! Elementary circuit enumeration for simple directed graphs.
//!
//! Every cycle that repeats no vertex except its start is listed exactly once,
//! as `[v0, ..., vk, v0]` with `v0` its smallest vertex, in an order fixed by
//! the successor order of the input.
//!
//! Modules
//! - `enumerate`: the depth-first search and its input validation.
//! - `labeled`: the same over arbitrary `Ord` vertex labels.
//! - `check`: independent verifier for circuit lists.
//! - `rand`: seeded random digraphs and deterministic families.

pub mod api;
pub mod check;
pub mod enumerate;
pub mod labeled;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::enumerate::{
        count_circuits, enumerate_circuits, enumerate_circuits_with, for_each_circuit, Circuit,
        Digraph, EnumerateError, SearchCfg,
    };
    pub use crate::labeled::{enumerate_labeled, LabeledGraph};
}
