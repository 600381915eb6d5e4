//! Up-front input validation.

use super::types::{Digraph, EnumerateError};

/// Reject edges to unknown vertices and repeated edges.
///
/// Runs in `O(n + m)` using one stamp per target vertex: `stamp[to] == from`
/// means `from → to` was already seen in the current successor list.
pub fn validate(g: &Digraph) -> Result<(), EnumerateError> {
    let n = g.num_vertices();
    let mut stamp = vec![usize::MAX; n];
    for (from, succ) in g.adj.iter().enumerate() {
        for &to in succ {
            if to >= n {
                return Err(EnumerateError::UnknownVertex { from, to });
            }
            if stamp[to] == from {
                return Err(EnumerateError::ParallelEdge { from, to });
            }
            stamp[to] = from;
        }
    }
    Ok(())
}
