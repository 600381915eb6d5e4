//! Independent verifier for circuit lists.
//!
//! Checks, per circuit: length >= 2, closed (first == last), minimum vertex
//! first, no repeated vertex in the body, every consecutive pair is an edge.
//! Across circuits: no cyclic sequence reported twice. Used by the property
//! tests and by `cli run --verify`.

use std::collections::HashMap;
use std::fmt;

use crate::enumerate::{Circuit, Digraph};

/// First violated property, with the offending circuit's index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CircuitDefect {
    TooShort { index: usize },
    NotClosed { index: usize },
    NotMinimumFirst { index: usize },
    RepeatedVertex { index: usize, vertex: usize },
    MissingEdge { index: usize, from: usize, to: usize },
    Duplicate { index: usize, first: usize },
}

impl fmt::Display for CircuitDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitDefect::TooShort { index } => write!(f, "circuit {} has fewer than 2 entries", index),
            CircuitDefect::NotClosed { index } => write!(f, "circuit {} does not end at its start", index),
            CircuitDefect::NotMinimumFirst { index } => {
                write!(f, "circuit {} does not start at its minimum vertex", index)
            }
            CircuitDefect::RepeatedVertex { index, vertex } => {
                write!(f, "circuit {} visits vertex {} twice", index, vertex)
            }
            CircuitDefect::MissingEdge { index, from, to } => {
                write!(f, "circuit {} uses missing edge {} -> {}", index, from, to)
            }
            CircuitDefect::Duplicate { index, first } => {
                write!(f, "circuit {} repeats circuit {}", index, first)
            }
        }
    }
}

impl std::error::Error for CircuitDefect {}

/// Circuit body without the closing vertex; `None` if the circuit is not
/// closed or too short.
#[inline]
pub fn body(c: &[usize]) -> Option<&[usize]> {
    match c {
        [first, .., last] if first == last => Some(&c[..c.len() - 1]),
        _ => None,
    }
}

/// Verify `circuits` against `g`; stops at the first defect.
pub fn verify_circuits(g: &Digraph, circuits: &[Circuit]) -> Result<(), CircuitDefect> {
    let mut seen: HashMap<&[usize], usize> = HashMap::with_capacity(circuits.len());
    let mut on_circuit = vec![usize::MAX; g.num_vertices()];
    for (index, c) in circuits.iter().enumerate() {
        if c.len() < 2 {
            return Err(CircuitDefect::TooShort { index });
        }
        let b = body(c).ok_or(CircuitDefect::NotClosed { index })?;
        for w in c.windows(2) {
            if !g.has_edge(w[0], w[1]) {
                return Err(CircuitDefect::MissingEdge {
                    index,
                    from: w[0],
                    to: w[1],
                });
            }
        }
        // Every body vertex is < n here: each one is the source of an existing edge.
        for &v in b {
            if on_circuit[v] == index {
                return Err(CircuitDefect::RepeatedVertex { index, vertex: v });
            }
            on_circuit[v] = index;
        }
        if b.iter().any(|&v| v < b[0]) {
            return Err(CircuitDefect::NotMinimumFirst { index });
        }
        // Minimum-first rotation is canonical for a cyclic sequence.
        if let Some(&first) = seen.get(b) {
            return Err(CircuitDefect::Duplicate { index, first });
        }
        seen.insert(b, index);
    }
    Ok(())
}
