use circuits::api::{Digraph, EnumerateError, SearchCfg};
use pyo3::exceptions::{PyRecursionError, PyValueError};
use pyo3::prelude::*;

pub fn search_cfg(max_depth: Option<usize>) -> SearchCfg {
    match max_depth {
        Some(max_depth) => SearchCfg { max_depth },
        None => SearchCfg::default(),
    }
}

pub fn digraph_from_py(adj: Vec<Vec<usize>>) -> Digraph {
    Digraph::new(adj)
}

/// Bad input maps to `ValueError`, an exhausted depth budget to `RecursionError`.
pub fn map_enumerate_err<V: std::fmt::Debug>(err: EnumerateError<V>) -> PyErr {
    match err {
        EnumerateError::DepthExceeded { .. } => PyRecursionError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
