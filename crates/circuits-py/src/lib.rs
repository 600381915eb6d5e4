//! PyO3 bindings for the `circuits` crate.
//!
//! Notes
//! - Keep bindings thin: graphs cross the boundary as `list[list[int]]`
//!   (index = vertex, inner list = successors in order) and circuits come back
//!   as `list[list[int]]`.

use pyo3::prelude::*;

mod common;

use common::{digraph_from_py, map_enumerate_err, search_cfg};

/// Enumerate every elementary circuit, each closed by its minimum vertex.
#[pyfunction]
#[pyo3(signature = (adj, max_depth=None))]
fn enumerate_circuits(adj: Vec<Vec<usize>>, max_depth: Option<usize>) -> PyResult<Vec<Vec<usize>>> {
    let g = digraph_from_py(adj);
    circuits::api::enumerate_circuits_with(&g, search_cfg(max_depth)).map_err(map_enumerate_err)
}

/// Count elementary circuits without building the list.
#[pyfunction]
#[pyo3(signature = (adj, max_depth=None))]
fn count_circuits(adj: Vec<Vec<usize>>, max_depth: Option<usize>) -> PyResult<usize> {
    let g = digraph_from_py(adj);
    circuits::api::count_circuits(&g, search_cfg(max_depth)).map_err(map_enumerate_err)
}

#[pymodule]
fn circuits_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", circuits::VERSION)?;
    m.add_function(wrap_pyfunction!(enumerate_circuits, m)?)?;
    m.add_function(wrap_pyfunction!(count_circuits, m)?)?;
    Ok(())
}
