//! Circuits over arbitrary ordered vertex identifiers.
//!
//! The search needs a total order on vertices. Labels (sparse integers,
//! strings, ...) are ranked once up front by their `Ord`, the dense engine
//! runs on the ranks, and circuits are translated back. The minimum label of
//! each circuit leads it, exactly as with dense ids.

use std::collections::BTreeMap;

use crate::enumerate::{for_each_circuit, Circuit, Digraph, EnumerateError, SearchCfg};

/// A dense `Digraph` plus the label of every rank.
#[derive(Clone, Debug)]
pub struct LabeledGraph<V> {
    pub labels: Vec<V>, // ascending; rank k has label labels[k]
    pub graph: Digraph,
}

impl<V: Ord + Clone> LabeledGraph<V> {
    /// Rank the keys of `map` and translate every successor list.
    ///
    /// Fails with `UnknownVertex` if a successor is not itself a key.
    pub fn from_map(map: &BTreeMap<V, Vec<V>>) -> Result<Self, EnumerateError<V>> {
        let labels: Vec<V> = map.keys().cloned().collect();
        let mut adj = Vec::with_capacity(labels.len());
        for (from, succ) in map {
            let mut ranks = Vec::with_capacity(succ.len());
            for to in succ {
                match labels.binary_search(to) {
                    Ok(r) => ranks.push(r),
                    Err(_) => {
                        return Err(EnumerateError::UnknownVertex {
                            from: from.clone(),
                            to: to.clone(),
                        })
                    }
                }
            }
            adj.push(ranks);
        }
        Ok(Self {
            labels,
            graph: Digraph::new(adj),
        })
    }

    #[inline]
    pub fn label(&self, rank: usize) -> &V {
        &self.labels[rank]
    }

    pub fn enumerate(&self, cfg: SearchCfg) -> Result<Vec<Circuit<V>>, EnumerateError<V>> {
        let mut out = Vec::new();
        for_each_circuit(&self.graph, cfg, |c| {
            out.push(c.iter().map(|&r| self.labels[r].clone()).collect());
        })
        .map_err(|e| e.map_vertex(|r| self.labels[r].clone()))?;
        Ok(out)
    }
}

/// Enumerate the elementary circuits of a labelled graph with default config.
pub fn enumerate_labeled<V: Ord + Clone>(
    map: &BTreeMap<V, Vec<V>>,
) -> Result<Vec<Circuit<V>>, EnumerateError<V>> {
    enumerate_labeled_with(map, SearchCfg::default())
}

pub fn enumerate_labeled_with<V: Ord + Clone>(
    map: &BTreeMap<V, Vec<V>>,
    cfg: SearchCfg,
) -> Result<Vec<Circuit<V>>, EnumerateError<V>> {
    LabeledGraph::from_map(map)?.enumerate(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_integer_ids() {
        let map = BTreeMap::from([(10, vec![40]), (40, vec![70]), (70, vec![10]), (5, vec![])]);
        assert_eq!(enumerate_labeled(&map).unwrap(), vec![vec![10, 40, 70, 10]]);
    }

    #[test]
    fn string_labels_start_from_smallest() {
        let map = BTreeMap::from([
            ("c", vec!["a"]),
            ("b", vec!["c"]),
            ("a", vec!["b", "a"]),
        ]);
        assert_eq!(
            enumerate_labeled(&map).unwrap(),
            vec![vec!["a", "b", "c", "a"], vec!["a", "a"]]
        );
    }

    #[test]
    fn unknown_label_is_reported_by_name() {
        let map = BTreeMap::from([("x", vec!["y"])]);
        assert_eq!(
            enumerate_labeled(&map).unwrap_err(),
            EnumerateError::UnknownVertex { from: "x", to: "y" }
        );
    }

    #[test]
    fn parallel_edge_error_carries_labels() {
        let map = BTreeMap::from([(7u32, vec![9, 9]), (9, vec![])]);
        assert_eq!(
            enumerate_labeled(&map).unwrap_err(),
            EnumerateError::ParallelEdge { from: 7, to: 9 }
        );
    }

    #[test]
    fn ranks_follow_label_order() {
        let map = BTreeMap::from([(3i64, vec![-1]), (-1, vec![3])]);
        let lg = LabeledGraph::from_map(&map).unwrap();
        assert_eq!(lg.labels, vec![-1, 3]);
        assert_eq!(*lg.label(1), 3);
        assert_eq!(lg.graph.adj, vec![vec![1], vec![0]]);
        assert_eq!(lg.enumerate(SearchCfg::default()).unwrap(), vec![vec![-1, 3, -1]]);
    }
}
