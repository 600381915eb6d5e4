//! Property tests: every reported circuit is elementary, minimum-first and
//! unique; the list is complete against a brute-force search; runs repeat.

use std::collections::{BTreeMap, BTreeSet};

use circuits::api::*;
use proptest::collection::vec;
use proptest::prelude::*;

/// Simple digraph on 1..=7 vertices with ascending successor lists, drawn as
/// an adjacency matrix.
fn arb_digraph() -> impl Strategy<Value = Digraph> {
    (1usize..=7)
        .prop_flat_map(|n| vec(vec(any::<bool>(), n), n))
        .prop_map(|rows| {
            Digraph::new(
                rows.into_iter()
                    .map(|row| (0..row.len()).filter(|&v| row[v]).collect())
                    .collect(),
            )
        })
}

/// Seeded random digraph with shuffled successor lists.
fn arb_shuffled() -> impl Strategy<Value = Digraph> {
    (1usize..=8, 0.0f64..0.6, any::<u64>(), any::<bool>()).prop_map(|(n, p, seed, loops)| {
        let cfg = RandomDigraphCfg {
            vertices: n,
            edge_prob: p,
            self_loops: loops,
            shuffle_successors: true,
        };
        draw_digraph(cfg, ReplayToken { seed, index: 0 })
    })
}

/// Minimum-first bodies of all elementary circuits, by exhaustive search.
fn brute_force(g: &Digraph) -> BTreeSet<Vec<usize>> {
    fn walk(g: &Digraph, s: usize, path: &mut Vec<usize>, out: &mut BTreeSet<Vec<usize>>) {
        let cur = *path.last().unwrap();
        for &next in g.successors(cur) {
            if next == s {
                out.insert(path.clone());
            } else if next > s && !path.contains(&next) {
                path.push(next);
                walk(g, s, path, out);
                path.pop();
            }
        }
    }
    let mut out = BTreeSet::new();
    for s in 0..g.num_vertices() {
        walk(g, s, &mut vec![s], &mut out);
    }
    out
}

fn bodies(cs: &[Circuit]) -> BTreeSet<Vec<usize>> {
    cs.iter().map(|c| c[..c.len() - 1].to_vec()).collect()
}

proptest! {
    #[test]
    fn circuits_are_well_formed_and_unique(g in arb_digraph()) {
        let cs = enumerate_circuits(&g).unwrap();
        prop_assert_eq!(verify_circuits(&g, &cs), Ok(()));
    }

    #[test]
    fn circuits_are_complete(g in arb_digraph()) {
        let cs = enumerate_circuits(&g).unwrap();
        prop_assert_eq!(bodies(&cs), brute_force(&g));
    }

    #[test]
    fn shuffled_successors_are_well_formed_and_complete(g in arb_shuffled()) {
        let cs = enumerate_circuits(&g).unwrap();
        prop_assert_eq!(verify_circuits(&g, &cs), Ok(()));
        prop_assert_eq!(bodies(&cs), brute_force(&g));
    }

    #[test]
    fn start_vertices_are_non_decreasing(g in arb_shuffled()) {
        let cs = enumerate_circuits(&g).unwrap();
        prop_assert!(cs.windows(2).all(|w| w[0][0] <= w[1][0]));
    }

    #[test]
    fn independent_copies_give_identical_output(g in arb_shuffled()) {
        let copy = g.clone();
        prop_assert_eq!(enumerate_circuits(&g).unwrap(), enumerate_circuits(&copy).unwrap());
    }

    #[test]
    fn forward_edges_only_is_acyclic(g in arb_digraph()) {
        let dag = Digraph::new(
            g.adj
                .iter()
                .enumerate()
                .map(|(u, s)| s.iter().copied().filter(|&v| v > u).collect())
                .collect(),
        );
        prop_assert!(enumerate_circuits(&dag).unwrap().is_empty());
    }

    #[test]
    fn monotone_relabelling_preserves_output(g in arb_shuffled()) {
        let relabel = |v: usize| 10 * v as u64 + 3;
        let map: BTreeMap<u64, Vec<u64>> = g
            .adj
            .iter()
            .enumerate()
            .map(|(u, s)| (relabel(u), s.iter().map(|&v| relabel(v)).collect()))
            .collect();
        let dense: Vec<Vec<u64>> = enumerate_circuits(&g)
            .unwrap()
            .into_iter()
            .map(|c| c.into_iter().map(relabel).collect())
            .collect();
        prop_assert_eq!(enumerate_labeled(&map).unwrap(), dense);
    }
}

/// Number of elementary circuits of the complete digraph on `n` vertices:
/// sum over k >= 2 of C(n, k) * (k - 1)!.
fn complete_digraph_count(n: usize) -> usize {
    let mut total = 0;
    for k in 2..=n {
        let mut choose = 1usize;
        for i in 0..k {
            choose = choose * (n - i) / (i + 1);
        }
        let cyclic: usize = (1..k).product();
        total += choose * cyclic;
    }
    total
}

#[test]
fn complete_digraph_counts() {
    assert_eq!(complete_digraph_count(3), 5);
    assert_eq!(complete_digraph_count(4), 20);
    for n in 0..=7 {
        let g = complete_digraph(n);
        assert_eq!(
            count_circuits(&g, SearchCfg::default()).unwrap(),
            complete_digraph_count(n),
            "n = {n}"
        );
    }
}

#[test]
fn long_cycle_and_depth_limit() {
    let g = directed_cycle(500);
    let cs = enumerate_circuits(&g).unwrap();
    assert_eq!(cs.len(), 1);
    assert_eq!(cs[0].len(), 501);
    let err = enumerate_circuits_with(&g, SearchCfg { max_depth: 100 }).unwrap_err();
    assert_eq!(err, EnumerateError::DepthExceeded { limit: 100 });
}

#[test]
fn path_and_tournament_are_acyclic() {
    assert!(enumerate_circuits(&directed_path(50)).unwrap().is_empty());
    assert!(enumerate_circuits(&transitive_tournament(12)).unwrap().is_empty());
}
