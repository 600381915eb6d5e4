//! Seeded random digraphs and a few deterministic families.
//!
//! Purpose
//! - Feed tests, benches and the CLI with reproducible inputs.
//!
//! Model
//! - `draw_digraph` samples every ordered pair `(u, v)` independently with
//!   probability `edge_prob` (self-loops only if enabled), then optionally
//!   shuffles each successor list so discovery order is exercised too.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::enumerate::Digraph;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Erdős–Rényi style digraph sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomDigraphCfg {
    pub vertices: usize,
    /// Probability of each ordered pair being an edge. Clamped to [0, 1].
    pub edge_prob: f64,
    pub self_loops: bool,
    /// Shuffle each successor list instead of keeping ascending order.
    pub shuffle_successors: bool,
}

impl Default for RandomDigraphCfg {
    fn default() -> Self {
        Self {
            vertices: 8,
            edge_prob: 0.25,
            self_loops: false,
            shuffle_successors: true,
        }
    }
}

/// Draw a simple digraph; the same `(cfg, tok)` always yields the same graph.
pub fn draw_digraph(cfg: RandomDigraphCfg, tok: ReplayToken) -> Digraph {
    let mut rng = tok.to_std_rng();
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let n = cfg.vertices;
    let mut g = Digraph::with_vertices(n);
    for u in 0..n {
        for v in 0..n {
            if u == v && !cfg.self_loops {
                continue;
            }
            if rng.gen_bool(p) {
                g.adj[u].push(v);
            }
        }
        if cfg.shuffle_successors {
            g.adj[u].shuffle(&mut rng);
        }
    }
    g
}

/// `0 → 1 → ... → n-1 → 0`. One circuit for `n >= 1` (a self-loop when `n == 1`).
pub fn directed_cycle(n: usize) -> Digraph {
    Digraph::new((0..n).map(|v| vec![(v + 1) % n]).collect())
}

/// Every ordered pair of distinct vertices is an edge.
pub fn complete_digraph(n: usize) -> Digraph {
    Digraph::new(
        (0..n)
            .map(|u| (0..n).filter(|&v| v != u).collect())
            .collect(),
    )
}

/// `u → v` for all `u < v`: acyclic with the maximum number of edges.
pub fn transitive_tournament(n: usize) -> Digraph {
    Digraph::new((0..n).map(|u| (u + 1..n).collect()).collect())
}

/// `0 → 1 → ... → n-1`.
pub fn directed_path(n: usize) -> Digraph {
    Digraph::new(
        (0..n)
            .map(|v| if v + 1 < n { vec![v + 1] } else { Vec::new() })
            .collect(),
    )
}
