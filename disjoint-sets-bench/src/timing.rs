/// Wall-clock comparison of `DisjointSets` against the list-based reference
/// over growing universe sizes.
use std::time::{Duration, Instant};

use disjoint_sets::DisjointSets;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::naive::NaiveDisjointSets;
use crate::workload::{next_step, size_seed};

/// Universe sizes `2^min_exp ..= 2^max_exp` are timed.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub min_exp: u32,
    pub max_exp: u32,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_exp: 5,
            max_exp: 19,
            seed: 0,
        }
    }
}

impl BenchConfig {
    pub fn sizes(&self) -> Vec<usize> {
        (self.min_exp..=self.max_exp).map(|e| 1usize << e).collect()
    }
}

/// Accumulated timings for merging one universe down to a single group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SizeTiming {
    pub n: usize,
    /// Merge steps drawn, including ones that picked the same group twice.
    pub merges: usize,
    /// Elements moved between lists by the reference structure.
    pub moved: usize,
    pub naive_secs: f64,
    pub find_secs: f64,
    pub union_secs: f64,
    pub union_find_secs: f64,
}

/// Time one universe of size `n`.
///
/// Each step times the reference merge, the two `find` calls on the drawn
/// elements, and the `union_roots` call on the resulting roots.
pub fn time_size<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SizeTiming {
    let mut naive = NaiveDisjointSets::new(n);
    let mut fast = DisjointSets::new(n);

    let mut merges = 0;
    let mut naive_time = Duration::ZERO;
    let mut find_time = Duration::ZERO;
    let mut union_time = Duration::ZERO;

    while let Some(m) = next_step(rng, &naive) {
        let t0 = Instant::now();
        naive.union_by_index(m.i1, m.i2);
        let t1 = Instant::now();
        let root1 = fast.find(m.value1);
        let root2 = fast.find(m.value2);
        let t2 = Instant::now();
        fast.union_roots(root1, root2);
        let t3 = Instant::now();

        naive_time += t1 - t0;
        find_time += t2 - t1;
        union_time += t3 - t2;
        merges += 1;
    }

    SizeTiming {
        n,
        merges,
        moved: naive.moved(),
        naive_secs: naive_time.as_secs_f64(),
        find_secs: find_time.as_secs_f64(),
        union_secs: union_time.as_secs_f64(),
        union_find_secs: (find_time + union_time).as_secs_f64(),
    }
}

/// Time every configured size, smallest first.
pub fn run(config: &BenchConfig) -> Vec<SizeTiming> {
    config
        .sizes()
        .into_iter()
        .map(|n| {
            info!(n, "benchmarking size");
            let mut rng = StdRng::seed_from_u64(size_seed(config.seed, n));
            time_size(n, &mut rng)
        })
        .collect()
}
