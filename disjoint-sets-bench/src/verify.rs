/// Differential check: drive `DisjointSets` and the list-based reference with
/// the same random merges and compare the partitions after every step.
use std::collections::BTreeSet;

use disjoint_sets::DisjointSets;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::naive::NaiveDisjointSets;
use crate::workload::{next_step, size_seed};

/// Which universe sizes to check and how to seed them.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Sizes `0..max_n` are checked.
    pub max_n: usize,
    pub seed: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self { max_n: 100, seed: 0 }
    }
}

/// First step at which the two structures disagreed.
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    pub n: usize,
    pub step: usize,
    pub expected: BTreeSet<BTreeSet<usize>>,
    pub actual: BTreeSet<BTreeSet<usize>>,
    pub expected_groups: usize,
    pub actual_groups: usize,
}

/// Outcome of a full sweep.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub seed: u64,
    pub sizes_checked: usize,
    pub merges: usize,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Merge a universe of `n` elements down to one group, checking after every
/// step. Returns the number of steps taken.
pub fn verify_size<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<usize, Mismatch> {
    let mut naive = NaiveDisjointSets::new(n);
    let mut fast = DisjointSets::new(n);
    let mut step = 0;

    while let Some(m) = next_step(rng, &naive) {
        naive.union_by_index(m.i1, m.i2);
        fast.union(m.value1, m.value2);
        step += 1;

        let expected = naive.to_sets();
        let actual = fast.groups().into_sets();
        if expected != actual || naive.len() != fast.group_count() {
            return Err(Mismatch {
                n,
                step,
                expected,
                actual,
                expected_groups: naive.len(),
                actual_groups: fast.group_count(),
            });
        }
    }

    Ok(step)
}

/// Check every size in `0..config.max_n`. Sizes run in parallel, each with
/// its own generator.
pub fn run(config: &VerifyConfig) -> VerifyReport {
    info!(max_n = config.max_n, seed = config.seed, "verifying");

    let results: Vec<Result<usize, Mismatch>> = (0..config.max_n)
        .into_par_iter()
        .map(|n| {
            let mut rng = StdRng::seed_from_u64(size_seed(config.seed, n));
            let result = verify_size(n, &mut rng);
            match &result {
                Ok(steps) => debug!(n, steps, "verified"),
                Err(m) => error!(n, step = m.step, "partitions diverged"),
            }
            result
        })
        .collect();

    let mut merges = 0;
    let mut mismatches = Vec::new();
    for result in results {
        match result {
            Ok(steps) => merges += steps,
            Err(m) => mismatches.push(m),
        }
    }

    VerifyReport {
        seed: config.seed,
        sizes_checked: config.max_n,
        merges,
        mismatches,
    }
}
