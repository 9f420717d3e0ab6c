/// Differential tests: `DisjointSets` against the list-based reference under
/// seeded random merge sequences.
use disjoint_sets::DisjointSets;
use disjoint_sets_bench::naive::NaiveDisjointSets;
use disjoint_sets_bench::verify::{self, verify_size, VerifyConfig};
use disjoint_sets_bench::workload::next_step;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_size_below_one_hundred_agrees() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in 0..100 {
        let steps = verify_size(n, &mut rng).unwrap_or_else(|m| {
            panic!("n={} diverged at step {}: {:?} vs {:?}", m.n, m.step, m.expected, m.actual)
        });
        assert!(steps >= n.saturating_sub(1));
    }
}

#[test]
fn parallel_sweep_agrees_for_several_seeds() {
    for seed in [0, 1, 42] {
        let report = verify::run(&VerifyConfig { max_n: 100, seed });
        assert!(report.passed(), "seed {seed}: {:?}", report.mismatches);
        assert_eq!(report.sizes_checked, 100);
    }
}

#[test]
fn group_count_matches_reference_at_every_step() {
    let mut rng = StdRng::seed_from_u64(9);
    let n = 60;
    let mut naive = NaiveDisjointSets::new(n);
    let mut fast = DisjointSets::new(n);
    let mut successful = 0;

    while let Some(m) = next_step(&mut rng, &naive) {
        let merged = naive.union_by_index(m.i1, m.i2);
        let result = fast.union(m.value1, m.value2);
        assert_eq!(merged, result.is_some());
        if merged {
            successful += 1;
        }
        assert_eq!(fast.group_count(), n - successful);
        assert_eq!(fast.group_count(), naive.len());
        assert!(fast.connected(m.value1, m.value2));
    }

    assert_eq!(fast.group_count(), 1);
    assert_eq!(fast.set_size(0), n);
}

#[test]
fn merge_reports_larger_group_as_kept() {
    let mut rng = StdRng::seed_from_u64(21);
    let n = 50;
    let mut naive = NaiveDisjointSets::new(n);
    let mut fast = DisjointSets::new(n);

    while let Some(m) = next_step(&mut rng, &naive) {
        naive.union_by_index(m.i1, m.i2);
        let r1 = fast.find(m.value1);
        let r2 = fast.find(m.value2);
        let s1 = fast.set_size(r1);
        let s2 = fast.set_size(r2);
        if let Some(merge) = fast.union_roots(r1, r2) {
            let expected_kept = if s1 >= s2 { r1 } else { r2 };
            assert_eq!(merge.kept, expected_kept);
            assert_eq!(fast.find(merge.removed), merge.kept);
            assert_eq!(fast.set_size(merge.kept), s1 + s2);
        } else {
            assert_eq!(r1, r2);
        }
    }
}
