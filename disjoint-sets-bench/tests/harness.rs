/// End-to-end tests for the benchmark, report, and demo pipeline.
use disjoint_sets_bench::demo;
use disjoint_sets_bench::report::{self, BenchReport};
use disjoint_sets_bench::timing::{self, BenchConfig};

#[test]
fn bench_small_sweep() {
    let config = BenchConfig {
        min_exp: 3,
        max_exp: 7,
        seed: 0,
    };
    let sizes = timing::run(&config);
    assert_eq!(
        sizes.iter().map(|t| t.n).collect::<Vec<_>>(),
        vec![8, 16, 32, 64, 128]
    );
    for t in &sizes {
        assert!(t.merges >= t.n - 1, "n={} merged only {} times", t.n, t.merges);
        assert!(t.moved >= t.n - 1);
    }
}

#[test]
fn bench_is_reproducible() {
    let config = BenchConfig {
        min_exp: 4,
        max_exp: 6,
        seed: 3,
    };
    let a: Vec<(usize, usize)> = timing::run(&config).iter().map(|t| (t.merges, t.moved)).collect();
    let b: Vec<(usize, usize)> = timing::run(&config).iter().map(|t| (t.merges, t.moved)).collect();
    assert_eq!(a, b);
}

#[test]
fn bench_report_round_trips_through_json() {
    let config = BenchConfig {
        min_exp: 5,
        max_exp: 6,
        seed: 1,
    };
    let full = BenchReport::new(config.seed, timing::run(&config));
    let parsed: serde_json::Value = serde_json::from_str(&report::to_json(&full)).unwrap();
    assert_eq!(parsed["seed"], 1);
    assert_eq!(parsed["sizes"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["sizes"][1]["n"], 64);
}

#[test]
fn demo_walkthrough_snapshots() {
    let rendered: Vec<String> = demo::walkthrough()
        .iter()
        .map(|s| s.groups.to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "{0: [0], 1: [1], 2: [2], 3: [3], 4: [4]}",
            "{0: [0, 1], 2: [2], 3: [3], 4: [4]}",
            "{0: [0, 1], 2: [2], 4: [3, 4]}",
            "{0: [0, 1, 3, 4], 2: [2]}",
            "{0: [0, 1, 2, 3, 4]}",
        ]
    );
}
