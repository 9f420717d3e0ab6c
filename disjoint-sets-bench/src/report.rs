/// Report generation: terminal, JSON output for benchmark and verification runs.
use serde::Serialize;

use crate::timing::SizeTiming;
use crate::verify::VerifyReport;

/// Full benchmark report across all sizes.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub seed: u64,
    pub sizes: Vec<SizeTiming>,
}

impl BenchReport {
    pub fn new(seed: u64, sizes: Vec<SizeTiming>) -> Self {
        Self { seed, sizes }
    }

    /// Ratio of reference merge time to find+union time at the largest size.
    pub fn final_speedup(&self) -> Option<f64> {
        let last = self.sizes.last()?;
        if last.union_find_secs > 0.0 {
            Some(last.naive_secs / last.union_find_secs)
        } else {
            None
        }
    }
}

/// Print a terminal table of per-size timings.
pub fn print_terminal(report: &BenchReport) {
    println!(
        "{:>9} {:>9} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "N", "Merges", "Moved", "Naive[s]", "Find[s]", "Union[s]", "U+F[s]"
    );
    println!("{}", "-".repeat(86));

    for t in &report.sizes {
        println!(
            "{:>9} {:>9} {:>12} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            t.n, t.merges, t.moved, t.naive_secs, t.find_secs, t.union_secs, t.union_find_secs,
        );
    }

    println!("{}", "-".repeat(86));
    match report.final_speedup() {
        Some(s) => println!("Seed: {} | Speedup at largest size: {:.1}x", report.seed, s),
        None => println!("Seed: {}", report.seed),
    }
}

/// Print a verification summary, listing every diverging size.
pub fn print_verify(report: &VerifyReport) {
    for m in &report.mismatches {
        println!(
            "n={:<4} step={:<5} expected {} groups, got {}",
            m.n, m.step, m.expected_groups, m.actual_groups
        );
    }
    let status = if report.passed() { "PASS" } else { "FAIL" };
    println!(
        "Sizes: {} | Merges: {} | Mismatches: {} | {}",
        report.sizes_checked,
        report.merges,
        report.mismatches.len(),
        status
    );
}

/// Render a report as JSON.
pub fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
