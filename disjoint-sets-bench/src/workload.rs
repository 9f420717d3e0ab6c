/// Seeded random merge sequences shared by the differential check and the
/// benchmark.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::naive::NaiveDisjointSets;

/// One random merge, drawn against the current state of the reference
/// structure: two group positions and one member of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStep {
    pub i1: usize,
    pub i2: usize,
    pub value1: usize,
    pub value2: usize,
}

/// Draw the next merge, or `None` once at most one group is left.
///
/// Both positions are drawn independently, so they may coincide.
pub fn next_step<R: Rng + ?Sized>(rng: &mut R, naive: &NaiveDisjointSets) -> Option<MergeStep> {
    if naive.len() <= 1 {
        return None;
    }

    let i1 = rng.gen_range(0..naive.len());
    let i2 = rng.gen_range(0..naive.len());
    let value1 = *naive.group(i1).choose(rng)?;
    let value2 = *naive.group(i2).choose(rng)?;

    Some(MergeStep {
        i1,
        i2,
        value1,
        value2,
    })
}

/// Seed for the sweep over universe size `n`, derived from a base seed so
/// each size can run independently.
pub fn size_seed(base: u64, n: usize) -> u64 {
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(n as u64)
}
