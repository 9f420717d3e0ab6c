/// List-based reference partition, used as an oracle for `DisjointSets`.
///
/// Groups are addressed by position, not by a stable root. Merging two groups
/// removes one slot and shifts every later slot down by one.
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct NaiveDisjointSets {
    sets: Vec<Vec<usize>>,
    moved: usize,
}

impl NaiveDisjointSets {
    /// Create `n` singleton groups, group `i` holding element `i`.
    pub fn new(n: usize) -> Self {
        Self {
            sets: (0..n).map(|i| vec![i]).collect(),
            moved: 0,
        }
    }

    /// Merge the groups at positions `i1` and `i2`.
    ///
    /// The strictly longer list absorbs the other; on equal lengths group `i2`
    /// absorbs group `i1`. Returns false if `i1 == i2`.
    pub fn union_by_index(&mut self, i1: usize, i2: usize) -> bool {
        if i1 == i2 {
            return false;
        }

        let (keep, drop) = if self.sets[i1].len() > self.sets[i2].len() {
            (i1, i2)
        } else {
            (i2, i1)
        };
        let absorbed = self.sets.remove(drop);
        // Removing `drop` shifts `keep` down if it came after it.
        let keep = if keep > drop { keep - 1 } else { keep };
        self.moved += absorbed.len();
        self.sets[keep].extend(absorbed);
        true
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Members of the group at position `i`.
    pub fn group(&self, i: usize) -> &[usize] {
        &self.sets[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.sets.iter().map(Vec::as_slice)
    }

    /// Total number of elements moved between lists by all merges so far.
    pub fn moved(&self) -> usize {
        self.moved
    }

    /// The partition as a set of sets.
    pub fn to_sets(&self) -> BTreeSet<BTreeSet<usize>> {
        self.sets
            .iter()
            .map(|s| s.iter().copied().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_singletons() {
        let ds = NaiveDisjointSets::new(3);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.group(2), &[2]);
        assert_eq!(ds.moved(), 0);
    }

    #[test]
    fn same_index_is_noop() {
        let mut ds = NaiveDisjointSets::new(3);
        assert!(!ds.union_by_index(1, 1));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn equal_lengths_merge_into_second() {
        let mut ds = NaiveDisjointSets::new(4);
        assert!(ds.union_by_index(0, 2));
        // Slot 0 removed, so [1], [2, 0], [3].
        let groups: Vec<&[usize]> = ds.iter().collect();
        assert_eq!(groups, vec![&[1][..], &[2, 0][..], &[3][..]]);
        assert_eq!(ds.moved(), 1);
    }

    #[test]
    fn longer_list_absorbs_shorter() {
        let mut ds = NaiveDisjointSets::new(4);
        ds.union_by_index(2, 3); // [0], [1], [3, 2]
        assert!(ds.union_by_index(2, 0)); // [1], [3, 2, 0]
        let groups: Vec<&[usize]> = ds.iter().collect();
        assert_eq!(groups, vec![&[1][..], &[3, 2, 0][..]]);
        assert_eq!(ds.moved(), 2);
    }

    #[test]
    fn removal_shifts_later_slots() {
        let mut ds = NaiveDisjointSets::new(5);
        ds.union_by_index(4, 3); // [0], [1], [2], [3, 4]
        assert!(ds.union_by_index(1, 3)); // slot 1 removed
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.group(2), &[3, 4, 1]);
    }

    #[test]
    fn sets_ignore_order() {
        let mut ds = NaiveDisjointSets::new(3);
        ds.union_by_index(0, 1);
        let expected: BTreeSet<BTreeSet<usize>> = [
            [0, 1].into_iter().collect(),
            [2].into_iter().collect(),
        ]
        .into_iter()
        .collect();
        assert_eq!(ds.to_sets(), expected);
    }
}
