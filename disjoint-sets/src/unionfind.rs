use crate::error::DisjointSetsError;
use crate::groups::Groups;

/// Outcome of merging two distinct groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Root that now represents the merged group.
    pub kept: usize,
    /// Former root, now a child of `kept`.
    pub removed: usize,
}

/// Disjoint-set forest over the fixed universe `0..n`, with path compression
/// and union by size.
///
/// Union by size keeps every tree at height O(log n), so any sequence of `m`
/// operations costs O(m log n) in the worst case. Path compression flattens
/// the trees further as they are queried, which in practice brings the
/// amortized cost per operation close to constant.
///
/// [`find`](Self::find) mutates the forest, so it needs `&mut self`. Use
/// [`find_root`](Self::find_root) for a lookup through a shared reference.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    /// Group size, only meaningful at roots.
    size: Vec<usize>,
    groups: usize,
}

impl DisjointSets {
    /// Create `n` singleton groups `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            groups: n,
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint groups.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    fn check(&self, id: usize) -> Result<(), DisjointSetsError> {
        if id < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetsError::OutOfRange {
                id,
                len: self.parent.len(),
            })
        }
    }

    fn assert_in_range(&self, id: usize) {
        if let Err(e) = self.check(id) {
            panic!("{e}");
        }
    }

    /// Find the root of the group containing `id` without modifying the forest.
    ///
    /// # Panics
    /// If `id >= self.len()`.
    pub fn find_root(&self, id: usize) -> usize {
        self.assert_in_range(id);
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Find the root of the group containing `id`, with path compression.
    ///
    /// Every node visited on the way up is repointed directly at the root.
    ///
    /// # Panics
    /// If `id >= self.len()`.
    pub fn find(&mut self, mut id: usize) -> usize {
        let root = self.find_root(id);
        while id != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }
        root
    }

    /// Like [`find`](Self::find), but reports an out-of-range id as an error.
    pub fn checked_find(&mut self, id: usize) -> Result<usize, DisjointSetsError> {
        self.check(id)?;
        Ok(self.find(id))
    }

    /// Merge the groups rooted at `root1` and `root2`.
    ///
    /// The larger group absorbs the smaller one; on equal sizes `root1` is
    /// kept. Returns `None` if both arguments are the same root.
    ///
    /// Both arguments must currently be roots. This is only checked in debug
    /// builds; use [`checked_union_roots`](Self::checked_union_roots) when the
    /// caller cannot guarantee it.
    ///
    /// # Panics
    /// If either id is out of range.
    pub fn union_roots(&mut self, root1: usize, root2: usize) -> Option<Merge> {
        self.assert_in_range(root1);
        self.assert_in_range(root2);
        debug_assert_eq!(self.parent[root1], root1, "{root1} is not a root");
        debug_assert_eq!(self.parent[root2], root2, "{root2} is not a root");

        if root1 == root2 {
            return None;
        }

        let (kept, removed) = if self.size[root1] >= self.size[root2] {
            (root1, root2)
        } else {
            (root2, root1)
        };
        self.parent[removed] = kept;
        self.size[kept] += self.size[removed];
        self.groups -= 1;

        Some(Merge { kept, removed })
    }

    /// Like [`union_roots`](Self::union_roots), but validates both ids and
    /// the root precondition instead of panicking.
    pub fn checked_union_roots(
        &mut self,
        root1: usize,
        root2: usize,
    ) -> Result<Option<Merge>, DisjointSetsError> {
        for id in [root1, root2] {
            self.check(id)?;
            if self.parent[id] != id {
                return Err(DisjointSetsError::NotARoot { id });
            }
        }
        Ok(self.union_roots(root1, root2))
    }

    /// Merge the groups containing `a` and `b`.
    ///
    /// Returns `None` if they were already in the same group.
    ///
    /// # Panics
    /// If either id is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> Option<Merge> {
        let ra = self.find(a);
        let rb = self.find(b);
        self.union_roots(ra, rb)
    }

    /// Like [`union`](Self::union), but reports an out-of-range id as an error.
    pub fn checked_union(
        &mut self,
        a: usize,
        b: usize,
    ) -> Result<Option<Merge>, DisjointSetsError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.union(a, b))
    }

    /// Number of elements in the group containing `id`.
    pub fn set_size(&mut self, id: usize) -> usize {
        let r = self.find(id);
        self.size[r]
    }

    /// Whether `a` and `b` are in the same group.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Snapshot of the current partition, keyed by root.
    ///
    /// Groups appear in the order their roots are first seen while scanning
    /// ids in ascending order, so members within each group are ascending.
    /// Runs `find` on every element.
    pub fn groups(&mut self) -> Groups {
        let n = self.len();
        let assignments: Vec<(usize, usize)> = (0..n).map(|id| (self.find(id), id)).collect();
        Groups::from_assignments(assignments)
    }

    /// Roots of all groups, in [`groups`](Self::groups) order.
    pub fn keys(&mut self) -> Vec<usize> {
        self.groups().into_keys()
    }

    /// Members of all groups, in [`groups`](Self::groups) order.
    pub fn values(&mut self) -> Vec<Vec<usize>> {
        self.groups().into_values()
    }
}
