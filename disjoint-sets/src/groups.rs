use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A snapshot of a partition: each group's root mapped to its members.
///
/// Produced by [`DisjointSets::groups`](crate::DisjointSets::groups). Groups
/// keep the order in which their roots first appeared, and members keep the
/// order in which they were assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    roots: Vec<usize>,
    members: Vec<Vec<usize>>,
    index: HashMap<usize, usize>,
}

impl Groups {
    /// Group `(root, member)` pairs by root.
    pub(crate) fn from_assignments(assignments: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut roots = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::new();
        let mut index = HashMap::new();
        for (root, member) in assignments {
            let slot = *index.entry(root).or_insert_with(|| {
                roots.push(root);
                members.push(Vec::new());
                roots.len() - 1
            });
            members[slot].push(member);
        }
        Self {
            roots,
            members,
            index,
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn keys(&self) -> &[usize] {
        &self.roots
    }

    pub fn values(&self) -> &[Vec<usize>] {
        &self.members
    }

    /// Members of the group rooted at `root`, if `root` is a root.
    pub fn get(&self, root: usize) -> Option<&[usize]> {
        self.index.get(&root).map(|&slot| self.members[slot].as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.roots
            .iter()
            .copied()
            .zip(self.members.iter().map(Vec::as_slice))
    }

    pub fn into_keys(self) -> Vec<usize> {
        self.roots
    }

    pub fn into_values(self) -> Vec<Vec<usize>> {
        self.members
    }

    /// The partition as a set of sets, ignoring roots and ordering.
    pub fn into_sets(self) -> BTreeSet<BTreeSet<usize>> {
        self.members
            .into_iter()
            .map(|m| m.into_iter().collect())
            .collect()
    }
}

impl IntoIterator for Groups {
    type Item = (usize, Vec<usize>);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<usize>, std::vec::IntoIter<Vec<usize>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter().zip(self.members)
    }
}

/// Renders as `{0: [0, 1], 2: [2]}`.
impl fmt::Display for Groups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (root, members)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{root}: {members:?}")?;
        }
        write!(f, "}}")
    }
}
