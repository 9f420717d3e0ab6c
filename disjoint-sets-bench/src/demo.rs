/// The five-element walkthrough: each merge and the partition it leaves.
use disjoint_sets::{DisjointSets, Groups, Merge};

#[derive(Debug, Clone)]
pub struct DemoStep {
    pub label: String,
    pub merge: Option<Merge>,
    pub groups: Groups,
}

pub fn walkthrough() -> Vec<DemoStep> {
    let mut uf = DisjointSets::new(5);
    let mut steps = vec![DemoStep {
        label: "Initial sets".into(),
        merge: None,
        groups: uf.groups(),
    }];

    let merge = uf.union(0, 1);
    steps.push(DemoStep {
        label: "After merging 0 and 1".into(),
        merge,
        groups: uf.groups(),
    });

    // Merging by root skips the finds inside `union`.
    let root3 = uf.find(3);
    let root4 = uf.find(4);
    let merge = uf.union_roots(root4, root3);
    steps.push(DemoStep {
        label: format!("After merging roots {root4} and {root3}"),
        merge,
        groups: uf.groups(),
    });

    let merge = uf.union(1, 4);
    steps.push(DemoStep {
        label: "After merging the sets holding 1 and 4".into(),
        merge,
        groups: uf.groups(),
    });

    let merge = uf.union(2, 3);
    steps.push(DemoStep {
        label: "After merging the sets holding 2 and 3".into(),
        merge,
        groups: uf.groups(),
    });

    steps
}

pub fn print(steps: &[DemoStep]) {
    for step in steps {
        println!("{}:", step.label);
        if let Some(m) = step.merge {
            println!("  kept root {}, removed root {}", m.kept, m.removed);
        }
        println!("  {}", step.groups);
        println!();
    }
}
