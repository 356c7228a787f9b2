//! Company directory: an ordered forest of independent hierarchies.

use crate::domain::arena::OrgTree;
use crate::domain::report::Reporter;

/// Ordered collection of independent [`OrgTree`]s.
///
/// Mirrors a company with several top-level org charts; trees are
/// reported in the order they were added.
#[derive(Debug, Default)]
pub struct Directory {
    trees: Vec<OrgTree>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hierarchy to the directory.
    pub fn push(&mut self, tree: OrgTree) {
        self.trees.push(tree);
    }

    pub fn trees(&self) -> &[OrgTree] {
        &self.trees
    }

    /// Total number of employees across all hierarchies.
    pub fn headcount(&self) -> usize {
        self.trees.iter().map(|t| t.len()).sum()
    }

    /// Description lines for every hierarchy, directory order, each tree
    /// rendered pre-order by `reporter`.
    pub fn render(&self, reporter: &Reporter) -> Vec<String> {
        self.trees
            .iter()
            .flat_map(|tree| reporter.render(tree))
            .collect()
    }
}
