//! Report rendering over employee hierarchies.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::OrgTree;

/// Walks an [`OrgTree`] pre-order and renders one description line per
/// visited node.
///
/// Siblings are visited in insertion order; no sorting or reordering
/// occurs. Rendering is pure: the same tree renders to the same lines.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    /// Number of levels to visit, root counting as level 1.
    /// None visits the full tree.
    max_levels: Option<usize>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the walk to `levels` levels. `with_max_levels(3)` renders
    /// the root, its subordinates, and their subordinates, matching the
    /// classic composite demo output.
    pub fn with_max_levels(levels: usize) -> Self {
        Self {
            max_levels: Some(levels),
        }
    }

    /// Description lines in traversal order. An empty tree renders to no
    /// lines; a childless root renders to exactly one.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn render(&self, tree: &OrgTree) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(root) = tree.root() {
            self.collect(tree, root, 1, &mut lines);
        }
        lines
    }

    fn collect(&self, tree: &OrgTree, node_idx: Index, level: usize, lines: &mut Vec<String>) {
        if let Some(max) = self.max_levels {
            if level > max {
                return;
            }
        }
        if let Some(node) = tree.get_node(node_idx) {
            lines.push(node.employee.describe());
            for &child in &node.children {
                self.collect(tree, child, level + 1, lines);
            }
        }
    }
}

/// Convert a hierarchy into a `termtree` rendering, labeled
/// `name (role)` per node. Empty trees convert to None.
#[instrument(level = "debug", skip(tree))]
pub fn display_tree(tree: &OrgTree) -> Option<Tree<String>> {
    let root_idx = tree.root()?;
    Some(build_display(tree, root_idx))
}

fn build_display(tree: &OrgTree, node_idx: Index) -> Tree<String> {
    let label = tree
        .get_node(node_idx)
        .map(|n| format!("{} ({})", n.employee.name, n.employee.role))
        .unwrap_or_default();

    let leaves: Vec<_> = tree
        .children(node_idx)
        .iter()
        .map(|&child| build_display(tree, child))
        .collect();

    Tree::new(label).with_leaves(leaves)
}
