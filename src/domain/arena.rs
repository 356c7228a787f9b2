//! Arena-based employee hierarchy.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::employee::Employee;
use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct OrgNode {
    /// Employee data for this node
    pub employee: Employee,
    /// Index of the manager node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of subordinate nodes, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree structure for one organization hierarchy.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The tree exclusively owns all of its nodes; the root, once set, stays
/// the root for the lifetime of the tree.
#[derive(Debug)]
pub struct OrgTree {
    /// Arena storage for all tree nodes
    arena: Arena<OrgNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for OrgTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a fresh node under `parent`, appended after its existing
    /// siblings. `parent = None` sets the root of an empty tree.
    ///
    /// # Errors
    /// - [`DomainError::NodeNotFound`] if `parent` is stale or absent
    /// - [`DomainError::RootAlreadySet`] on a second parentless insert
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, employee: Employee, parent: Option<Index>) -> DomainResult<Index> {
        match parent {
            Some(parent_idx) => {
                if !self.arena.contains(parent_idx) {
                    return Err(DomainError::NodeNotFound(format!("{:?}", parent_idx)));
                }
                let node_idx = self.arena.insert(OrgNode {
                    employee,
                    parent: Some(parent_idx),
                    children: Vec::new(),
                });
                // contains() checked above, the parent slot is live
                self.arena[parent_idx].children.push(node_idx);
                Ok(node_idx)
            }
            None => {
                if let Some(root_idx) = self.root {
                    let root_name = self
                        .get_node(root_idx)
                        .map(|n| n.employee.name.clone())
                        .unwrap_or_default();
                    return Err(DomainError::RootAlreadySet(root_name));
                }
                let node_idx = self.arena.insert(OrgNode {
                    employee,
                    parent: None,
                    children: Vec::new(),
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    /// Append `employee` as a new direct subordinate of `parent`.
    ///
    /// Appending equal employee data twice produces two distinct nodes;
    /// the children sequence is a list, not a set.
    #[instrument(level = "trace", skip(self))]
    pub fn add_subordinate(&mut self, parent: Index, employee: Employee) -> DomainResult<Index> {
        self.insert_node(employee, Some(parent))
    }

    /// Re-parent an existing subtree under `parent`, appended after the
    /// existing subordinates.
    ///
    /// # Errors
    /// - [`DomainError::NodeNotFound`] if either index is stale or absent
    /// - [`DomainError::AncestryViolation`] if `node` is `parent` itself
    ///   or one of its ancestors (the move would create a cycle)
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, node: Index) -> DomainResult<()> {
        if !self.arena.contains(parent) {
            return Err(DomainError::NodeNotFound(format!("{:?}", parent)));
        }
        if !self.arena.contains(node) {
            return Err(DomainError::NodeNotFound(format!("{:?}", node)));
        }
        if node == parent || self.is_ancestor(node, parent) {
            return Err(DomainError::AncestryViolation {
                ancestor: self.arena[node].employee.name.clone(),
                descendant: self.arena[parent].employee.name.clone(),
            });
        }

        if let Some(old_parent) = self.arena[node].parent {
            self.arena[old_parent].children.retain(|&c| c != node);
        }
        self.arena[node].parent = Some(parent);
        self.arena[parent].children.push(node);
        Ok(())
    }

    /// Remove the first occurrence of `child` from `parent`'s subordinate
    /// list and drop the whole subtree below it.
    ///
    /// Returns `false` without touching the tree when `child` is not a
    /// direct subordinate of `parent` (list semantics: no-op, no error).
    /// The relative order of the remaining subordinates is unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_subordinate(&mut self, parent: Index, child: Index) -> bool {
        let Some(parent_node) = self.arena.get(parent) else {
            return false;
        };
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            return false;
        };

        self.arena[parent].children.remove(pos);
        for idx in self.collect_subtree(child) {
            let _ = self.arena.remove(idx);
        }
        true
    }

    /// Ordered direct subordinates of `idx`; empty for leaves and for
    /// stale indices. The slice is a read-only view.
    #[instrument(level = "trace", skip(self))]
    pub fn children(&self, idx: Index) -> &[Index] {
        self.arena
            .get(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Pre-order iterator: each node before its subordinates, siblings in
    /// insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator {
        PreOrderIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the names of all leaf employees (nodes without
    /// subordinates) in pre-order. Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.employee.name.clone());
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Whether `ancestor` lies on the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: Index, node: Index) -> bool {
        let mut current = self.arena.get(node).and_then(|n| n.parent);
        while let Some(idx) = current {
            if idx == ancestor {
                return true;
            }
            current = self.arena.get(idx).and_then(|n| n.parent);
        }
        false
    }

    /// All indices of the subtree rooted at `idx`, leaves first, so the
    /// arena slots can be freed in one pass.
    fn collect_subtree(&self, idx: Index) -> Vec<Index> {
        let mut indices = Vec::new();
        let mut stack = vec![(idx, false)];
        while let Some((current, visited)) = stack.pop() {
            if let Some(node) = self.arena.get(current) {
                if !visited {
                    stack.push((current, true));
                    for &child in node.children.iter().rev() {
                        stack.push((child, false));
                    }
                } else {
                    indices.push(current);
                }
            }
        }
        indices
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a OrgTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a OrgTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a OrgTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a OrgTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
