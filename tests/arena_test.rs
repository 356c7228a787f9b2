//! Tests for OrgTree: ordered children, removal, re-parenting, traversal

use orgchart::domain::{DomainError, Employee, OrgTree};
use orgchart::util::testing;

fn employee(name: &str) -> Employee {
    Employee::new(name, "Staff", 10000)
}

/// Small fixture: root with three direct subordinates a, b, c.
fn tree_with_three_children() -> (OrgTree, generational_arena::Index) {
    let mut tree = OrgTree::new();
    let root = tree.insert_node(employee("root"), None).unwrap();
    for name in ["a", "b", "c"] {
        tree.add_subordinate(root, employee(name)).unwrap();
    }
    (tree, root)
}

fn child_names(tree: &OrgTree, parent: generational_arena::Index) -> Vec<String> {
    tree.children(parent)
        .iter()
        .map(|&c| tree.get_node(c).unwrap().employee.name.clone())
        .collect()
}

// ============================================================
// Ordered Children Tests
// ============================================================

#[test]
fn given_add_sequence_when_reading_children_then_returns_same_order() {
    testing::init_test_setup();
    let (tree, root) = tree_with_three_children();

    assert_eq!(child_names(&tree, root), vec!["a", "b", "c"]);
}

#[test]
fn given_equal_employees_when_adding_twice_then_two_entries_exist() {
    let mut tree = OrgTree::new();
    let root = tree.insert_node(employee("root"), None).unwrap();

    tree.add_subordinate(root, employee("twin")).unwrap();
    tree.add_subordinate(root, employee("twin")).unwrap();

    assert_eq!(child_names(&tree, root), vec!["twin", "twin"]);
    assert_eq!(tree.len(), 3);
}

// ============================================================
// Removal Tests
// ============================================================

#[test]
fn given_middle_child_when_removing_then_sibling_order_is_unchanged() {
    let (mut tree, root) = tree_with_three_children();
    let b = tree.children(root)[1];

    assert!(tree.remove_subordinate(root, b));

    assert_eq!(child_names(&tree, root), vec!["a", "c"]);
    assert!(tree.get_node(b).is_none(), "removed node must be freed");
}

#[test]
fn given_absent_child_when_removing_then_noop_returns_false() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    let grandchild = tree.add_subordinate(a, employee("deep")).unwrap();

    // grandchild is not a *direct* subordinate of root
    assert!(!tree.remove_subordinate(root, grandchild));
    assert_eq!(tree.len(), 5);
    assert_eq!(child_names(&tree, root), vec!["a", "b", "c"]);
}

#[test]
fn given_subtree_when_removing_child_then_whole_subtree_is_freed() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    let deep = tree.add_subordinate(a, employee("deep")).unwrap();
    tree.add_subordinate(deep, employee("deeper")).unwrap();
    assert_eq!(tree.len(), 6);

    assert!(tree.remove_subordinate(root, a));

    assert_eq!(tree.len(), 3);
    assert!(tree.get_node(deep).is_none());
}

#[test]
fn given_removed_child_when_removing_again_then_noop_returns_false() {
    let (mut tree, root) = tree_with_three_children();
    let b = tree.children(root)[1];

    assert!(tree.remove_subordinate(root, b));
    assert!(!tree.remove_subordinate(root, b));
}

// ============================================================
// Precondition Tests
// ============================================================

#[test]
fn given_stale_parent_when_inserting_then_returns_node_not_found() {
    let (mut tree, root) = tree_with_three_children();
    let b = tree.children(root)[1];
    tree.remove_subordinate(root, b);

    let result = tree.add_subordinate(b, employee("orphan"));

    assert!(matches!(result, Err(DomainError::NodeNotFound(_))));
}

#[test]
fn given_existing_root_when_inserting_second_root_then_returns_error() {
    let mut tree = OrgTree::new();
    tree.insert_node(employee("root"), None).unwrap();

    let result = tree.insert_node(employee("usurper"), None);

    assert!(matches!(result, Err(DomainError::RootAlreadySet(_))));
}

// ============================================================
// Attach Tests
// ============================================================

#[test]
fn given_sibling_subtree_when_attaching_then_node_moves_in_order() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    let c = tree.children(root)[2];

    tree.attach(a, c).unwrap();

    assert_eq!(child_names(&tree, root), vec!["a", "b"]);
    assert_eq!(child_names(&tree, a), vec!["c"]);
    assert_eq!(tree.get_node(c).unwrap().parent, Some(a));
}

#[test]
fn given_ancestor_when_attaching_below_descendant_then_returns_violation() {
    testing::init_test_setup();
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    let deep = tree.add_subordinate(a, employee("deep")).unwrap();

    let result = tree.attach(deep, root);

    assert!(matches!(result, Err(DomainError::AncestryViolation { .. })));
    // tree unchanged
    assert_eq!(tree.root(), Some(root));
    assert_eq!(child_names(&tree, root), vec!["a", "b", "c"]);
}

#[test]
fn given_node_when_attaching_to_itself_then_returns_violation() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];

    assert!(matches!(
        tree.attach(a, a),
        Err(DomainError::AncestryViolation { .. })
    ));
}

// ============================================================
// Traversal Tests
// ============================================================

#[test]
fn given_tree_when_iterating_preorder_then_parent_before_children() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    tree.add_subordinate(a, employee("a1")).unwrap();

    let names: Vec<String> = tree
        .iter()
        .map(|(_, node)| node.employee.name.clone())
        .collect();

    assert_eq!(names, vec!["root", "a", "a1", "b", "c"]);
}

#[test]
fn given_tree_when_iterating_postorder_then_leaves_before_root() {
    let (tree, _) = tree_with_three_children();

    let names: Vec<String> = tree
        .iter_postorder()
        .map(|(_, node)| node.employee.name.clone())
        .collect();

    assert_eq!(names, vec!["a", "b", "c", "root"]);
}

#[test]
fn given_empty_tree_when_measuring_then_depth_zero_and_no_leaves() {
    let tree = OrgTree::new();

    assert_eq!(tree.depth(), 0);
    assert!(tree.leaf_nodes().is_empty());
    assert!(tree.is_empty());
}

#[test]
fn given_three_level_tree_when_measuring_then_depth_is_three() {
    let (mut tree, root) = tree_with_three_children();
    let a = tree.children(root)[0];
    tree.add_subordinate(a, employee("a1")).unwrap();

    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.leaf_nodes(), vec!["a1", "b", "c"]);
}
