use super::*;

/// Build a tree `[[1] | [2]]` split horizontally, returning (tree, left, right)
fn two_leaves() -> (SplitTree, SplitId, SplitId) {
    let mut tree = SplitTree::new(1);
    let root = tree.root();
    let (left, right) = tree.split_leaf(root, Orientation::Horizontal, 2).unwrap();
    (tree, left, right)
}

#[test]
fn test_new_tree_is_single_leaf() {
    let tree = SplitTree::new(1);
    assert!(tree.is_leaf(tree.root()));
    assert_eq!(tree.find(1), Some(tree.root()));
    assert_eq!(tree.find(2), None);
    tree.check_invariants().unwrap();
}

#[test]
fn test_split_moves_group_to_first_child() {
    let mut tree = SplitTree::new(1);
    let root = tree.root();
    tree.group_mut(root).unwrap().add(3);
    tree.group_mut(root).unwrap().set_current(3);

    let (left, right) = tree.split_leaf(root, Orientation::Horizontal, 2).unwrap();

    assert!(!tree.is_leaf(root));
    assert_eq!(tree.node(left).unwrap().parent, Some(root));
    assert_eq!(tree.node(right).unwrap().parent, Some(root));
    let left_group = tree.group(left).unwrap();
    assert_eq!(left_group.iter().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(left_group.current(), Some(3));
    assert_eq!(tree.group(right).unwrap().current(), Some(2));
    tree.check_invariants().unwrap();
}

#[test]
fn test_split_internal_node_fails_without_mutation() {
    let (mut tree, _, _) = two_leaves();
    let root = tree.root();
    let before = tree.node_count();
    assert_eq!(
        tree.split_leaf(root, Orientation::Vertical, 9),
        Err(crate::error::LayoutError::NotALeaf(root))
    );
    assert_eq!(tree.node_count(), before);
    assert_eq!(tree.find(9), None);
    tree.check_invariants().unwrap();
}

#[test]
fn test_remove_from_multi_member_leaf_keeps_leaf() {
    let mut tree = SplitTree::new(1);
    let root = tree.root();
    tree.group_mut(root).unwrap().add(2);
    tree.group_mut(root).unwrap().add(3);

    let outcome = tree.remove_session(1).unwrap();
    assert_eq!(
        outcome,
        RemoveOutcome::LeafKept {
            leaf: root,
            current: Some(2)
        }
    );
    assert_eq!(tree.group(root).unwrap().iter().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_remove_last_session_leaves_tree_alone() {
    let mut tree = SplitTree::new(1);
    assert_eq!(tree.remove_session(1).unwrap(), RemoveOutcome::LastSession);
    assert_eq!(tree.find(1), Some(tree.root()));
}

#[test]
fn test_remove_unknown_session_errors() {
    let (mut tree, _, _) = two_leaves();
    assert_eq!(
        tree.remove_session(42),
        Err(crate::error::LayoutError::SessionNotFound(42))
    );
    tree.check_invariants().unwrap();
}

#[test]
fn test_contraction_promotes_sibling_leaf() {
    let (mut tree, _, _) = two_leaves();
    let root = tree.root();

    let outcome = tree.remove_session(2).unwrap();

    assert_eq!(outcome, RemoveOutcome::Contracted { promoted: root });
    assert!(tree.is_leaf(root));
    assert_eq!(tree.group(root).unwrap().current(), Some(1));
    assert_eq!(tree.node_count(), 1);
    tree.check_invariants().unwrap();
}

#[test]
fn test_contraction_promotes_sibling_subtree() {
    // root: H[ leaf{1} , V[ leaf{2}, leaf{3} ] ]
    let (mut tree, _, right) = two_leaves();
    let (top, bottom) = tree.split_leaf(right, Orientation::Vertical, 3).unwrap();
    assert_eq!(tree.group(top).unwrap().current(), Some(2));
    assert_eq!(tree.group(bottom).unwrap().current(), Some(3));

    let root = tree.root();
    let outcome = tree.remove_session(1).unwrap();

    assert_eq!(outcome, RemoveOutcome::Contracted { promoted: root });
    assert_eq!(tree.node(top).unwrap().parent, Some(root));
    assert_eq!(tree.node(bottom).unwrap().parent, Some(root));
    assert_eq!(tree.first_leaf(root), Some(top));
    assert_eq!(tree.sessions(), vec![2, 3]);
    tree.check_invariants().unwrap();
}

#[test]
fn test_split_then_close_round_trip() {
    let mut tree = SplitTree::new(1);
    let root = tree.root();
    tree.group_mut(root).unwrap().add(2);
    tree.group_mut(root).unwrap().set_current(2);
    let before = tree.group(root).cloned();

    tree.split_leaf(root, Orientation::Horizontal, 3).unwrap();
    tree.remove_session(3).unwrap();

    assert!(tree.is_leaf(tree.root()));
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.group(tree.root()).cloned(), before);
}

#[test]
fn test_find_and_flatten_order() {
    let (mut tree, left, right) = two_leaves();
    let (top, bottom) = tree.split_leaf(left, Orientation::Vertical, 3).unwrap();
    assert_eq!(tree.flatten(), vec![top, bottom, right]);
    assert_eq!(tree.sessions(), vec![1, 3, 2]);
    assert_eq!(tree.find(3), Some(bottom));
}

#[test]
fn test_next_prev_single_leaf_wraps() {
    let mut tree = SplitTree::new(1);
    let root = tree.root();
    tree.group_mut(root).unwrap().add(2);
    assert_eq!(tree.next_session(1), Some(2));
    assert_eq!(tree.next_session(2), Some(1));
    assert_eq!(tree.prev_session(1), Some(2));
}

#[test]
fn test_next_prev_cross_leaves() {
    // leaves: [1, 4] | [2]
    let (mut tree, left, _) = two_leaves();
    tree.group_mut(left).unwrap().add(4);

    assert_eq!(tree.next_session(1), Some(4));
    assert_eq!(tree.next_session(4), Some(2));
    assert_eq!(tree.next_session(2), Some(1));
    assert_eq!(tree.prev_session(1), Some(2));
    assert_eq!(tree.prev_session(2), Some(4));
}

#[test]
fn test_next_cycle_visits_every_session_once() {
    let (mut tree, left, right) = two_leaves();
    tree.group_mut(left).unwrap().add(5);
    let (_, bottom) = tree.split_leaf(right, Orientation::Vertical, 3).unwrap();
    tree.group_mut(bottom).unwrap().add(6);

    let all = tree.sessions();
    for &start in &all {
        let mut visited = vec![start];
        let mut cursor = tree.next_session(start).unwrap();
        while cursor != start {
            visited.push(cursor);
            assert_eq!(tree.prev_session(cursor), visited.get(visited.len() - 2).copied());
            cursor = tree.next_session(cursor).unwrap();
        }
        visited.sort_unstable();
        let mut expected = all.clone();
        expected.sort_unstable();
        assert_eq!(visited, expected);
    }
}

#[test]
fn test_calculate_bounds_horizontal() {
    let (mut tree, left, right) = two_leaves();
    tree.calculate_bounds(PaneBounds::new(0.0, 0.0, 801.0, 600.0), 1.0);
    let l = tree.node(left).unwrap().bounds;
    let r = tree.node(right).unwrap().bounds;
    assert_eq!(l, PaneBounds::new(0.0, 0.0, 400.0, 600.0));
    assert_eq!(r, PaneBounds::new(401.0, 0.0, 400.0, 600.0));

    let dividers = tree.collect_dividers(1.0);
    assert_eq!(dividers.len(), 1);
    assert_eq!(dividers[0].x, 400.0);
    assert_eq!(dividers[0].orientation, Orientation::Horizontal);
}

#[test]
fn test_leaf_at_uses_first_child_bounds() {
    let (mut tree, left, right) = two_leaves();
    tree.calculate_bounds(PaneBounds::new(0.0, 0.0, 800.0, 600.0), 0.0);
    assert_eq!(tree.leaf_at(10.0, 10.0), Some(left));
    assert_eq!(tree.leaf_at(700.0, 10.0), Some(right));
    // Outside the window still resolves to the second child
    assert_eq!(tree.leaf_at(-5.0, 10.0), Some(right));
}

#[test]
fn test_adjust_ratio_clamps() {
    let (mut tree, _, _) = two_leaves();
    assert_eq!(tree.adjust_ratio(1, Orientation::Horizontal, 0.25), Ok(0.75));
    assert_eq!(tree.adjust_ratio(2, Orientation::Horizontal, 5.0), Ok(0.9));
    assert_eq!(tree.adjust_ratio(2, Orientation::Horizontal, -5.0), Ok(0.1));
    assert!(tree.adjust_ratio(2, Orientation::Vertical, 0.1).is_err());
    tree.check_invariants().unwrap();
}
