//! Unbalanced binary search tree engine.
//!
//! Free functions over an owned node graph. Every function is total: an
//! absent root is a well-defined empty tree, duplicates are ignored and
//! missing values are no-ops.

use std::cmp::Ordering;

use tracing::trace;

pub type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

pub fn create_node<T>(value: T) -> Box<TreeNode<T>> {
    Box::new(TreeNode {
        value,
        left: None,
        right: None,
    })
}

/// Inserts `value` and returns the root of the resulting tree.
///
/// An absent root yields a fresh single node. Inserting a value that is
/// already present returns the subtree unchanged.
pub fn insert_node<T: Ord>(root: Link<T>, value: T) -> Box<TreeNode<T>> {
    match root {
        None => create_node(value),
        Some(mut node) => {
            insert_below(&mut node, value);
            node
        }
    }
}

/// Inserts into the tree behind `link`, reporting whether a node was added.
pub(crate) fn insert_into<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    match link {
        Some(node) => insert_below(node, value),
        None => {
            *link = Some(create_node(value));
            true
        }
    }
}

fn insert_below<T: Ord>(node: &mut TreeNode<T>, value: T) -> bool {
    let child = match value.cmp(&node.value) {
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
        Ordering::Equal => {
            trace!("duplicate value ignored");
            return false;
        }
    };
    insert_into(child, value)
}

pub fn search_node<'a, T: Ord>(
    root: Option<&'a TreeNode<T>>,
    value: &T,
) -> Option<&'a TreeNode<T>> {
    descend(root, value, |_| {})
}

/// Values of the nodes visited while searching for `value`, root first, and
/// whether the last one is a match.
pub fn search_path<T: Ord + Clone>(root: Option<&TreeNode<T>>, value: &T) -> (Vec<T>, bool) {
    let mut path = Vec::new();
    let found = descend(root, value, |node| path.push(node.value.clone())).is_some();
    (path, found)
}

fn descend<'a, T: Ord>(
    root: Option<&'a TreeNode<T>>,
    value: &T,
    mut visit: impl FnMut(&TreeNode<T>),
) -> Option<&'a TreeNode<T>> {
    let mut cur = root;
    while let Some(node) = cur {
        visit(node);
        match value.cmp(&node.value) {
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => cur = node.right.as_deref(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

/// Leftmost node of the subtree rooted at `node`.
pub fn find_min_node<T>(node: &TreeNode<T>) -> &TreeNode<T> {
    let mut cur = node;
    while let Some(left) = cur.left.as_deref() {
        cur = left;
    }
    cur
}

/// Removes `value` and returns the new root of the subtree.
///
/// A node with two children keeps its position: its value is overwritten
/// with the in-order successor, and the successor's node is unlinked from
/// the right subtree instead.
pub fn remove_node<T: Ord>(root: Link<T>, value: &T) -> Link<T> {
    let mut root = root;
    remove_from(&mut root, value);
    root
}

/// Removes `value` from the tree behind `link`, reporting whether a node
/// went away.
pub(crate) fn remove_from<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let Some(node) = link.as_deref_mut() else {
        trace!("value not present, nothing removed");
        return false;
    };

    match value.cmp(&node.value) {
        Ordering::Less => remove_from(&mut node.left, value),
        Ordering::Greater => remove_from(&mut node.right, value),
        Ordering::Equal => {
            *link = link.take().and_then(detach);
            true
        }
    }
}

// Subtree left behind once `node` itself is gone.
fn detach<T>(mut node: Box<TreeNode<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (None, Some(child)) | (Some(child), None) => Some(child),
        (Some(left), Some(right)) => {
            let (successor, rest) = take_min(right);
            node.value = successor;
            node.left = Some(left);
            node.right = rest;
            Some(node)
        }
    }
}

// Unlinks the minimum node of the subtree. The minimum never has a left
// child, so it is replaced by its right child.
fn take_min<T>(mut node: Box<TreeNode<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let TreeNode { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

pub fn in_order_traversal<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(link: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = link {
            walk(node.left.as_deref(), out);
            out.push(node.value.clone());
            walk(node.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn pre_order_traversal<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(link: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = link {
            out.push(node.value.clone());
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn post_order_traversal<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<T> {
    fn walk<T: Clone>(link: Option<&TreeNode<T>>, out: &mut Vec<T>) {
        if let Some(node) = link {
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
            out.push(node.value.clone());
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Number of levels in the tree: 0 when empty, 1 for a single node.
pub fn tree_height<T>(root: Option<&TreeNode<T>>) -> usize {
    match root {
        None => 0,
        Some(node) => {
            1 + tree_height(node.left.as_deref()).max(tree_height(node.right.as_deref()))
        }
    }
}

/// Number of nodes present at the 1-indexed `level`. The root is level 1;
/// level 0 never holds a node.
pub fn width_at_level<T>(root: Option<&TreeNode<T>>, level: usize) -> usize {
    match (root, level) {
        (None, _) | (_, 0) => 0,
        (Some(_), 1) => 1,
        (Some(node), _) => {
            width_at_level(node.left.as_deref(), level - 1)
                + width_at_level(node.right.as_deref(), level - 1)
        }
    }
}

/// Largest [`width_at_level`] over all levels of the tree.
pub fn tree_width<T>(root: Option<&TreeNode<T>>) -> usize {
    (1..=tree_height(root))
        .map(|level| width_at_level(root, level))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::seq::SliceRandom;

    use super::*;

    const SEED: [i32; 7] = [50, 30, 70, 20, 40, 60, 80];

    fn build(values: &[i32]) -> Link<i32> {
        values
            .iter()
            .fold(None, |root, &value| Some(insert_node(root, value)))
    }

    #[test]
    fn create_node_has_no_children() {
        let node = create_node(7);
        assert_eq!(node.value, 7);
        assert!(node.is_leaf());
    }

    #[test]
    fn insert_into_empty_tree_creates_root() {
        let root = insert_node(None, 10);
        assert_eq!(root.value, 10);
        assert!(root.is_leaf());
    }

    #[test]
    fn seed_traversals() {
        let root = build(&SEED);
        assert_eq!(
            in_order_traversal(root.as_deref()),
            vec![20, 30, 40, 50, 60, 70, 80]
        );
        assert_eq!(
            pre_order_traversal(root.as_deref()),
            vec![50, 30, 20, 40, 70, 60, 80]
        );
        assert_eq!(
            post_order_traversal(root.as_deref()),
            vec![20, 40, 30, 60, 80, 70, 50]
        );
    }

    #[test]
    fn traversals_of_empty_tree_are_empty() {
        assert!(in_order_traversal::<i32>(None).is_empty());
        assert!(pre_order_traversal::<i32>(None).is_empty());
        assert!(post_order_traversal::<i32>(None).is_empty());
    }

    #[test]
    fn in_order_is_sorted_after_shuffled_inserts() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut numbers: Vec<i32> = (0..200).collect();
        numbers.shuffle(&mut rng);

        let root = build(&numbers);
        let sorted: Vec<i32> = (0..200).collect();
        assert_eq!(in_order_traversal(root.as_deref()), sorted);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let root = build(&SEED);
        let before = pre_order_traversal(root.as_deref());
        let height = tree_height(root.as_deref());

        let root = Some(insert_node(root, 40));
        assert_eq!(pre_order_traversal(root.as_deref()), before);
        assert_eq!(tree_height(root.as_deref()), height);
    }

    #[test]
    fn search_finds_inserted_values_only() {
        let root = build(&SEED);
        for value in SEED {
            let found = search_node(root.as_deref(), &value);
            assert_eq!(found.map(|node| node.value), Some(value));
        }
        assert!(search_node(root.as_deref(), &55).is_none());
        assert!(search_node::<i32>(None, &1).is_none());
    }

    #[test]
    fn search_path_for_hit() {
        let root = build(&SEED);
        assert_eq!(search_path(root.as_deref(), &60), (vec![50, 70, 60], true));
        assert_eq!(search_path(root.as_deref(), &50), (vec![50], true));
    }

    #[test]
    fn search_path_for_miss_ends_at_leaf() {
        let root = build(&SEED);
        assert_eq!(search_path(root.as_deref(), &45), (vec![50, 30, 40], false));
        assert_eq!(search_path(root.as_deref(), &99), (vec![50, 70, 80], false));
    }

    #[test]
    fn search_path_of_empty_tree() {
        assert_eq!(search_path::<i32>(None, &1), (vec![], false));
    }

    #[test]
    fn insert_into_reports_change() {
        let mut root = None;
        assert!(insert_into(&mut root, 50));
        assert!(insert_into(&mut root, 30));
        assert!(!insert_into(&mut root, 50));
        assert_eq!(pre_order_traversal(root.as_deref()), vec![50, 30]);
    }

    #[test]
    fn remove_from_reports_change() {
        let mut root = build(&SEED);
        assert!(remove_from(&mut root, &70));
        assert!(!remove_from(&mut root, &70));
        assert_eq!(
            pre_order_traversal(root.as_deref()),
            vec![50, 30, 20, 40, 80, 60]
        );
        assert!(!remove_from(&mut None::<Box<TreeNode<i32>>>, &1));
    }

    #[test]
    fn find_min_follows_left_links() {
        let root = build(&SEED);
        let root = root.as_deref().unwrap();
        assert_eq!(find_min_node(root).value, 20);
        assert_eq!(find_min_node(root.right.as_deref().unwrap()).value, 60);
    }

    #[test]
    fn remove_leaf() {
        let root = remove_node(build(&SEED), &20);
        assert_eq!(
            pre_order_traversal(root.as_deref()),
            vec![50, 30, 40, 70, 60, 80]
        );
    }

    #[test]
    fn remove_node_with_one_child_promotes_child() {
        let root = remove_node(build(&[50, 30, 20]), &30);
        let root = root.unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(root.left.as_ref().map(|node| node.value), Some(20));
        assert!(root.right.is_none());
    }

    #[test]
    fn remove_two_children_copies_successor_value() {
        let root = remove_node(build(&SEED), &50);
        assert_eq!(
            pre_order_traversal(root.as_deref()),
            vec![60, 30, 20, 40, 70, 80]
        );
        assert!(search_node(root.as_deref(), &50).is_none());
    }

    #[test]
    fn remove_two_children_with_deep_successor() {
        // successor 55 has a right child that must be reattached
        let root = build(&[50, 30, 70, 60, 80, 55, 57]);
        let root = remove_node(root, &50);
        assert_eq!(
            pre_order_traversal(root.as_deref()),
            vec![55, 30, 70, 60, 57, 80]
        );
    }

    #[test]
    fn remove_only_node_empties_tree() {
        assert!(remove_node(build(&[1]), &1).is_none());
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let root = build(&SEED);
        let before = pre_order_traversal(root.as_deref());
        let root = remove_node(root, &65);
        assert_eq!(pre_order_traversal(root.as_deref()), before);
        assert!(remove_node::<i32>(None, &1).is_none());
    }

    #[test]
    fn remove_keeps_other_values_searchable() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut numbers: Vec<i32> = (0..50).collect();
        numbers.shuffle(&mut rng);
        let mut root = build(&numbers);

        numbers.shuffle(&mut rng);
        for (i, value) in numbers.iter().enumerate() {
            root = remove_node(root, value);
            assert!(search_node(root.as_deref(), value).is_none());
            for remaining in &numbers[i + 1..] {
                assert!(search_node(root.as_deref(), remaining).is_some());
            }
            let in_order = in_order_traversal(root.as_deref());
            assert!(in_order.windows(2).all(|pair| pair[0] < pair[1]));
        }
        assert!(root.is_none());
    }

    #[test]
    fn height_of_empty_and_single() {
        assert_eq!(tree_height::<i32>(None), 0);
        let root = build(&[1]);
        assert_eq!(tree_height(root.as_deref()), 1);
        assert_eq!(tree_height(build(&SEED).as_deref()), 3);
    }

    #[test]
    fn height_of_degenerate_tree() {
        let root = build(&[1, 2, 3, 4, 5]);
        assert_eq!(tree_height(root.as_deref()), 5);
        assert_eq!(tree_width(root.as_deref()), 1);
    }

    #[test]
    fn width_per_level() {
        let root = build(&[50, 30, 70, 20]);
        let root = root.as_deref();
        assert_eq!(width_at_level(root, 0), 0);
        assert_eq!(width_at_level(root, 1), 1);
        assert_eq!(width_at_level(root, 2), 2);
        assert_eq!(width_at_level(root, 3), 1);
        assert_eq!(width_at_level(root, 4), 0);
        assert_eq!(tree_width(root), 2);
    }

    #[test]
    fn width_of_full_tree() {
        let root = build(&SEED);
        assert_eq!(tree_width(root.as_deref()), 4);
        assert_eq!(tree_width::<i32>(None), 0);
    }
}
