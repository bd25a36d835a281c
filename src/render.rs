//! Plain-text pictures of the structures for terminal output.

use std::fmt::Display;

use termtree::Tree as TextTree;

use crate::bst::TreeNode;
use crate::linked_list::LinkedList;

pub const EMPTY: &str = "(empty)";

// Placeholder for an absent child when its sibling exists.
const MISSING: &str = "·";

/// Renders the tree as an indented hierarchy, left child listed before the
/// right one.
pub fn render_tree<T: Display>(root: Option<&TreeNode<T>>) -> String {
    match root {
        None => EMPTY.to_string(),
        Some(node) => text_tree(node).to_string(),
    }
}

fn text_tree<T: Display>(node: &TreeNode<T>) -> TextTree<String> {
    let label = node.value.to_string();
    if node.is_leaf() {
        return TextTree::new(label);
    }
    let leaves = [node.left.as_deref(), node.right.as_deref()]
        .into_iter()
        .map(|child| match child {
            Some(child) => text_tree(child),
            None => TextTree::new(MISSING.to_string()),
        });
    TextTree::new(label).with_leaves(leaves)
}

/// Renders the list as `1 -> 2 -> 3`.
pub fn render_list<T: Display>(list: &LinkedList<T>) -> String {
    if list.is_empty() {
        return EMPTY.to_string();
    }
    list.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
