use std::fmt;

use tracing::debug;

use crate::bst::{self, Link, TreeNode};
use crate::tree::TreeOps;

/// Owning handle around a [`bst`] root that keeps track of its size.
pub struct Tree<T: Ord> {
    root: Link<T>,
    len: usize,
}

pub struct Iter<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<T: Ord> TreeOps<T> for Tree<T> {
    fn insert(&mut self, value: T) -> bool {
        let inserted = bst::insert_into(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    fn remove(&mut self, value: &T) -> bool {
        let removed = bst::remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Ord> Tree<T> {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Builds a tree by inserting `values` one by one. Repeated values are
    /// skipped, so the shape depends only on the first occurrence order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Tree::new();
        for value in values {
            tree.insert(value);
        }
        debug!(len = tree.len, "seeded tree");
        tree
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn search(&self, value: &T) -> Option<&TreeNode<T>> {
        bst::search_node(self.root(), value)
    }

    pub fn min(&self) -> Option<&T> {
        self.root().map(|node| &bst::find_min_node(node).value)
    }

    pub fn height(&self) -> usize {
        bst::tree_height(self.root())
    }

    pub fn width(&self) -> usize {
        bst::tree_width(self.root())
    }

    pub fn width_at_level(&self, level: usize) -> usize {
        bst::width_at_level(self.root(), level)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root());
        iter
    }
}

impl<T: Ord + Clone> Tree<T> {
    pub fn in_order(&self) -> Vec<T> {
        bst::in_order_traversal(self.root())
    }

    pub fn pre_order(&self) -> Vec<T> {
        bst::pre_order_traversal(self.root())
    }

    pub fn post_order(&self) -> Vec<T> {
        bst::post_order_traversal(self.root())
    }

    pub fn search_path(&self, value: &T) -> (Vec<T>, bool) {
        bst::search_path(self.root(), value)
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tree::from_values(iter)
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: Option<&'a TreeNode<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T: Ord> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Box drops recurse once per level, which overflows on list-shaped trees.
impl<T: Ord> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for Tree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
