pub mod binary_tree;
pub mod bst;
pub mod linked_list;
pub mod logging;
pub mod ops;
pub mod render;
pub mod tree;

/// Values the visualizer's tree starts with.
pub const DEFAULT_TREE_SEED: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];
