//! Terminal rendering of nested option hierarchies.

use std::fmt::Display;

use termtree::Tree;

use crate::node::TreeItem;

pub trait AsTermTree {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: TreeItem + Display> AsTermTree for T {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.to_string();

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .unwrap_or_default()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

/// Renders each root of a forest as its own tree.
pub fn forest_to_tree_string<T: TreeItem + Display>(forest: &[T]) -> Vec<Tree<String>> {
    forest.iter().map(AsTermTree::to_tree_string).collect()
}
