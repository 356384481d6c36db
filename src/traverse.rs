//! Stack-based traversal: flattening, descendant collection, subtree depth.
//!
//! Cycles cannot occur in the owned nested form (a node cannot contain
//! itself), so everything here is total; the cycle guards live where parent
//! links are followed instead.

use tracing::instrument;

use crate::node::TreeItem;

/// Flattens a forest into a pre-order list, parent before descendants,
/// siblings in their original order.
///
/// Borrows the forest read-only and returns owned clones; every emitted node
/// has its children field stripped.
#[instrument(level = "trace", skip_all, fields(roots = forest.len()))]
pub fn flatten<T: TreeItem>(forest: &[T]) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack: Vec<T> = forest.iter().rev().cloned().collect();

    while let Some(mut node) = stack.pop() {
        let children = node.take_children();
        flat.push(node);
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    flat
}

/// Pre-order iterator over the descendants of one item, excluding the item.
pub struct Descendants<'a, T> {
    stack: Vec<&'a T>,
}

impl<'a, T: TreeItem> Iterator for Descendants<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            // Push children in reverse order for left-to-right traversal
            for child in children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}

/// Lazily walks all descendants of `item` in pre-order.
pub fn iter_descendants<T: TreeItem>(item: &T) -> Descendants<'_, T> {
    let mut stack = Vec::new();
    if let Some(children) = item.children() {
        stack.extend(children.iter().rev());
    }
    Descendants { stack }
}

/// All descendants of `item`, pre-order, excluding `item` itself.
///
/// Read-only: the returned references keep their own children attached.
/// A leaf yields an empty vec.
#[instrument(level = "trace", skip_all)]
pub fn descendants<T: TreeItem>(item: &T) -> Vec<&T> {
    iter_descendants(item).collect()
}

/// Height of the subtree rooted at `item`; 1 for a leaf.
#[instrument(level = "trace", skip_all)]
pub fn depth<T: TreeItem>(item: &T) -> usize {
    let mut max_depth = 0;
    let mut stack = vec![(item, 1)]; // (node, depth)

    while let Some((node, node_depth)) = stack.pop() {
        if node_depth > max_depth {
            max_depth = node_depth;
        }
        if let Some(children) = node.children() {
            for child in children {
                stack.push((child, node_depth + 1));
            }
        }
    }

    max_depth
}
