//! Tree builder: assembles nested forests from flat parent-linked lists.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::instrument;

use crate::errors::{HierarchyError, HierarchyResult};
use crate::node::TreeItem;

/// Assembles hierarchical forests from flat collections.
///
/// An item is a root when its parent key is absent or matches no key in the
/// collection. Siblings keep their input order, roots keep theirs. The input
/// is borrowed read-only; every returned node is a clone.
pub struct TreeBuilder<T: TreeItem> {
    key_index: HashMap<T::Key, usize>,
    child_positions: HashMap<usize, Vec<usize>>,
    visited: HashSet<usize>,
}

impl<T: TreeItem> Default for TreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TreeItem> TreeBuilder<T> {
    pub fn new() -> Self {
        Self {
            key_index: HashMap::new(),
            child_positions: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    /// Build a forest from `list`.
    ///
    /// Items caught in a parent cycle are reachable from no root; they fail
    /// the build with [`HierarchyError::CycleDetected`] instead of being
    /// silently dropped.
    #[instrument(level = "debug", skip_all, fields(items = list.len()))]
    pub fn build(&mut self, list: &[T]) -> HierarchyResult<Vec<T>> {
        // Reset state for a fresh build
        self.key_index.clear();
        self.child_positions.clear();
        self.visited.clear();

        for (position, item) in list.iter().enumerate() {
            self.key_index.entry(item.key()).or_insert(position);
        }

        // Relationship map parent position -> child positions, input order
        self.child_positions = list
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                let parent = self.resolve_parent(item)?;
                Some((parent, position))
            })
            .into_group_map();

        let root_positions: Vec<usize> = list
            .iter()
            .enumerate()
            .filter(|(_, item)| self.resolve_parent(item).is_none())
            .map(|(position, _)| position)
            .collect();

        let mut slots: Vec<Option<T>> = list.iter().cloned().map(Some).collect();
        for &root in &root_positions {
            self.assemble(root, list, &mut slots)?;
        }

        let mut forest = Vec::with_capacity(root_positions.len());
        for &root in &root_positions {
            if let Some(node) = slots[root].take() {
                forest.push(node);
            }
        }

        // Anything still occupying a slot was never reached from a root,
        // which only happens when its parent chain loops.
        if let Some(stranded) = slots.iter().position(Option::is_some) {
            return Err(HierarchyError::cycle(&list[stranded].key()));
        }

        Ok(forest)
    }

    fn resolve_parent(&self, item: &T) -> Option<usize> {
        self.key_index.get(&item.parent_key()?).copied()
    }

    /// Attaches the subtree below `root` bottom-up with an explicit
    /// post-order stack, consuming child slots into their parents.
    fn assemble(&mut self, root: usize, list: &[T], slots: &mut [Option<T>]) -> HierarchyResult<()> {
        let mut stack = vec![(root, false)];

        while let Some((position, expanded)) = stack.pop() {
            if expanded {
                let Some(child_positions) = self.child_positions.get(&position) else {
                    continue;
                };
                let children: Vec<T> = child_positions
                    .iter()
                    .filter_map(|&child| slots[child].take())
                    .collect();
                if !children.is_empty() {
                    if let Some(node) = slots[position].as_mut() {
                        node.set_children(children);
                    }
                }
            } else {
                // Guards inconsistent key()/parent_key() implementations;
                // genuine parent cycles never reach a root and surface as
                // stranded slots instead.
                if !self.visited.insert(position) {
                    return Err(HierarchyError::cycle(&list[position].key()));
                }
                stack.push((position, true));
                if let Some(children) = self.child_positions.get(&position) {
                    for &child in children.iter().rev() {
                        stack.push((child, false));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Converts a flat parent-linked list into a forest of nested root items.
#[instrument(level = "debug", skip_all, fields(items = list.len()))]
pub fn flat_to_tree<T: TreeItem>(list: &[T]) -> HierarchyResult<Vec<T>> {
    let mut builder = TreeBuilder::new();
    builder.build(list)
}

/// Checks key uniqueness across `list`.
///
/// The build itself degrades best-effort on duplicates (first occurrence
/// wins); call this first when strict input validation is wanted.
pub fn validate_keys<T: TreeItem>(list: &[T]) -> HierarchyResult<()> {
    let mut seen = HashSet::with_capacity(list.len());
    for item in list {
        let key = item.key();
        if !seen.insert(key.clone()) {
            return Err(HierarchyError::duplicate(&key));
        }
    }
    Ok(())
}
