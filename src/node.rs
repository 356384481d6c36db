//! Core item abstraction: typed key/parent-key accessors and nesting predicates.

use std::fmt::Debug;
use std::hash::Hash;

/// An option item that can live in flat or nested form.
///
/// Identity and parent linkage are exposed through typed accessors instead of
/// field names, so any caller-owned record type can participate as long as it
/// yields a comparable key. Flat form carries no children; nested form holds
/// its children inline.
///
/// `children` is tri-state: `None` means the field is absent (flat form or
/// leaf), `Some(&[])` means a caller attached an empty list. The distinction
/// matters for [`NestingPolicy`].
pub trait TreeItem: Clone {
    /// Comparable identity, unique within a flat collection.
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;

    /// Parent identity, `None` for roots. A value that matches no key in the
    /// collection is treated like `None` by the operations.
    fn parent_key(&self) -> Option<Self::Key>;

    fn children(&self) -> Option<&[Self]>;

    /// Attaches `children`, replacing any existing list.
    fn set_children(&mut self, children: Vec<Self>);

    /// Detaches the children and clears the field. Empty vec when absent.
    fn take_children(&mut self) -> Vec<Self>;

    /// Nothing to descend into: children absent or empty.
    fn is_leaf(&self) -> bool {
        self.children().is_none_or(|c| c.is_empty())
    }
}

/// What counts as "nested" for [`is_nested`] / [`is_tree_structure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestingPolicy {
    /// The children field is present, even when the list is empty.
    /// Matches the historical behavior of select widgets fed option data
    /// where an empty `children: []` still marks a branch node.
    #[default]
    Present,
    /// The children field is present and non-empty.
    NonEmpty,
}

pub fn is_nested_with<T: TreeItem>(item: &T, policy: NestingPolicy) -> bool {
    match policy {
        NestingPolicy::Present => item.children().is_some(),
        NestingPolicy::NonEmpty => item.children().is_some_and(|c| !c.is_empty()),
    }
}

/// Does `item` carry a children field, under the default policy?
pub fn is_nested<T: TreeItem>(item: &T) -> bool {
    is_nested_with(item, NestingPolicy::default())
}

pub fn is_tree_structure_with<T: TreeItem>(items: &[T], policy: NestingPolicy) -> bool {
    items.iter().any(|item| is_nested_with(item, policy))
}

/// Does any item of the slice carry a children field, under the default policy?
pub fn is_tree_structure<T: TreeItem>(items: &[T]) -> bool {
    is_tree_structure_with(items, NestingPolicy::default())
}
