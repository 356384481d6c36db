//! Flat-list / tree conversions and ancestry queries for hierarchical
//! select options.
//!
//! Option data for select widgets arrives as a flat list where each entry
//! references its parent by id. This crate converts such lists into nested
//! forests and back, and answers descendant/ancestor queries, through a
//! handful of pure, synchronous functions:
//!
//! - [`flat_to_tree`]: flat parent-linked list → forest of nested roots
//! - [`flatten`]: forest → pre-order flat list, nesting stripped
//! - [`descendants`]: one nested item → all descendants, pre-order
//! - [`ancestors`] / [`ancestors_all`]: item(s) + flat reference list →
//!   each item followed by its ancestor chain
//! - [`is_tree_structure`] / [`is_nested`]: does the data carry nesting?
//!
//! Items are anything implementing [`TreeItem`]; [`SelectOption`] is the
//! bundled serde-enabled record for the common `id`/`parentId` JSON shape.
//!
//! # Ownership contract
//!
//! Nothing here mutates its input. Transforms ([`flat_to_tree`],
//! [`flatten`]) borrow read-only and return owned clones; queries
//! ([`descendants`], [`ancestors`], the predicates) borrow read-only and
//! return references. All traversal is iterative, so deeply nested input
//! cannot exhaust the call stack, and cyclic parent links fail with
//! [`HierarchyError::CycleDetected`] instead of looping.
//!
//! ```
//! use optree::{flat_to_tree, flatten, SelectOption};
//!
//! let options = vec![
//!     SelectOption::new("1", "Fruit"),
//!     SelectOption::with_parent("2", "Apple", "1"),
//!     SelectOption::with_parent("3", "Pear", "1"),
//! ];
//!
//! let forest = flat_to_tree(&options)?;
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest[0].children.as_ref().unwrap().len(), 2);
//!
//! let flat = flatten(&forest);
//! assert_eq!(flat.len(), 3);
//! # Ok::<(), optree::HierarchyError>(())
//! ```

pub mod ancestry;
pub mod builder;
pub mod entities;
pub mod errors;
pub mod node;
pub mod render;
pub mod traverse;
pub mod util;

pub use ancestry::{ancestors, ancestors_all};
pub use builder::{flat_to_tree, validate_keys, TreeBuilder};
pub use entities::SelectOption;
pub use errors::{HierarchyError, HierarchyResult};
pub use node::{
    is_nested, is_nested_with, is_tree_structure, is_tree_structure_with, NestingPolicy, TreeItem,
};
pub use render::{forest_to_tree_string, AsTermTree};
pub use traverse::{depth, descendants, flatten, iter_descendants, Descendants};
