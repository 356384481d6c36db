//! Ancestor chain resolution against a flat reference list.

use std::collections::HashSet;

use tracing::instrument;

use crate::errors::{HierarchyError, HierarchyResult};
use crate::node::TreeItem;

/// Resolves `item` followed by its full ancestor chain:
/// `[item, parent, grandparent, ..]`.
///
/// Parents are matched by key against `full_list` (first match wins). An
/// item without a parent key yields exactly `[item]`; a parent key that
/// matches nothing ends the chain silently. A chain that revisits a key,
/// including a self-parent, fails with [`HierarchyError::CycleDetected`].
///
/// Borrows everything read-only and returns references into the inputs.
#[instrument(level = "trace", skip_all)]
pub fn ancestors<'a, T: TreeItem>(item: &'a T, full_list: &'a [T]) -> HierarchyResult<Vec<&'a T>> {
    let mut chain = vec![item];
    let mut seen: HashSet<T::Key> = HashSet::new();
    seen.insert(item.key());

    let mut next = item.parent_key();
    while let Some(parent_key) = next {
        if !seen.insert(parent_key.clone()) {
            return Err(HierarchyError::cycle(&parent_key));
        }
        let Some(parent) = full_list.iter().find(|candidate| candidate.key() == parent_key) else {
            break;
        };
        chain.push(parent);
        next = parent.parent_key();
    }

    Ok(chain)
}

/// [`ancestors`] for several items: each item followed by its chain,
/// concatenated in input order. Shared ancestors are not deduplicated.
#[instrument(level = "trace", skip_all, fields(items = items.len()))]
pub fn ancestors_all<'a, T: TreeItem>(
    items: &'a [T],
    full_list: &'a [T],
) -> HierarchyResult<Vec<&'a T>> {
    let mut chains = Vec::new();
    for item in items {
        chains.extend(ancestors(item, full_list)?);
    }
    Ok(chains)
}
