use thiserror::Error;

/// Errors raised when parent linkage in a flat collection is inconsistent.
///
/// All other malformed input degrades without error: an unresolvable parent
/// key makes an item a root (building) or ends the chain (ancestry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("cycle detected in parent linkage at key: {key}")]
    CycleDetected { key: String },

    #[error("duplicate key in flat collection: {key}")]
    DuplicateKey { key: String },
}

impl HierarchyError {
    pub(crate) fn cycle(key: &impl std::fmt::Debug) -> Self {
        Self::CycleDetected {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate(key: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
