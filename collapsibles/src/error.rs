//! Error types.

use thiserror::Error;

/// Errors raised while binding or toggling collapsible panels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollapsibleError {
    /// A trigger has no linked content element (no linkage attribute and no
    /// following sibling).
    #[error("Collapsible trigger '{trigger}' has no content element")]
    MissingContent {
        /// ID of the offending trigger.
        trigger: String,
    },

    /// An element the controller refers to is not in the tree.
    #[error("Element '{id}' not found")]
    ElementNotFound {
        /// The missing element ID.
        id: String,
    },

    /// Several elements share an ID the controller needs to resolve.
    #[error("Element ID '{id}' is not unique")]
    DuplicateId {
        /// The duplicated ID.
        id: String,
    },

    /// Panel index past the end of the registry.
    #[error("Panel index {index} out of range ({len} panels bound)")]
    PanelOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of bound panels.
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, CollapsibleError>;
