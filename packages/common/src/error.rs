use thiserror::Error;

/// Reasons a tree edit was not applied
///
/// The plain algebra functions swallow these and hand back the unchanged
/// tree; the `try_*` forms surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Root node cannot be removed or moved")]
    RootImmovable,

    #[error("Would create cycle")]
    CycleDetected,
}
