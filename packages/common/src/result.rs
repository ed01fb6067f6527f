use crate::error::TreeError;

/// Result of a tree edit that reports why it was ignored
pub type TreeResult<T> = Result<T, TreeError>;
