//! Error types for the editor

use recruitify_common::TreeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template has not been saved yet")]
    NotSaved,

    #[error("A save is already in flight")]
    SaveInFlight,

    #[error("No save in flight")]
    NoSaveInFlight,
}

impl EditorError {
    pub fn storage(message: impl std::fmt::Display) -> Self {
        EditorError::Storage(message.to_string())
    }
}
