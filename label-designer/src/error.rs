//! Error types for the editor core

use thiserror::Error;

/// Editor error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// An operation addressed an element that is not in the document
    #[error("Element {0} not found")]
    ElementNotFound(u64),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
