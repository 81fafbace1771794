//! Error types for content handling.

use thiserror::Error;

/// Result type alias using ContentError.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur while walking a rich-text document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// A container node arrived without its `content` array. There is no safe
    /// way to recover the reading order past this point.
    #[error("malformed document: {node_type} node has no content array")]
    MissingContent { node_type: String },
}
