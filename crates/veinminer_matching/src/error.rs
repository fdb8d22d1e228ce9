//! # Matching Error Types
//!
//! Reasons a matcher string could not be turned into a [`BlockMatcher`].
//!
//! [`BlockMatcher`]: crate::BlockMatcher

use thiserror::Error;
use veinminer_core::CoreError;

/// Errors that can occur while parsing matcher strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The input was empty.
    #[error("empty block matcher string")]
    Empty,

    /// `#` was followed by something that is not a namespaced key.
    #[error("malformed tag key: \"{0}\"")]
    MalformedTag(String),

    /// The tag key is well formed but no such tag exists.
    #[error("no such tag with key \"{0}\"")]
    UnknownTag(String),

    /// The type key is well formed but names no known block.
    #[error("no such block with key \"{0}\"")]
    UnknownType(String),

    /// The key or state string is malformed.
    #[error(transparent)]
    Syntax(#[from] CoreError),
}

/// Result type for matcher parsing.
pub type MatchResult<T> = Result<T, MatchError>;
