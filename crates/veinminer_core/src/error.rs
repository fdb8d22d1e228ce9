//! # Core Error Types
//!
//! Errors raised while reading keys and block states, and errors raised by
//! a [`BlockAccessor`](crate::BlockAccessor) collaborator.

use thiserror::Error;

use crate::position::BlockPosition;

/// Errors that can occur while parsing core vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A namespaced key was empty or contained illegal characters.
    #[error("invalid namespaced key: \"{0}\"")]
    InvalidKey(String),

    /// A block state string did not follow `type[prop=val,...]`.
    #[error("invalid block state string: \"{0}\"")]
    InvalidState(String),

    /// A property was declared twice in one state string.
    #[error("duplicate property \"{property}\" in \"{input}\"")]
    DuplicateProperty {
        /// The property declared twice.
        property: String,
        /// The full input.
        input: String,
    },
}

/// Result type for core parsing operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors reported by a block accessor.
///
/// These originate outside the allocation engine and are handed back to the
/// caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The world backing the accessor is not available.
    #[error("world unavailable: {0}")]
    WorldUnavailable(String),

    /// The position lies outside the loaded region.
    #[error("position {0} is not loaded")]
    Unloaded(BlockPosition),

    /// Any other backend failure.
    #[error("block access failed: {0}")]
    Backend(String),
}

/// Result type for block access.
pub type AccessResult<T> = Result<T, AccessError>;
