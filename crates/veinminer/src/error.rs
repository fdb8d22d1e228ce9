//! # VeinMiner Error Types
//!
//! Errors surfaced by configuration loading and by `vein_mine`.

use std::path::PathBuf;

use thiserror::Error;
use veinminer_core::AccessError;

/// Errors that can occur in the VeinMiner facade.
#[derive(Error, Debug)]
pub enum VeinMinerError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No tool category with this id.
    #[error("unknown tool category: {0}")]
    UnknownCategory(String),

    /// The world could not be read.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Result type for facade operations.
pub type VeinMinerResult<T> = Result<T, VeinMinerError>;
