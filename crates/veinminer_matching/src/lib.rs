//! # VeinMiner Matching
//!
//! Classification of concrete block states into vein categories.
//!
//! ## Example
//!
//! ```rust
//! use veinminer_core::{BlockState, BlockType, SimpleBlockRegistry};
//! use veinminer_matching::{log_diagnostic, BlockMatchSet};
//!
//! let registry = SimpleBlockRegistry::new()
//!     .with_block(BlockType::parse("coal_ore").unwrap());
//!
//! let pickaxe = BlockMatchSet::parse_lines(["coal_ore", "bogus!"], &registry, log_diagnostic);
//!
//! assert_eq!(pickaxe.len(), 1);
//! assert!(pickaxe.contains_state(&BlockState::parse("coal_ore").unwrap(), false));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod alias;
pub mod error;
pub mod match_set;
pub mod matcher;

pub use alias::AliasResolver;
pub use error::{MatchError, MatchResult};
pub use match_set::{log_diagnostic, BlockMatchSet, ParseDiagnostic};
pub use matcher::BlockMatcher;
