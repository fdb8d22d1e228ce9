//! # VeinMiner
//!
//! Break one block, break the whole vein.
//!
//! This crate ties the engine together for a host server:
//! - [`VeinMinerConfig`]: the TOML document (algorithm, categories, aliases)
//! - [`VeinMinerManager`]: the resolved global list, tool categories and
//!   alias groups, plus held-item to category resolution
//! - [`VeinMiner`]: the thread-safe `vein_mine` entry point with hot reload
//!
//! The host supplies the world through a
//! [`BlockAccessor`](veinminer_core::BlockAccessor) and the set of known
//! blocks and tags through a [`BlockRegistry`](veinminer_core::BlockRegistry).
//!
//! ## Example
//!
//! ```rust
//! use veinminer::{VeinMiner, VeinMinerConfig};
//! use veinminer_core::{
//!     BlockFace, BlockPosition, BlockState, BlockType, MemoryWorld, SimpleBlockRegistry,
//! };
//!
//! let registry = SimpleBlockRegistry::new()
//!     .with_block(BlockType::parse("stone").unwrap())
//!     .with_block(BlockType::parse("coal_ore").unwrap());
//!
//! let config = VeinMinerConfig::from_toml_str(r#"
//!     [categories.pickaxe]
//!     items  = ["iron_pickaxe"]
//!     blocks = ["coal_ore"]
//! "#).unwrap();
//! let miner = VeinMiner::from_config(&config, &registry).unwrap();
//!
//! let mut world = MemoryWorld::new(BlockState::parse("stone").unwrap());
//! world.set(BlockPosition::new(0, 0, 0), BlockState::parse("coal_ore").unwrap());
//! world.set(BlockPosition::new(0, -1, 0), BlockState::parse("coal_ore").unwrap());
//!
//! let blocks = miner
//!     .vein_mine(&world, "world", "pickaxe", None, BlockPosition::ORIGIN, BlockFace::Up)
//!     .unwrap();
//! assert_eq!(blocks, vec![BlockPosition::new(0, -1, 0)]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod category;
pub mod config;
pub mod error;
pub mod manager;
pub mod service;

pub use category::{ToolCategory, AIR, HAND_CATEGORY_ID};
pub use config::{CategoryConfig, VeinMinerConfig};
pub use error::{VeinMinerError, VeinMinerResult};
pub use manager::{ReloadSummary, VeinMinerManager};
pub use service::VeinMiner;
