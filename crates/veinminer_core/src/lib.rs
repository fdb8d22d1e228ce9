//! # VeinMiner Core
//!
//! The voxel vocabulary shared by every VeinMiner crate:
//! - `NamespacedKey` identifiers for block types, tags and patterns
//! - `BlockPosition` with a compact 64-bit packed form
//! - `BlockFace` and the 6/18 neighbour direction sets
//! - `BlockType`, `BlockState` and `BlockTag`
//! - The `BlockAccessor` seam through which the world is read
//!
//! ## Example
//!
//! ```rust
//! use veinminer_core::{BlockAccessor, BlockPosition, BlockState, MemoryWorld};
//!
//! let air = BlockState::parse("minecraft:air").unwrap();
//! let ore = BlockState::parse("minecraft:iron_ore").unwrap();
//!
//! let mut world = MemoryWorld::new(air);
//! world.set(BlockPosition::new(0, 12, 0), ore.clone());
//!
//! assert_eq!(world.block_state(BlockPosition::new(0, 12, 0)).unwrap(), ore);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod accessor;
pub mod block;
pub mod error;
pub mod face;
pub mod key;
pub mod position;
pub mod registry;

pub use accessor::{BlockAccessor, FnAccessor, MemoryWorld};
pub use block::{BlockState, BlockTag, BlockType};
pub use error::{AccessError, AccessResult, CoreError, CoreResult};
pub use face::BlockFace;
pub use key::{NamespacedKey, DEFAULT_NAMESPACE, VEINMINER_NAMESPACE};
pub use position::BlockPosition;
pub use registry::{BlockRegistry, SimpleBlockRegistry};
