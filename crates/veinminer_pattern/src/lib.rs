//! # VeinMiner Pattern
//!
//! The vein allocation engine: bounded traversals over an implicit voxel
//! grid, read through a [`BlockAccessor`](veinminer_core::BlockAccessor).
//!
//! | Pattern | Key | Shape |
//! |---|---|---|
//! | [`ExpansivePattern`] | `veinminer:default` | wave BFS over the connected vein |
//! | [`ThoroughPattern`] | `veinminer:thorough` | same set, full rescan per wave |
//! | [`TunnelPattern`] | `veinminer:tunnel` | square tunnel into the hit face |
//! | [`StaircasePattern`] | `veinminer:staircase_up` / `_down` | diagonal steps into a wall |
//!
//! ## Example
//!
//! ```rust
//! use veinminer_core::{BlockFace, BlockPosition, BlockState, MemoryWorld};
//! use veinminer_matching::BlockMatcher;
//! use veinminer_pattern::{AllocationRequest, PatternRegistry, TraversalConfig};
//!
//! let ore = BlockState::parse("iron_ore").unwrap();
//! let mut world = MemoryWorld::new(BlockState::parse("stone").unwrap());
//! world.set(BlockPosition::new(0, 0, 0), ore.clone());
//! world.set(BlockPosition::new(0, 1, 0), ore.clone());
//!
//! let matcher = BlockMatcher::of_state(&ore);
//! let config = TraversalConfig::default();
//! let request = AllocationRequest::new(BlockPosition::ORIGIN, BlockFace::Up, &matcher, &config);
//!
//! let registry = PatternRegistry::with_defaults();
//! let pattern = registry.get_str("veinminer:default").unwrap();
//!
//! assert_eq!(pattern.allocate(&world, &request).unwrap(), vec![BlockPosition::new(0, 1, 0)]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod context;
pub mod eligibility;
pub mod pattern;
pub mod patterns;
pub mod registry;

pub use config::{
    TraversalConfig, DEFAULT_MAX_VEIN_SIZE, DEFAULT_TUNNEL_RADIUS, MAX_TUNNEL_RADIUS,
};
pub use context::TraversalContext;
pub use eligibility::Eligibility;
pub use pattern::{AllocationRequest, VeinMiningPattern};
pub use patterns::{
    max_tunnel_depth, DummyPattern, ExpansivePattern, StaircaseDirection, StaircasePattern,
    ThoroughPattern, TunnelPattern, EXPANSIVE_KEY, STAIRCASE_DOWN_KEY, STAIRCASE_UP_KEY,
    THOROUGH_KEY, TUNNEL_KEY,
};
pub use registry::{PatternRegistry, SharedPattern};
