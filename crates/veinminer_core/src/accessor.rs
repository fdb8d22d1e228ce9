//! # Block Accessor
//!
//! The read-only seam between the allocation engine and the world.
//!
//! Implementations must be deterministic and side-effect free: the same
//! position yields the same state for the duration of one allocation.
//! Failures are reported as [`AccessError`] and travel back to the caller
//! unchanged.

use std::collections::HashMap;

use crate::block::BlockState;
use crate::error::{AccessError, AccessResult};
use crate::face::BlockFace;
use crate::position::BlockPosition;

/// Read access to concrete block states.
pub trait BlockAccessor {
    /// The state of the block at `position`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] when the world cannot answer.
    fn block_state(&self, position: BlockPosition) -> AccessResult<BlockState>;

    /// The position adjacent to `position` across `face`.
    fn relative(&self, position: BlockPosition, face: BlockFace) -> BlockPosition {
        position.relative(face)
    }
}

impl<A: BlockAccessor + ?Sized> BlockAccessor for &A {
    fn block_state(&self, position: BlockPosition) -> AccessResult<BlockState> {
        (**self).block_state(position)
    }

    fn relative(&self, position: BlockPosition, face: BlockFace) -> BlockPosition {
        (**self).relative(position, face)
    }
}

/// A sparse in-memory world.
///
/// Unset positions read as the fill state. An optional inclusive bounding
/// box makes reads outside it fail with [`AccessError::Unloaded`].
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPosition, BlockState>,
    fill: BlockState,
    bounds: Option<(BlockPosition, BlockPosition)>,
}

impl MemoryWorld {
    /// Creates an unbounded world filled with `fill`.
    #[must_use]
    pub fn new(fill: BlockState) -> Self {
        Self {
            blocks: HashMap::new(),
            fill,
            bounds: None,
        }
    }

    /// Restricts readable positions to the inclusive box `min..=max`.
    #[must_use]
    pub fn with_bounds(mut self, min: BlockPosition, max: BlockPosition) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Sets the block at `position`.
    pub fn set(&mut self, position: BlockPosition, state: BlockState) {
        self.blocks.insert(position, state);
    }

    /// Resets `position` to the fill state.
    pub fn clear(&mut self, position: BlockPosition) {
        self.blocks.remove(&position);
    }

    /// Number of explicitly set blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if no block has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn in_bounds(&self, position: BlockPosition) -> bool {
        self.bounds.map_or(true, |(min, max)| {
            (min.x..=max.x).contains(&position.x)
                && (min.y..=max.y).contains(&position.y)
                && (min.z..=max.z).contains(&position.z)
        })
    }
}

impl BlockAccessor for MemoryWorld {
    fn block_state(&self, position: BlockPosition) -> AccessResult<BlockState> {
        if !self.in_bounds(position) {
            return Err(AccessError::Unloaded(position));
        }
        Ok(self.blocks.get(&position).unwrap_or(&self.fill).clone())
    }
}

/// An accessor backed by a function, for procedural or unbounded worlds.
pub struct FnAccessor<F>(pub F);

impl<F> FnAccessor<F>
where
    F: Fn(BlockPosition) -> AccessResult<BlockState>,
{
    /// Wraps `lookup`.
    pub fn new(lookup: F) -> Self {
        Self(lookup)
    }
}

impl<F> BlockAccessor for FnAccessor<F>
where
    F: Fn(BlockPosition) -> AccessResult<BlockState>,
{
    fn block_state(&self, position: BlockPosition) -> AccessResult<BlockState> {
        (self.0)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;

    fn state(key: &str) -> BlockState {
        BlockState::new(BlockType::parse(key).unwrap())
    }

    #[test]
    fn test_memory_world_fill_and_set() {
        let mut world = MemoryWorld::new(state("air"));
        world.set(BlockPosition::new(1, 2, 3), state("iron_ore"));

        assert_eq!(world.block_state(BlockPosition::new(1, 2, 3)).unwrap(), state("iron_ore"));
        assert_eq!(world.block_state(BlockPosition::ORIGIN).unwrap(), state("air"));

        world.clear(BlockPosition::new(1, 2, 3));
        assert!(world.is_empty());
    }

    #[test]
    fn test_memory_world_bounds() {
        let world = MemoryWorld::new(state("stone"))
            .with_bounds(BlockPosition::new(-1, -1, -1), BlockPosition::new(1, 1, 1));

        assert!(world.block_state(BlockPosition::new(1, 1, 1)).is_ok());
        assert_eq!(
            world.block_state(BlockPosition::new(2, 0, 0)),
            Err(AccessError::Unloaded(BlockPosition::new(2, 0, 0)))
        );
    }

    #[test]
    fn test_fn_accessor() {
        let world = FnAccessor::new(|pos| {
            Ok(if pos.y < 0 { state("stone") } else { state("air") })
        });
        assert_eq!(world.block_state(BlockPosition::new(0, -5, 0)).unwrap(), state("stone"));
        assert_eq!(
            world.relative(BlockPosition::ORIGIN, BlockFace::Up),
            BlockPosition::new(0, 1, 0)
        );
    }
}
