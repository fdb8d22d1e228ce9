//! # Traversal Context
//!
//! All mutable state of one allocation. A context is created at the start
//! of [`VeinMiningPattern::allocate`](crate::VeinMiningPattern::allocate)
//! and consumed at the end; patterns themselves hold no scratch state, so a
//! single pattern instance can serve any number of calls, nested or
//! concurrent.
//!
//! The origin is marked visited up front. It is never selected and never
//! counts toward the cap.

use std::collections::HashSet;

use veinminer_core::{AccessResult, BlockAccessor, BlockPosition, BlockState};

use crate::eligibility::Eligibility;
use crate::pattern::AllocationRequest;

/// Per-call traversal state.
pub struct TraversalContext<'a> {
    accessor: &'a dyn BlockAccessor,
    eligibility: Eligibility<'a>,
    origin: BlockPosition,
    visited: HashSet<BlockPosition>,
    selected: Vec<BlockPosition>,
    max_vein_size: usize,
}

impl<'a> TraversalContext<'a> {
    /// Starts an allocation.
    ///
    /// `origin_state` is the state of the block at the request origin, read
    /// by the caller through the same accessor.
    #[must_use]
    pub fn new(
        accessor: &'a dyn BlockAccessor,
        request: &AllocationRequest<'a>,
        origin_state: &'a BlockState,
    ) -> Self {
        let mut visited = HashSet::with_capacity(request.config.max_vein_size.min(1024) * 2);
        visited.insert(request.origin);

        Self {
            accessor,
            eligibility: Eligibility::new(request.matcher, request.aliases, origin_state),
            origin: request.origin,
            visited,
            selected: Vec::with_capacity(request.config.max_vein_size.min(1024)),
            max_vein_size: request.config.max_vein_size,
        }
    }

    /// The accessor this allocation reads from.
    #[inline]
    #[must_use]
    pub fn accessor(&self) -> &'a dyn BlockAccessor {
        self.accessor
    }

    /// The origin position.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> BlockPosition {
        self.origin
    }

    /// True once the cap is reached.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.max_vein_size
    }

    /// Positions selected so far, in selection order.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> &[BlockPosition] {
        &self.selected
    }

    /// Whether `position` was selected by this call. The origin never is.
    #[inline]
    #[must_use]
    pub fn is_selected(&self, position: BlockPosition) -> bool {
        position != self.origin && self.visited.contains(&position)
    }

    /// Whether `position` is the origin or already selected.
    #[inline]
    #[must_use]
    pub fn is_visited(&self, position: BlockPosition) -> bool {
        self.visited.contains(&position)
    }

    /// Whether the block at `position` satisfies the eligibility predicate.
    ///
    /// # Errors
    ///
    /// Propagates accessor failures unchanged.
    pub fn is_eligible(&self, position: BlockPosition) -> AccessResult<bool> {
        let state = self.accessor.block_state(position)?;
        Ok(self.eligibility.accepts(&state))
    }

    /// Selects `position` if it is unvisited and eligible and the cap has
    /// room. Returns whether it was selected.
    ///
    /// # Errors
    ///
    /// Propagates accessor failures unchanged.
    pub fn try_select(&mut self, position: BlockPosition) -> AccessResult<bool> {
        if self.is_full() || self.visited.contains(&position) || !self.is_eligible(position)? {
            return Ok(false);
        }

        self.visited.insert(position);
        self.selected.push(position);
        Ok(true)
    }

    /// Ends the allocation, returning the selected positions.
    #[must_use]
    pub fn finish(self) -> Vec<BlockPosition> {
        if self.is_full() {
            tracing::trace!(
                "Vein from {} stopped at the cap of {} blocks",
                self.origin,
                self.max_vein_size
            );
        }
        self.selected
    }
}
