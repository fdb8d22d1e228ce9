//! # Vein Mining Patterns
//!
//! A pattern turns one broken block into the list of further positions to
//! break. Every pattern follows the same contract:
//!
//! - the result never contains the origin
//! - the result holds at most `max_vein_size` positions, enforced while
//!   traversing
//! - a pattern that does not apply to the request returns an empty list
//! - accessor failures are returned unchanged
//! - identical inputs against an identical world yield identical output,
//!   order included

use veinminer_core::{AccessResult, BlockAccessor, BlockFace, BlockPosition, NamespacedKey};
use veinminer_matching::{BlockMatchSet, BlockMatcher};

use crate::config::TraversalConfig;
use crate::context::TraversalContext;

/// Everything a pattern needs to know about one allocation.
#[derive(Debug, Clone, Copy)]
pub struct AllocationRequest<'a> {
    /// The broken block.
    pub origin: BlockPosition,
    /// The face of the origin the player hit.
    pub face: BlockFace,
    /// The category matcher resolved for the origin.
    pub matcher: &'a BlockMatcher,
    /// Traversal parameters.
    pub config: &'a TraversalConfig,
    /// The origin's alias group, if any.
    pub aliases: Option<&'a BlockMatchSet>,
}

impl<'a> AllocationRequest<'a> {
    /// A request without an alias group.
    #[must_use]
    pub const fn new(
        origin: BlockPosition,
        face: BlockFace,
        matcher: &'a BlockMatcher,
        config: &'a TraversalConfig,
    ) -> Self {
        Self {
            origin,
            face,
            matcher,
            config,
            aliases: None,
        }
    }

    /// Attaches an alias group.
    #[must_use]
    pub const fn with_aliases(mut self, aliases: Option<&'a BlockMatchSet>) -> Self {
        self.aliases = aliases;
        self
    }
}

/// A traversal strategy selecting the blocks of a vein.
pub trait VeinMiningPattern: Send + Sync {
    /// Stable identity, used by preference storage.
    fn key(&self) -> &NamespacedKey;

    /// Permission node a host may require before offering this pattern.
    fn permission(&self) -> Option<&str> {
        None
    }

    /// Selects the positions to break alongside `request.origin`.
    ///
    /// # Errors
    ///
    /// Returns the accessor's error if any block read fails.
    fn allocate(
        &self,
        accessor: &dyn BlockAccessor,
        request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>>;
}

/// Runs `traverse` inside a fresh [`TraversalContext`].
pub(crate) fn run_traversal<F>(
    key: &NamespacedKey,
    accessor: &dyn BlockAccessor,
    request: &AllocationRequest<'_>,
    traverse: F,
) -> AccessResult<Vec<BlockPosition>>
where
    F: FnOnce(&mut TraversalContext<'_>) -> AccessResult<()>,
{
    let origin_state = accessor.block_state(request.origin)?;
    let mut ctx = TraversalContext::new(accessor, request, &origin_state);
    traverse(&mut ctx)?;
    let positions = ctx.finish();

    tracing::debug!(
        "Pattern {} allocated {} blocks from {}",
        key,
        positions.len(),
        request.origin
    );
    Ok(positions)
}
