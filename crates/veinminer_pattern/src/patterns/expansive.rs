//! # Expansive Pattern (default)
//!
//! Multi-source breadth-first search, one wave at a time.
//!
//! Each wave expands only the positions found by the previous wave, so the
//! total work is bounded by `max_vein_size x |directions|` regardless of
//! world size. Within a wave the frontier is visited in `(x, y, z)` order
//! and directions in their fixed order, which fixes exactly which positions
//! survive when the cap cuts a wave short.

use veinminer_core::{AccessResult, BlockAccessor, BlockFace, BlockPosition, NamespacedKey};

use crate::context::TraversalContext;
use crate::pattern::{run_traversal, AllocationRequest, VeinMiningPattern};

/// Key of the expansive pattern.
pub const EXPANSIVE_KEY: NamespacedKey = NamespacedKey::from_static("veinminer", "default");

/// The default wave-by-wave BFS.
#[derive(Debug, Clone)]
pub struct ExpansivePattern {
    key: NamespacedKey,
}

impl ExpansivePattern {
    /// Creates the pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self { key: EXPANSIVE_KEY }
    }
}

impl Default for ExpansivePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl VeinMiningPattern for ExpansivePattern {
    fn key(&self) -> &NamespacedKey {
        &self.key
    }

    fn permission(&self) -> Option<&str> {
        Some("veinminer.pattern.default")
    }

    fn allocate(
        &self,
        accessor: &dyn BlockAccessor,
        request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>> {
        let directions = request.config.directions();
        run_traversal(&self.key, accessor, request, |ctx| {
            let mut frontier = vec![request.origin];
            while !ctx.is_full() {
                let wave = expand_wave(ctx, &mut frontier, directions)?;
                if wave == 0 {
                    break;
                }
            }
            Ok(())
        })
    }
}

/// Expands one wave, replacing `frontier` with the positions it found.
fn expand_wave(
    ctx: &mut TraversalContext<'_>,
    frontier: &mut Vec<BlockPosition>,
    directions: &[BlockFace],
) -> AccessResult<usize> {
    frontier.sort_unstable();
    let first_new = ctx.selected().len();

    'wave: for &current in frontier.iter() {
        for &face in directions {
            if ctx.is_full() {
                break 'wave;
            }
            let neighbour = ctx.accessor().relative(current, face);
            ctx.try_select(neighbour)?;
        }
    }

    frontier.clear();
    frontier.extend_from_slice(&ctx.selected()[first_new..]);
    Ok(frontier.len())
}
