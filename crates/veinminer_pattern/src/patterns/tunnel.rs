//! # Tunnel Pattern
//!
//! Mines a square tunnel of side `2r + 1` straight into the face the player
//! hit. Each layer is a cross-section perpendicular to the tunnel axis; the
//! tunnel advances while layers keep yielding blocks.
//!
//! ## Depth Cap
//!
//! Tunnel depth is capped at the depth a perfectly filled tunnel would reach:
//!
//! ```text
//! max_depth = ceil(max_vein_size / (2r + 1)^2)
//! ```
//!
//! With `r = 1` and a cap of 64 that is 8 layers, origin layer included.
//! Without it a 1-wide vein could be followed for the full 64 blocks.

use veinminer_core::{AccessResult, BlockAccessor, BlockFace, BlockPosition, NamespacedKey};

use crate::pattern::{run_traversal, AllocationRequest, VeinMiningPattern};

/// Key of the tunnel pattern.
pub const TUNNEL_KEY: NamespacedKey = NamespacedKey::from_static("veinminer", "tunnel");

/// Directional square-tunnel pattern.
#[derive(Debug, Clone)]
pub struct TunnelPattern {
    key: NamespacedKey,
}

impl TunnelPattern {
    /// Creates the pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self { key: TUNNEL_KEY }
    }
}

impl Default for TunnelPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of layers a tunnel of `radius` may reach under `max_vein_size`.
#[must_use]
pub fn max_tunnel_depth(max_vein_size: usize, radius: usize) -> usize {
    let side = radius.saturating_mul(2).saturating_add(1);
    max_vein_size.div_ceil(side.saturating_mul(side))
}

/// Offset of cross-section cell `(i, j)` from the layer centre, for a
/// tunnel running along the axis face `axis`.
const fn cross_section_offset(axis: BlockFace, i: i32, j: i32) -> (i32, i32, i32) {
    match axis {
        BlockFace::North | BlockFace::South => (i, j, 0),
        BlockFace::East | BlockFace::West => (0, i, j),
        _ => (i, 0, j),
    }
}

impl VeinMiningPattern for TunnelPattern {
    fn key(&self) -> &NamespacedKey {
        &self.key
    }

    fn permission(&self) -> Option<&str> {
        Some("veinminer.pattern.tunnel")
    }

    fn allocate(
        &self,
        accessor: &dyn BlockAccessor,
        request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>> {
        let axis = request.face.opposite();
        if !axis.is_axis() {
            return Ok(Vec::new());
        }

        let radius = i32::try_from(request.config.tunnel_radius).unwrap_or(i32::MAX);
        let max_depth = max_tunnel_depth(request.config.max_vein_size, request.config.tunnel_radius);

        run_traversal(&self.key, accessor, request, |ctx| {
            let mut center = request.origin;
            for depth in 0..max_depth {
                // The origin itself fills the first layer
                let mut advanced = depth == 0;

                for i in -radius..=radius {
                    for j in -radius..=radius {
                        if ctx.is_full() {
                            return Ok(());
                        }
                        let (dx, dy, dz) = cross_section_offset(axis, i, j);
                        advanced |= ctx.try_select(center.offset(dx, dy, dz))?;
                    }
                }

                if !advanced || ctx.is_full() {
                    break;
                }
                center = accessor.relative(center, axis);
            }
            Ok(())
        })
    }
}
