//! # Traversal Configuration
//!
//! Per-call knobs shared by every pattern. The engine trusts these values:
//! `max_vein_size` and `tunnel_radius` are validated when configuration is loaded, not here.

use serde::{Deserialize, Serialize};
use veinminer_core::BlockFace;

/// Default cap on positions returned by one allocation.
pub const DEFAULT_MAX_VEIN_SIZE: usize = 64;

/// Default tunnel radius (a 3x3 cross-section).
pub const DEFAULT_TUNNEL_RADIUS: usize = 1;

/// Largest tunnel radius configuration accepts (a 33x33 cross-section).
pub const MAX_TUNNEL_RADIUS: usize = 16;

/// Parameters of one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Upper bound on positions returned. Must be at least 1.
    pub max_vein_size: usize,
    /// Use the 18-direction neighbour set instead of the 6 axis faces.
    pub include_edges: bool,
    /// Tunnel cross-section radius, excluding the centre block.
    pub tunnel_radius: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_vein_size: DEFAULT_MAX_VEIN_SIZE,
            include_edges: false,
            tunnel_radius: DEFAULT_TUNNEL_RADIUS,
        }
    }
}

impl TraversalConfig {
    /// Sets the vein size cap.
    #[inline]
    #[must_use]
    pub const fn with_max_vein_size(mut self, max_vein_size: usize) -> Self {
        self.max_vein_size = max_vein_size;
        self
    }

    /// Selects the 6- or 18-direction neighbour set.
    #[inline]
    #[must_use]
    pub const fn with_include_edges(mut self, include_edges: bool) -> Self {
        self.include_edges = include_edges;
        self
    }

    /// Sets the tunnel radius.
    #[inline]
    #[must_use]
    pub const fn with_tunnel_radius(mut self, tunnel_radius: usize) -> Self {
        self.tunnel_radius = tunnel_radius;
        self
    }

    /// The neighbour directions for this configuration, in fixed order.
    #[inline]
    #[must_use]
    pub fn directions(&self) -> &'static [BlockFace] {
        BlockFace::directions(self.include_edges)
    }
}
