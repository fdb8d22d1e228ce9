//! Thorough (legacy) pattern: every wave rescans the whole vein.
//!
//! Finds the same connected set as [`ExpansivePattern`] below the cap, at
//! up to quadratic cost. Kept for players who picked it before the
//! expansive pattern existed.
//!
//! [`ExpansivePattern`]: crate::patterns::ExpansivePattern

use veinminer_core::{AccessResult, BlockAccessor, BlockPosition, NamespacedKey};

use crate::pattern::{run_traversal, AllocationRequest, VeinMiningPattern};

/// Key of the thorough pattern.
pub const THOROUGH_KEY: NamespacedKey = NamespacedKey::from_static("veinminer", "thorough");

/// Full-rescan flood fill.
#[derive(Debug, Clone)]
pub struct ThoroughPattern {
    key: NamespacedKey,
}

impl ThoroughPattern {
    /// Creates the pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self { key: THOROUGH_KEY }
    }
}

impl Default for ThoroughPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl VeinMiningPattern for ThoroughPattern {
    fn key(&self) -> &NamespacedKey {
        &self.key
    }

    fn permission(&self) -> Option<&str> {
        Some("veinminer.pattern.thorough")
    }

    fn allocate(
        &self,
        accessor: &dyn BlockAccessor,
        request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>> {
        let directions = request.config.directions();
        run_traversal(&self.key, accessor, request, |ctx| {
            let mut scan = Vec::new();
            while !ctx.is_full() {
                scan.clear();
                scan.push(request.origin);
                scan.extend_from_slice(ctx.selected());
                scan.sort_unstable();

                let before = ctx.selected().len();
                'wave: for &current in &scan {
                    for &face in directions {
                        if ctx.is_full() {
                            break 'wave;
                        }
                        ctx.try_select(accessor.relative(current, face))?;
                    }
                }

                if ctx.selected().len() == before {
                    break;
                }
            }
            Ok(())
        })
    }
}
