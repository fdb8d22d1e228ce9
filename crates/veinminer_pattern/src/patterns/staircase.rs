//! Staircase patterns: a 1-wide diagonal column cut into a wall.
//!
//! Each step moves one block away from the wall the player hit and one
//! block up (or down), then takes the 3-block vertical segment centred on
//! the new step position. Only applies to walls; a floor or ceiling hit
//! allocates nothing.

use veinminer_core::{AccessResult, BlockAccessor, BlockPosition, NamespacedKey};

use crate::context::TraversalContext;
use crate::pattern::{run_traversal, AllocationRequest, VeinMiningPattern};

/// Key of the upward staircase pattern.
pub const STAIRCASE_UP_KEY: NamespacedKey = NamespacedKey::from_static("veinminer", "staircase_up");

/// Key of the downward staircase pattern.
pub const STAIRCASE_DOWN_KEY: NamespacedKey =
    NamespacedKey::from_static("veinminer", "staircase_down");

/// Vertical direction of a staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaircaseDirection {
    /// Each step rises one block.
    Up,
    /// Each step descends one block.
    Down,
}

impl StaircaseDirection {
    /// Vertical delta per step.
    #[inline]
    #[must_use]
    pub const fn mod_y(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Diagonal staircase pattern.
#[derive(Debug, Clone)]
pub struct StaircasePattern {
    direction: StaircaseDirection,
    key: NamespacedKey,
}

impl StaircasePattern {
    /// Creates a staircase going `direction`.
    #[must_use]
    pub const fn new(direction: StaircaseDirection) -> Self {
        let key = match direction {
            StaircaseDirection::Up => STAIRCASE_UP_KEY,
            StaircaseDirection::Down => STAIRCASE_DOWN_KEY,
        };
        Self { direction, key }
    }

    /// The vertical direction.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> StaircaseDirection {
        self.direction
    }
}

/// Outcome of one segment.
enum Segment {
    Advanced,
    Stalled,
}

fn mine_segment(
    ctx: &mut TraversalContext<'_>,
    step: BlockPosition,
    first: bool,
) -> AccessResult<Segment> {
    let mut changed = first;
    for dy in -1..=1 {
        if ctx.is_full() {
            return Ok(Segment::Stalled);
        }

        changed |= ctx.try_select(step.offset(0, dy, 0))?;
    }

    Ok(if changed && !ctx.is_full() {
        Segment::Advanced
    } else {
        Segment::Stalled
    })
}

impl VeinMiningPattern for StaircasePattern {
    fn key(&self) -> &NamespacedKey {
        &self.key
    }

    fn permission(&self) -> Option<&str> {
        Some(match self.direction {
            StaircaseDirection::Up => "veinminer.pattern.staircase_up",
            StaircaseDirection::Down => "veinminer.pattern.staircase_down",
        })
    }

    fn allocate(
        &self,
        accessor: &dyn BlockAccessor,
        request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>> {
        if !request.face.is_horizontal() {
            return Ok(Vec::new());
        }

        let (dx, _, dz) = request.face.opposite().offsets();
        let dy = self.direction.mod_y();

        run_traversal(&self.key, accessor, request, |ctx| {
            let mut step = request.origin;
            let mut first = true;
            while let Segment::Advanced = mine_segment(ctx, step, first)? {
                step = step.offset(dx, dy, dz);
                first = false;
            }
            Ok(())
        })
    }
}
