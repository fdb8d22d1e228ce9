//! The eligibility predicate shared by all patterns.
//!
//! A candidate joins the vein when the category matcher accepts its state
//! fuzzily, or when the origin's alias group contains it. Tag and wildcard
//! categories are narrowed to the origin's concrete type first: breaking
//! coal under `*` must not take the surrounding stone with it.

use veinminer_core::{BlockState, BlockType};
use veinminer_matching::{BlockMatchSet, BlockMatcher};

/// Decides whether a block state belongs to the vein being allocated.
#[derive(Debug, Clone, Copy)]
pub struct Eligibility<'a> {
    matcher: &'a BlockMatcher,
    aliases: Option<&'a BlockMatchSet>,
    origin_type: &'a BlockType,
}

impl<'a> Eligibility<'a> {
    /// Builds the predicate for a vein started at a block in `origin_state`.
    #[must_use]
    pub fn new(
        matcher: &'a BlockMatcher,
        aliases: Option<&'a BlockMatchSet>,
        origin_state: &'a BlockState,
    ) -> Self {
        Self {
            matcher,
            aliases,
            origin_type: origin_state.block_type(),
        }
    }

    /// Whether `state` is eligible.
    #[must_use]
    pub fn accepts(&self, state: &BlockState) -> bool {
        let category = if self.matcher.is_tangible() {
            self.matcher.matches_state(state, false)
        } else {
            state.block_type() == self.origin_type
        };

        category || self.aliases.is_some_and(|group| group.contains_state(state, false))
    }
}
