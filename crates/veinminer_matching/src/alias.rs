//! # Alias Groups
//!
//! An alias group is a [`BlockMatchSet`] whose members are interchangeable
//! while a vein is traversed, e.g. `iron_ore` and `deepslate_iron_ore`.
//! Aliases never make a block vein-mineable on their own; they only widen
//! which neighbours join a vein that has already started.
//!
//! Lookups return the first registered group that qualifies.

use veinminer_core::BlockState;

use crate::match_set::BlockMatchSet;
use crate::matcher::BlockMatcher;

/// Ordered collection of alias groups.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    groups: Vec<BlockMatchSet>,
}

impl AliasResolver {
    /// Creates a resolver without groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group. Returns false if an equal group is already present.
    pub fn add_group(&mut self, group: BlockMatchSet) -> bool {
        if self.groups.contains(&group) {
            return false;
        }
        self.groups.push(group);
        true
    }

    /// Removes a group equal to `group`.
    pub fn remove_group(&mut self, group: &BlockMatchSet) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g != group);
        self.groups.len() != before
    }

    /// Removes and returns the first group holding exactly `matcher`.
    pub fn remove_group_containing(&mut self, matcher: &BlockMatcher) -> Option<BlockMatchSet> {
        let index = self.groups.iter().position(|g| g.contains(matcher))?;
        Some(self.groups.remove(index))
    }

    /// The first group holding exactly `matcher`.
    #[must_use]
    pub fn group_for_matcher(&self, matcher: &BlockMatcher) -> Option<&BlockMatchSet> {
        self.groups.iter().find(|g| g.contains(matcher))
    }

    /// The first group with a member matching the concrete `state`.
    #[must_use]
    pub fn group_for_state(&self, state: &BlockState) -> Option<&BlockMatchSet> {
        self.groups.iter().find(|g| g.contains_state(state, false))
    }

    /// Groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &BlockMatchSet> {
        self.groups.iter()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Removes every group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
