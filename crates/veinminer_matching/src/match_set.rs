//! # Block Match Sets
//!
//! A [`BlockMatchSet`] is the vein-mineable list of one category: a
//! duplicate-free, deterministically ordered set of [`BlockMatcher`]s.
//!
//! Lists are built from configuration strings with
//! [`BlockMatchSet::parse_lines`]. Every bad or duplicate line is reported
//! to a diagnostic sink and skipped; the rest of the list still loads.

use std::collections::BTreeSet;
use std::fmt;

use veinminer_core::{BlockRegistry, BlockState, BlockType};

use crate::error::MatchError;
use crate::matcher::BlockMatcher;

/// A problem found while parsing one line of a matcher list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagnostic {
    /// The line could not be parsed and was skipped.
    Invalid {
        /// The offending line.
        input: String,
        /// Why it was rejected.
        error: MatchError,
    },

    /// The line parsed to a matcher already in the set.
    Duplicate {
        /// The offending line.
        input: String,
    },
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { input, error } => {
                write!(f, "unknown or invalid block state string \"{input}\": {error}")
            }
            Self::Duplicate { input } => write!(f, "duplicate block state string \"{input}\""),
        }
    }
}

/// Diagnostic sink that forwards every diagnostic to `tracing` at warn level.
pub fn log_diagnostic(diagnostic: ParseDiagnostic) {
    tracing::warn!("{diagnostic}");
}

/// A set of matchers forming one category's list.
///
/// A type matcher and a state matcher for the same type may coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockMatchSet {
    matchers: BTreeSet<BlockMatcher>,
}

impl BlockMatchSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a batch of matcher strings.
    ///
    /// Lines that fail to parse, and lines equal to an earlier entry, are
    /// reported to `sink` and skipped.
    pub fn parse_lines<I, S, F>(lines: I, registry: &dyn BlockRegistry, mut sink: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(ParseDiagnostic),
    {
        let mut set = Self::new();
        for line in lines {
            let input = line.as_ref();
            match BlockMatcher::parse(input, registry) {
                Ok(matcher) => {
                    if !set.add(matcher) {
                        sink(ParseDiagnostic::Duplicate {
                            input: input.to_owned(),
                        });
                    }
                }
                Err(error) => sink(ParseDiagnostic::Invalid {
                    input: input.to_owned(),
                    error,
                }),
            }
        }
        set
    }

    /// Adds a matcher. Returns false if an equal matcher was present.
    pub fn add(&mut self, matcher: BlockMatcher) -> bool {
        self.matchers.insert(matcher)
    }

    /// Removes exactly `matcher`. Returns false if it was absent.
    pub fn remove(&mut self, matcher: &BlockMatcher) -> bool {
        self.matchers.remove(matcher)
    }

    /// Removes every matcher that matches `state` exactly.
    pub fn remove_state(&mut self, state: &BlockState) -> bool {
        let before = self.matchers.len();
        self.matchers.retain(|matcher| !matcher.matches_state(state, true));
        self.matchers.len() != before
    }

    /// Removes every matcher that matches all states of `block_type`.
    pub fn remove_type(&mut self, block_type: &BlockType) -> bool {
        let before = self.matchers.len();
        self.matchers.retain(|matcher| !matcher.matches_type(block_type));
        self.matchers.len() != before
    }

    /// Whether exactly `matcher` is a member.
    #[must_use]
    pub fn contains(&self, matcher: &BlockMatcher) -> bool {
        self.matchers.contains(matcher)
    }

    /// Whether any member matches every state of `block_type`.
    #[must_use]
    pub fn contains_type(&self, block_type: &BlockType) -> bool {
        self.matchers.iter().any(|m| m.matches_type(block_type))
    }

    /// Whether any member matches `state`.
    #[must_use]
    pub fn contains_state(&self, state: &BlockState, exact: bool) -> bool {
        self.matchers.iter().any(|m| m.matches_state(state, exact))
    }

    /// Whether the set holds the wildcard.
    #[must_use]
    pub fn contains_wildcard(&self) -> bool {
        self.matchers.contains(&BlockMatcher::Wildcard)
    }

    /// The first member, in set order, matching `state` fuzzily.
    #[must_use]
    pub fn matcher_for(&self, state: &BlockState) -> Option<&BlockMatcher> {
        self.matchers.iter().find(|m| m.matches_state(state, false))
    }

    /// Members in their deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockMatcher> {
        self.matchers.iter()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// True if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.matchers.clear();
    }
}

impl Extend<BlockMatcher> for BlockMatchSet {
    fn extend<T: IntoIterator<Item = BlockMatcher>>(&mut self, iter: T) {
        self.matchers.extend(iter);
    }
}

impl FromIterator<BlockMatcher> for BlockMatchSet {
    fn from_iter<T: IntoIterator<Item = BlockMatcher>>(iter: T) -> Self {
        Self {
            matchers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockMatchSet {
    type Item = &'a BlockMatcher;
    type IntoIter = std::collections::btree_set::Iter<'a, BlockMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchers.iter()
    }
}

impl fmt::Display for BlockMatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{matcher}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veinminer_core::{BlockTag, NamespacedKey, SimpleBlockRegistry};

    fn ty(key: &str) -> BlockType {
        BlockType::parse(key).unwrap()
    }

    fn registry() -> SimpleBlockRegistry {
        SimpleBlockRegistry::new()
            .with_block(ty("stone"))
            .with_block(ty("chest"))
            .with_block(ty("coal_ore"))
            .with_tag(BlockTag::new(
                NamespacedKey::minecraft("logs").unwrap(),
                [ty("oak_log")],
            ))
    }

    #[test]
    fn test_parse_lines_skips_bad_and_duplicate() {
        let mut diagnostics = Vec::new();
        let set = BlockMatchSet::parse_lines(
            ["stone", "not a block", "minecraft:stone", "#logs", "emerald_ore"],
            &registry(),
            |d| diagnostics.push(d),
        );

        assert_eq!(set.len(), 2);
        assert_eq!(diagnostics.len(), 3);
        assert!(matches!(&diagnostics[0], ParseDiagnostic::Invalid { input, .. } if input == "not a block"));
        assert_eq!(
            diagnostics[1],
            ParseDiagnostic::Duplicate {
                input: "minecraft:stone".to_owned()
            }
        );
        assert!(matches!(
            &diagnostics[2],
            ParseDiagnostic::Invalid { error: MatchError::UnknownType(_), .. }
        ));
    }

    #[test]
    fn test_type_and_state_coexist() {
        let set = BlockMatchSet::parse_lines(
            ["chest", "chest[facing=north]"],
            &registry(),
            log_diagnostic,
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contains_queries() {
        let set = BlockMatchSet::parse_lines(["coal_ore", "#logs"], &registry(), log_diagnostic);
        let coal = BlockState::new(ty("coal_ore"));
        let log = BlockState::new(ty("oak_log")).with("axis", "x");

        assert!(set.contains_type(&ty("coal_ore")));
        assert!(set.contains_state(&log, true));
        assert!(!set.contains_state(&BlockState::new(ty("stone")), false));
        assert!(!set.contains_wildcard());
        assert_eq!(set.matcher_for(&coal), Some(&BlockMatcher::of_type(ty("coal_ore"))));
    }

    #[test]
    fn test_remove_state_and_type() {
        let registry = registry();
        let mut set = BlockMatchSet::parse_lines(
            ["chest", "chest[facing=north]", "stone"],
            &registry,
            log_diagnostic,
        );

        let north = BlockState::new(ty("chest")).with("facing", "north");
        // Both chest rules accept the north chest
        assert!(set.remove_state(&north));
        assert_eq!(set.len(), 1);

        assert!(set.remove_type(&ty("stone")));
        assert!(set.is_empty());
        assert!(!set.remove_type(&ty("stone")));
    }

    #[test]
    fn test_display_is_sorted() {
        let set = BlockMatchSet::parse_lines(["stone", "*", "#logs"], &registry(), log_diagnostic);
        assert_eq!(set.to_string(), "[*, #minecraft:logs, minecraft:stone]");
    }
}
