//! # Block Matchers
//!
//! A [`BlockMatcher`] is a declarative rule deciding which concrete block
//! states belong to a vein category. The set of rule kinds is closed:
//!
//! | Grammar | Variant | Matches |
//! |---|---|---|
//! | `type-key` | [`BlockMatcher::Type`] | every state of one type |
//! | `type-key[p=v,...]` | [`BlockMatcher::State`] | states agreeing on the listed properties |
//! | `#tag-key` | [`BlockMatcher::Tag`] | every state of every tagged type |
//! | `*` | [`BlockMatcher::Wildcard`] | everything |
//!
//! Equality, hashing and ordering look at the variant and its payload only.
//! A tag is identified by its key; its member list is not compared.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use veinminer_core::block::{split_state_string, write_properties};
use veinminer_core::{BlockRegistry, BlockState, BlockTag, BlockType, NamespacedKey};

use crate::error::{MatchError, MatchResult};

/// A rule classifying block states into a vein category.
#[derive(Clone, Debug)]
pub enum BlockMatcher {
    /// Any state of the given type.
    Type(BlockType),

    /// States of `block_type` whose listed properties agree.
    ///
    /// `properties` is never empty; a state rule without properties is a
    /// [`BlockMatcher::Type`].
    State {
        /// The block type.
        block_type: BlockType,
        /// The explicitly specified properties.
        properties: BTreeMap<String, String>,
    },

    /// Any state whose type is a member of the tag.
    Tag(Arc<BlockTag>),

    /// Any state at all.
    Wildcard,
}

impl BlockMatcher {
    /// A matcher for every state of `block_type`.
    #[inline]
    #[must_use]
    pub const fn of_type(block_type: BlockType) -> Self {
        Self::Type(block_type)
    }

    /// A matcher for the properties of `state`.
    ///
    /// A state with no properties yields a type matcher.
    #[must_use]
    pub fn of_state(state: &BlockState) -> Self {
        Self::from_parts(state.block_type().clone(), state.properties().clone())
    }

    /// A matcher for every member of `tag`.
    #[must_use]
    pub fn of_tag(tag: Arc<BlockTag>) -> Self {
        Self::Tag(tag)
    }

    fn from_parts(block_type: BlockType, properties: BTreeMap<String, String>) -> Self {
        if properties.is_empty() {
            Self::Type(block_type)
        } else {
            Self::State {
                block_type,
                properties,
            }
        }
    }

    /// Parses the matcher grammar against a block catalogue.
    ///
    /// Surrounding whitespace is ignored. `type[]` parses as a type
    /// matcher.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] for malformed input, or for a type or tag
    /// the registry does not know.
    pub fn parse(input: &str, registry: &dyn BlockRegistry) -> MatchResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MatchError::Empty);
        }

        if input == "*" {
            return Ok(Self::Wildcard);
        }

        if let Some(tag_key) = input.strip_prefix('#') {
            let key = NamespacedKey::parse(tag_key)
                .map_err(|_| MatchError::MalformedTag(input.to_owned()))?;
            return registry
                .tag(&key)
                .map(Self::Tag)
                .ok_or_else(|| MatchError::UnknownTag(key.to_string()));
        }

        let (type_part, properties) = split_state_string(input)?;
        let block_type = BlockType::parse(type_part)?;
        if !registry.is_block(&block_type) {
            return Err(MatchError::UnknownType(block_type.to_string()));
        }

        Ok(Self::from_parts(block_type, properties))
    }

    /// Whether this matcher accepts every state of `block_type`.
    ///
    /// A state matcher never matches a bare type.
    #[must_use]
    pub fn matches_type(&self, block_type: &BlockType) -> bool {
        match self {
            Self::Type(own) => own == block_type,
            Self::State { .. } => false,
            Self::Tag(tag) => tag.is_tagged(block_type),
            Self::Wildcard => true,
        }
    }

    /// Whether this matcher accepts `state`.
    ///
    /// With `exact` set, a state matcher requires the state's property map
    /// to equal its own. Type, tag and wildcard matchers ignore `exact`.
    #[must_use]
    pub fn matches_state(&self, state: &BlockState, exact: bool) -> bool {
        match self {
            Self::Type(own) => own == state.block_type(),
            Self::State {
                block_type,
                properties,
            } => {
                if block_type != state.block_type() {
                    return false;
                }
                if exact {
                    return properties == state.properties();
                }
                properties
                    .iter()
                    .all(|(name, value)| state.property(name) == Some(value.as_str()))
            }
            Self::Tag(tag) => tag.is_tagged(state.block_type()),
            Self::Wildcard => true,
        }
    }

    /// Tangible matchers name concrete block types.
    ///
    /// Tag and wildcard matchers span many types; traversal narrows them to
    /// the type of the block that was broken.
    #[inline]
    #[must_use]
    pub const fn is_tangible(&self) -> bool {
        matches!(self, Self::Type(_) | Self::State { .. })
    }

    /// True for [`BlockMatcher::Wildcard`].
    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// The block type of a type or state matcher.
    #[must_use]
    pub const fn block_type(&self) -> Option<&BlockType> {
        match self {
            Self::Type(block_type) | Self::State { block_type, .. } => Some(block_type),
            Self::Tag(_) | Self::Wildcard => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Wildcard => 0,
            Self::Tag(_) => 1,
            Self::Type(_) => 2,
            Self::State { .. } => 3,
        }
    }
}

impl fmt::Display for BlockMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(block_type) => write!(f, "{block_type}"),
            Self::State {
                block_type,
                properties,
            } => {
                write!(f, "{block_type}")?;
                write_properties(f, properties)
            }
            Self::Tag(tag) => write!(f, "#{}", tag.key()),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

impl PartialEq for BlockMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BlockMatcher {}

impl Hash for BlockMatcher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Type(block_type) => block_type.hash(state),
            Self::State {
                block_type,
                properties,
            } => {
                block_type.hash(state);
                properties.hash(state);
            }
            Self::Tag(tag) => tag.key().hash(state),
            Self::Wildcard => {}
        }
    }
}

impl PartialOrd for BlockMatcher {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlockMatcher {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Type(a), Self::Type(b)) => a.cmp(b),
            (
                Self::State {
                    block_type: a,
                    properties: pa,
                },
                Self::State {
                    block_type: b,
                    properties: pb,
                },
            ) => a.cmp(b).then_with(|| pa.cmp(pb)),
            (Self::Tag(a), Self::Tag(b)) => a.key().cmp(b.key()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veinminer_core::SimpleBlockRegistry;

    fn ty(key: &str) -> BlockType {
        BlockType::parse(key).unwrap()
    }

    fn registry() -> SimpleBlockRegistry {
        SimpleBlockRegistry::new()
            .with_block(ty("stone"))
            .with_block(ty("chest"))
            .with_tag(BlockTag::new(
                NamespacedKey::minecraft("logs").unwrap(),
                [ty("oak_log"), ty("birch_log")],
            ))
    }

    #[test]
    fn test_parse_each_variant() {
        let registry = registry();

        assert_eq!(BlockMatcher::parse("*", &registry).unwrap(), BlockMatcher::Wildcard);
        assert_eq!(
            BlockMatcher::parse("stone", &registry).unwrap(),
            BlockMatcher::Type(ty("stone"))
        );
        assert!(matches!(
            BlockMatcher::parse("minecraft:chest[facing=north]", &registry).unwrap(),
            BlockMatcher::State { .. }
        ));
        assert!(matches!(
            BlockMatcher::parse("#minecraft:logs", &registry).unwrap(),
            BlockMatcher::Tag(_)
        ));
    }

    #[test]
    fn test_parse_failures() {
        let registry = registry();

        assert_eq!(BlockMatcher::parse("  ", &registry), Err(MatchError::Empty));
        assert_eq!(
            BlockMatcher::parse("diamond_ore", &registry),
            Err(MatchError::UnknownType("minecraft:diamond_ore".to_owned()))
        );
        assert_eq!(
            BlockMatcher::parse("#minecraft:leaves", &registry),
            Err(MatchError::UnknownTag("minecraft:leaves".to_owned()))
        );
        assert!(matches!(
            BlockMatcher::parse("#Bad Key", &registry),
            Err(MatchError::MalformedTag(_))
        ));
        assert!(matches!(
            BlockMatcher::parse("chest[facing=", &registry),
            Err(MatchError::Syntax(_))
        ));
    }

    #[test]
    fn test_empty_brackets_parse_as_type() {
        assert_eq!(
            BlockMatcher::parse("chest[]", &registry()).unwrap(),
            BlockMatcher::Type(ty("chest"))
        );
    }

    #[test]
    fn test_state_matcher_fuzzy_and_exact() {
        let matcher = BlockMatcher::parse("chest[facing=north]", &registry()).unwrap();
        let north = BlockState::new(ty("chest")).with("facing", "north");
        let north_wet = north.clone().with("waterlogged", "true");
        let south = BlockState::new(ty("chest")).with("facing", "south");

        assert!(matcher.matches_state(&north, false));
        assert!(matcher.matches_state(&north_wet, false));
        assert!(!matcher.matches_state(&south, false));

        assert!(matcher.matches_state(&north, true));
        assert!(!matcher.matches_state(&north_wet, true));

        assert!(!matcher.matches_type(&ty("chest")));
    }

    #[test]
    fn test_tag_ignores_state_even_when_exact() {
        let matcher = BlockMatcher::parse("#logs", &registry()).unwrap();
        let log = BlockState::new(ty("oak_log")).with("axis", "y");

        assert!(matcher.matches_state(&log, true));
        assert!(matcher.matches_type(&ty("birch_log")));
        assert!(!matcher.matches_type(&ty("stone")));
        assert!(!matcher.is_tangible());
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let state = BlockState::new(ty("anything"));
        assert!(BlockMatcher::Wildcard.matches_state(&state, true));
        assert!(BlockMatcher::Wildcard.matches_type(&ty("anything")));
        assert!(!BlockMatcher::Wildcard.is_tangible());
    }

    #[test]
    fn test_tag_equality_by_key_only() {
        let key = NamespacedKey::minecraft("logs").unwrap();
        let small = BlockMatcher::of_tag(Arc::new(BlockTag::new(key.clone(), [ty("oak_log")])));
        let large = BlockMatcher::of_tag(Arc::new(BlockTag::new(
            key,
            [ty("oak_log"), ty("spruce_log")],
        )));
        assert_eq!(small, large);
    }

    #[test]
    fn test_type_and_state_of_same_type_differ() {
        let registry = registry();
        let broad = BlockMatcher::parse("chest", &registry).unwrap();
        let narrow = BlockMatcher::parse("chest[facing=north]", &registry).unwrap();
        assert_ne!(broad, narrow);
        assert!(broad < narrow);
    }

    #[test]
    fn test_canonical_strings() {
        let registry = registry();
        for (input, canonical) in [
            ("*", "*"),
            ("stone", "minecraft:stone"),
            ("#logs", "#minecraft:logs"),
            ("chest[waterlogged=false, facing=east]", "minecraft:chest[facing=east,waterlogged=false]"),
        ] {
            let matcher = BlockMatcher::parse(input, &registry).unwrap();
            assert_eq!(matcher.to_string(), canonical);
            assert_eq!(BlockMatcher::parse(canonical, &registry).unwrap(), matcher);
        }
    }

    #[test]
    fn test_of_state_without_properties_is_type() {
        let state = BlockState::new(ty("stone"));
        assert_eq!(BlockMatcher::of_state(&state), BlockMatcher::of_type(ty("stone")));
    }
}
