//! Block types, concrete block states and block tags.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::key::NamespacedKey;

/// A block type such as `minecraft:iron_ore`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockType(NamespacedKey);

impl BlockType {
    /// Wraps a namespaced key.
    #[inline]
    #[must_use]
    pub const fn new(key: NamespacedKey) -> Self {
        Self(key)
    }

    /// Parses a type key (`iron_ore` or `minecraft:iron_ore`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] for malformed keys.
    pub fn parse(input: &str) -> CoreResult<Self> {
        NamespacedKey::parse(input).map(Self)
    }

    /// The underlying key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &NamespacedKey {
        &self.0
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A concrete block state: a type plus its full property map.
///
/// Properties are kept sorted so that two structurally equal states compare,
/// hash and print identically.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    block_type: BlockType,
    properties: BTreeMap<String, String>,
}

impl BlockState {
    /// A state with no properties.
    #[must_use]
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            properties: BTreeMap::new(),
        }
    }

    /// A state with the given properties.
    #[must_use]
    pub fn with_properties(block_type: BlockType, properties: BTreeMap<String, String>) -> Self {
        Self {
            block_type,
            properties,
        }
    }

    /// Builder-style property setter.
    #[must_use]
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.properties.insert(property.to_owned(), value.to_owned());
        self
    }

    /// Parses `type` or `type[prop=val,...]`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoreError`] if the key is malformed, the brackets are
    /// unbalanced, a property is not `name=value`, or a property repeats.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let (type_part, properties) = split_state_string(input)?;
        Ok(Self::with_properties(BlockType::parse(type_part)?, properties))
    }

    /// The block type.
    #[inline]
    #[must_use]
    pub const fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    /// All properties, sorted by name.
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Value of a single property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block_type)?;
        write_properties(f, &self.properties)
    }
}

/// Writes `[a=1,b=2]`, or nothing for an empty map.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_properties(
    f: &mut fmt::Formatter<'_>,
    properties: &BTreeMap<String, String>,
) -> fmt::Result {
    if properties.is_empty() {
        return Ok(());
    }

    f.write_str("[")?;
    for (i, (name, value)) in properties.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{name}={value}")?;
    }
    f.write_str("]")
}

/// Splits `type[prop=val,...]` into the type part and its property map.
///
/// `type[]` yields an empty map.
///
/// # Errors
///
/// Returns a [`CoreError`] describing the first malformed element.
pub fn split_state_string(input: &str) -> CoreResult<(&str, BTreeMap<String, String>)> {
    let Some(open) = input.find('[') else {
        if input.contains(']') {
            return Err(CoreError::InvalidState(input.to_owned()));
        }
        return Ok((input, BTreeMap::new()));
    };

    let Some(body) = input[open + 1..].strip_suffix(']') else {
        return Err(CoreError::InvalidState(input.to_owned()));
    };

    let mut properties = BTreeMap::new();
    if body.trim().is_empty() {
        return Ok((&input[..open], properties));
    }

    for entry in body.split(',') {
        let Some((name, value)) = entry.split_once('=') else {
            return Err(CoreError::InvalidState(input.to_owned()));
        };

        let (name, value) = (name.trim(), value.trim());
        if !is_property_token(name) || !is_property_token(value) {
            return Err(CoreError::InvalidState(input.to_owned()));
        }

        if properties.insert(name.to_owned(), value.to_owned()).is_some() {
            return Err(CoreError::DuplicateProperty {
                property: name.to_owned(),
                input: input.to_owned(),
            });
        }
    }

    Ok((&input[..open], properties))
}

fn is_property_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

/// A named category of block types (e.g. `#minecraft:logs`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockTag {
    key: NamespacedKey,
    members: BTreeSet<BlockType>,
}

impl BlockTag {
    /// Creates a tag with the given members.
    #[must_use]
    pub fn new(key: NamespacedKey, members: impl IntoIterator<Item = BlockType>) -> Self {
        Self {
            key,
            members: members.into_iter().collect(),
        }
    }

    /// The tag key, without the leading `#`.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &NamespacedKey {
        &self.key
    }

    /// Whether `block_type` belongs to this tag.
    #[inline]
    #[must_use]
    pub fn is_tagged(&self, block_type: &BlockType) -> bool {
        self.members.contains(block_type)
    }

    /// Tagged types in key order.
    pub fn members(&self) -> impl Iterator<Item = &BlockType> {
        self.members.iter()
    }
}
