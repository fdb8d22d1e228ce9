//! Namespaced identifiers (`namespace:key`) used for block types, tags and
//! pattern identity.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// Namespace assumed when a key is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespace owned by VeinMiner itself (pattern keys).
pub const VEINMINER_NAMESPACE: &str = "veinminer";

/// A `namespace:key` identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    namespace: Cow<'static, str>,
    key: Cow<'static, str>,
}

impl NamespacedKey {
    /// Creates a key from its two halves.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] if either half is empty or contains
    /// characters outside the allowed set.
    pub fn new(namespace: &str, key: &str) -> CoreResult<Self> {
        if !is_valid_namespace(namespace) || !is_valid_key(key) {
            return Err(CoreError::InvalidKey(format!("{namespace}:{key}")));
        }

        Ok(Self {
            namespace: Cow::Owned(namespace.to_owned()),
            key: Cow::Owned(key.to_owned()),
        })
    }

    /// Creates a key from static parts, validated at compile time when used
    /// in a `const` item.
    ///
    /// # Panics
    ///
    /// Panics if either half is malformed.
    #[must_use]
    pub const fn from_static(namespace: &'static str, key: &'static str) -> Self {
        assert!(is_valid_part(namespace.as_bytes(), false), "malformed namespace");
        assert!(is_valid_part(key.as_bytes(), true), "malformed key");
        Self {
            namespace: Cow::Borrowed(namespace),
            key: Cow::Borrowed(key),
        }
    }

    /// Creates a key in the `minecraft` namespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] if `key` is malformed.
    pub fn minecraft(key: &str) -> CoreResult<Self> {
        Self::new(DEFAULT_NAMESPACE, key)
    }

    /// Creates a key in the `veinminer` namespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] if `key` is malformed.
    pub fn veinminer(key: &str) -> CoreResult<Self> {
        Self::new(VEINMINER_NAMESPACE, key)
    }

    /// Parses `namespace:key` or a bare `key` (defaulting to `minecraft`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] for malformed input.
    pub fn parse(input: &str) -> CoreResult<Self> {
        match input.split_once(':') {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Self::minecraft(input),
        }
    }

    /// The namespace half.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The key half.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    is_valid_part(namespace.as_bytes(), false)
}

fn is_valid_key(key: &str) -> bool {
    is_valid_part(key.as_bytes(), true)
}

const fn is_valid_part(bytes: &[u8], allow_slash: bool) -> bool {
    if bytes.is_empty() {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let legal = b.is_ascii_lowercase()
            || b.is_ascii_digit()
            || matches!(b, b'_' | b'.' | b'-')
            || (allow_slash && b == b'/');
        if !legal {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for NamespacedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NamespacedKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
