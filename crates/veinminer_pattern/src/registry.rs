//! # Pattern Registry
//!
//! Keyed lookup of pattern singletons. Patterns are shared behind `Arc`
//! and hold no per-call state, so one instance serves every allocation.

use std::collections::BTreeMap;
use std::sync::Arc;

use veinminer_core::NamespacedKey;

use crate::pattern::VeinMiningPattern;
use crate::patterns::{
    ExpansivePattern, StaircaseDirection, StaircasePattern, ThoroughPattern, TunnelPattern,
};

/// A shared pattern handle.
pub type SharedPattern = Arc<dyn VeinMiningPattern>;

/// Map from pattern key to pattern.
#[derive(Default, Clone)]
pub struct PatternRegistry {
    patterns: BTreeMap<NamespacedKey, SharedPattern>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in patterns: expansive (default),
    /// thorough, tunnel, staircase up and staircase down.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ExpansivePattern::new()));
        registry.register(Arc::new(ThoroughPattern::new()));
        registry.register(Arc::new(TunnelPattern::new()));
        registry.register(Arc::new(StaircasePattern::new(StaircaseDirection::Up)));
        registry.register(Arc::new(StaircasePattern::new(StaircaseDirection::Down)));
        registry
    }

    /// Registers `pattern` under its own key, returning any pattern it
    /// replaced.
    pub fn register(&mut self, pattern: SharedPattern) -> Option<SharedPattern> {
        self.patterns.insert(pattern.key().clone(), pattern)
    }

    /// Looks up a pattern.
    #[must_use]
    pub fn get(&self, key: &NamespacedKey) -> Option<SharedPattern> {
        self.patterns.get(key).cloned()
    }

    /// Looks up a pattern by its string key (`veinminer:tunnel`).
    ///
    /// Malformed keys simply find nothing.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<SharedPattern> {
        NamespacedKey::parse(key).ok().and_then(|key| self.get(&key))
    }

    /// Looks up a pattern, falling back to `default`.
    #[must_use]
    pub fn get_or_default(&self, key: &NamespacedKey, default: SharedPattern) -> SharedPattern {
        self.get(key).unwrap_or(default)
    }

    /// Removes the pattern registered under `key`.
    pub fn unregister(&mut self, key: &NamespacedKey) -> Option<SharedPattern> {
        self.patterns.remove(key)
    }

    /// Removes every pattern.
    pub fn unregister_all(&mut self) {
        self.patterns.clear();
    }

    /// Registered patterns in key order.
    pub fn patterns(&self) -> impl Iterator<Item = &SharedPattern> {
        self.patterns.values()
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if no pattern is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl std::fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.patterns.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{DummyPattern, EXPANSIVE_KEY, TUNNEL_KEY};

    #[test]
    fn test_defaults_registered_in_key_order() {
        let registry = PatternRegistry::with_defaults();
        let keys: Vec<String> = registry.patterns().map(|p| p.key().to_string()).collect();
        assert_eq!(
            keys,
            [
                "veinminer:default",
                "veinminer:staircase_down",
                "veinminer:staircase_up",
                "veinminer:thorough",
                "veinminer:tunnel",
            ]
        );
    }

    #[test]
    fn test_lookup_by_string() {
        let registry = PatternRegistry::with_defaults();
        assert_eq!(registry.get_str("veinminer:tunnel").unwrap().key(), &TUNNEL_KEY);
        assert!(registry.get_str("veinminer:spiral").is_none());
        assert!(registry.get_str("Not A Key").is_none());
    }

    #[test]
    fn test_get_or_default() {
        let registry = PatternRegistry::with_defaults();
        let fallback: SharedPattern = Arc::new(ExpansivePattern::new());
        let missing = NamespacedKey::veinminer("spiral").unwrap();

        assert_eq!(registry.get_or_default(&missing, fallback).key(), &EXPANSIVE_KEY);
    }

    #[test]
    fn test_register_replaces_and_unregister() {
        let mut registry = PatternRegistry::with_defaults();
        let replaced = registry.register(Arc::new(DummyPattern::new(TUNNEL_KEY)));
        assert!(replaced.is_some());
        assert_eq!(registry.len(), 5);

        assert!(registry.unregister(&TUNNEL_KEY).is_some());
        assert!(registry.get(&TUNNEL_KEY).is_none());

        registry.unregister_all();
        assert!(registry.is_empty());
    }
}
