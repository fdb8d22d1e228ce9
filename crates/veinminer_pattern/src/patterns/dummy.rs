//! A pattern that allocates nothing.
//!
//! Holds a registry slot for a key that is known (e.g. from a client's
//! stored preference) but has no traversal behind it.

use veinminer_core::{AccessResult, BlockAccessor, BlockPosition, NamespacedKey};

use crate::pattern::{AllocationRequest, VeinMiningPattern};

/// A keyed no-op pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyPattern {
    key: NamespacedKey,
    permission: Option<String>,
}

impl DummyPattern {
    /// Creates a dummy pattern for `key`.
    #[must_use]
    pub const fn new(key: NamespacedKey) -> Self {
        Self {
            key,
            permission: None,
        }
    }

    /// Attaches a permission node.
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }
}

impl VeinMiningPattern for DummyPattern {
    fn key(&self) -> &NamespacedKey {
        &self.key
    }

    fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    fn allocate(
        &self,
        _accessor: &dyn BlockAccessor,
        _request: &AllocationRequest<'_>,
    ) -> AccessResult<Vec<BlockPosition>> {
        Ok(Vec::new())
    }
}
