//! # VeinMiner Service
//!
//! The thread-safe entry point a server holds for its whole lifetime.
//!
//! ## Locking
//!
//! ```text
//! vein_mine:  manager.read ─┬─ patterns.read (clone Arc, release)
//!                           └─ allocate
//! reload:     build new manager (no lock) ── manager.write (swap)
//! ```
//!
//! The manager lock is always taken before the pattern lock.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use veinminer_core::{BlockAccessor, BlockFace, BlockPosition, BlockRegistry, NamespacedKey};
use veinminer_pattern::{
    AllocationRequest, ExpansivePattern, PatternRegistry, SharedPattern,
};

use crate::category::ToolCategory;
use crate::config::VeinMinerConfig;
use crate::error::VeinMinerResult;
use crate::manager::{ReloadSummary, VeinMinerManager};

/// Vein mining state shared between threads.
pub struct VeinMiner {
    manager: RwLock<VeinMinerManager>,
    patterns: RwLock<PatternRegistry>,
}

impl VeinMiner {
    /// Wraps an existing manager and pattern registry.
    #[must_use]
    pub fn new(manager: VeinMinerManager, patterns: PatternRegistry) -> Self {
        Self {
            manager: RwLock::new(manager),
            patterns: RwLock::new(patterns),
        }
    }

    /// Builds the service from configuration with the built-in patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(
        config: &VeinMinerConfig,
        registry: &dyn BlockRegistry,
    ) -> VeinMinerResult<Self> {
        let manager = VeinMinerManager::from_config(config, registry)?;
        Ok(Self::new(manager, PatternRegistry::with_defaults()))
    }

    /// Rebuilds the manager from `config` and swaps it in.
    ///
    /// Allocations running during the rebuild keep the old manager. On error
    /// the old manager stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn reload(
        &self,
        config: &VeinMinerConfig,
        registry: &dyn BlockRegistry,
    ) -> VeinMinerResult<ReloadSummary> {
        let mut manager = VeinMinerManager::new();
        let summary = manager.reload(config, registry)?;
        *self.manager.write() = manager;
        Ok(summary)
    }

    /// Registers a pattern, returning any pattern it replaced.
    pub fn register_pattern(&self, pattern: SharedPattern) -> Option<SharedPattern> {
        tracing::debug!("Registered pattern {}", pattern.key());
        self.patterns.write().register(pattern)
    }

    /// Looks up a registered pattern.
    #[must_use]
    pub fn pattern(&self, key: &NamespacedKey) -> Option<SharedPattern> {
        self.patterns.read().get(key)
    }

    /// Runs `f` with read access to the manager.
    pub fn with_manager<R>(&self, f: impl FnOnce(&VeinMinerManager) -> R) -> R {
        f(&self.manager.read())
    }

    /// Computes the blocks to break alongside `origin`.
    ///
    /// Returns an empty list when the origin is not vein-mineable with
    /// `category`, or when `category` is disabled in `world`. An unknown or
    /// missing `pattern_key` falls back to the configured default, then to the
    /// expansive pattern. The origin never appears in the result.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::UnknownCategory`](crate::VeinMinerError::UnknownCategory)
    /// for an unknown category and [`VeinMinerError::Access`](crate::VeinMinerError::Access)
    /// when the world cannot be read.
    pub fn vein_mine(
        &self,
        accessor: &dyn BlockAccessor,
        world: &str,
        category: &str,
        pattern_key: Option<&NamespacedKey>,
        origin: BlockPosition,
        face: BlockFace,
    ) -> VeinMinerResult<Vec<BlockPosition>> {
        self.allocate(accessor, world, pattern_key, origin, face, |manager| {
            manager.require_category(category).map(Some)
        })
    }

    /// As [`VeinMiner::vein_mine`], with the category chosen from the held
    /// `item`. Holding a tool no category lists yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::Access`](crate::VeinMinerError::Access) when
    /// the world cannot be read.
    pub fn vein_mine_with_item(
        &self,
        accessor: &dyn BlockAccessor,
        world: &str,
        item: &NamespacedKey,
        pattern_key: Option<&NamespacedKey>,
        origin: BlockPosition,
        face: BlockFace,
    ) -> VeinMinerResult<Vec<BlockPosition>> {
        self.allocate(accessor, world, pattern_key, origin, face, |manager| {
            Ok(manager.category_for_item(item))
        })
    }

    fn allocate<F>(
        &self,
        accessor: &dyn BlockAccessor,
        world: &str,
        pattern_key: Option<&NamespacedKey>,
        origin: BlockPosition,
        face: BlockFace,
        select: F,
    ) -> VeinMinerResult<Vec<BlockPosition>>
    where
        F: FnOnce(&VeinMinerManager) -> VeinMinerResult<Option<&ToolCategory>>,
    {
        let manager = self.manager.read();
        let Some(category) = select(&*manager)? else {
            return Ok(Vec::new());
        };

        if category.is_disabled_in(world) {
            tracing::trace!("Category {} is disabled in {}", category.id(), world);
            return Ok(Vec::new());
        }

        let origin_state = accessor.block_state(origin)?;
        let Some(matcher) = manager.matcher_for(category, &origin_state) else {
            return Ok(Vec::new());
        };
        let aliases = manager.alias_group_for(matcher);

        let pattern = self.resolve_pattern(pattern_key, manager.default_pattern());
        let request = AllocationRequest::new(origin, face, matcher, category.traversal())
            .with_aliases(aliases);

        let mut positions = pattern.allocate(accessor, &request)?;

        let mut seen = HashSet::with_capacity(positions.len());
        positions.retain(|&position| position != origin && seen.insert(position));
        Ok(positions)
    }

    fn resolve_pattern(
        &self,
        requested: Option<&NamespacedKey>,
        default: &NamespacedKey,
    ) -> SharedPattern {
        let patterns = self.patterns.read();
        if let Some(pattern) = requested.and_then(|key| patterns.get(key)) {
            return pattern;
        }
        if let Some(key) = requested {
            tracing::debug!("Unknown pattern {}, using {}", key, default);
        }
        patterns
            .get(default)
            .unwrap_or_else(|| Arc::new(ExpansivePattern::new()))
    }
}

impl std::fmt::Debug for VeinMiner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VeinMiner")
            .field("manager", &*self.manager.read())
            .field("patterns", &self.patterns.read().len())
            .finish()
    }
}
