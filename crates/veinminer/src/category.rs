//! Tool categories: the tools a player may hold, the blocks those tools vein
//! mine, and the traversal settings they use.
//!
//! Ids are case-insensitive and stored lower-case. The [`HAND_CATEGORY_ID`]
//! category holds no items and applies when the player's hand is empty.

use std::collections::BTreeSet;

use veinminer_core::{BlockRegistry, BlockState, NamespacedKey};
use veinminer_matching::{log_diagnostic, BlockMatchSet};
use veinminer_pattern::TraversalConfig;

use crate::config::CategoryConfig;

/// Id of the empty-hand category.
pub const HAND_CATEGORY_ID: &str = "hand";

/// The item key an empty hand reports.
pub const AIR: NamespacedKey = NamespacedKey::from_static("minecraft", "air");

/// A resolved tool category.
#[derive(Debug, Clone)]
pub struct ToolCategory {
    id: String,
    priority: i32,
    items: BTreeSet<NamespacedKey>,
    blocks: BlockMatchSet,
    traversal: TraversalConfig,
    disabled_worlds: BTreeSet<String>,
}

impl ToolCategory {
    /// Creates a category holding no items. `id` is lower-cased.
    #[must_use]
    pub fn new(id: &str, blocks: BlockMatchSet, traversal: TraversalConfig) -> Self {
        let id = id.to_lowercase();
        let priority = if id == HAND_CATEGORY_ID { i32::MAX } else { 0 };
        Self {
            id,
            priority,
            items: BTreeSet::new(),
            blocks,
            traversal,
            disabled_worlds: BTreeSet::new(),
        }
    }

    /// Resolves a category from configuration.
    ///
    /// Bad block lines and unparsable item keys are logged and skipped.
    #[must_use]
    pub fn from_config(
        id: &str,
        config: &CategoryConfig,
        base: &TraversalConfig,
        registry: &dyn BlockRegistry,
    ) -> Self {
        let blocks = BlockMatchSet::parse_lines(&config.blocks, registry, log_diagnostic);
        let mut category = Self::new(id, blocks, config.traversal(base));

        if !category.is_hand() {
            category.priority = config.priority;
            for item in &config.items {
                match NamespacedKey::parse(item.trim()) {
                    Ok(key) => {
                        category.items.insert(key);
                    }
                    Err(_) => tracing::warn!(
                        "Unknown item \"{}\" in category \"{}\"",
                        item,
                        category.id
                    ),
                }
            }
        }
        category.disabled_worlds.clone_from(&config.disabled_worlds);
        category
    }

    /// Adds a tool item. The hand category never holds items.
    #[must_use]
    pub fn with_item(mut self, item: NamespacedKey) -> Self {
        if !self.is_hand() {
            self.items.insert(item);
        }
        self
    }

    /// Sets the priority. The hand category keeps `i32::MAX`.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        if !self.is_hand() {
            self.priority = priority;
        }
        self
    }

    /// Disables vein mining for this category in `world`.
    #[must_use]
    pub fn with_disabled_world(mut self, world: impl Into<String>) -> Self {
        self.disabled_worlds.insert(world.into());
        self
    }

    /// Lower-case category id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this is the empty-hand category.
    #[must_use]
    pub fn is_hand(&self) -> bool {
        self.id == HAND_CATEGORY_ID
    }

    /// Higher priorities win when several categories hold the same item.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Tool items of this category.
    pub fn items(&self) -> impl Iterator<Item = &NamespacedKey> {
        self.items.iter()
    }

    /// Whether `item` activates this category. The hand category accepts
    /// only air.
    #[must_use]
    pub fn contains_item(&self, item: &NamespacedKey) -> bool {
        if self.is_hand() {
            *item == AIR
        } else {
            self.items.contains(item)
        }
    }

    /// The category's own block list.
    #[must_use]
    pub const fn blocks(&self) -> &BlockMatchSet {
        &self.blocks
    }

    /// Traversal parameters for this category.
    #[must_use]
    pub const fn traversal(&self) -> &TraversalConfig {
        &self.traversal
    }

    /// Whether vein mining is disabled in `world`.
    #[must_use]
    pub fn is_disabled_in(&self, world: &str) -> bool {
        self.disabled_worlds.contains(world)
    }

    /// Whether the category's own list holds `state`.
    #[must_use]
    pub fn contains_state(&self, state: &BlockState) -> bool {
        self.blocks.contains_state(state, false)
    }
}
