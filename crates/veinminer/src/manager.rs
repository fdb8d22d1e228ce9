//! # VeinMiner Manager
//!
//! Everything a server knows about which blocks may be vein mined:
//! - the global block list, shared by every category
//! - the tool categories, their tool items and their own lists
//! - the alias groups
//!
//! A manager is always rebuilt wholesale from a [`VeinMinerConfig`]; there
//! is no incremental diffing.

use std::collections::BTreeMap;

use veinminer_core::{BlockRegistry, BlockState, NamespacedKey};
use veinminer_matching::{log_diagnostic, AliasResolver, BlockMatchSet, BlockMatcher};

use crate::category::{ToolCategory, HAND_CATEGORY_ID};
use crate::config::VeinMinerConfig;
use crate::error::{VeinMinerError, VeinMinerResult};

/// Counts reported after a reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    /// Matchers in the global list.
    pub global_blocks: usize,
    /// Tool categories.
    pub categories: usize,
    /// Alias groups.
    pub aliases: usize,
}

/// Block lists, categories and aliases.
#[derive(Debug, Clone)]
pub struct VeinMinerManager {
    global: BlockMatchSet,
    categories: BTreeMap<String, ToolCategory>,
    aliases: AliasResolver,
    default_pattern: NamespacedKey,
}

impl Default for VeinMinerManager {
    fn default() -> Self {
        Self {
            global: BlockMatchSet::new(),
            categories: BTreeMap::new(),
            aliases: AliasResolver::new(),
            default_pattern: veinminer_pattern::EXPANSIVE_KEY,
        }
    }
}

impl VeinMinerManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a manager from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::InvalidConfig`] if validation fails.
    pub fn from_config(
        config: &VeinMinerConfig,
        registry: &dyn BlockRegistry,
    ) -> VeinMinerResult<Self> {
        let mut manager = Self::new();
        manager.reload(config, registry)?;
        Ok(manager)
    }

    /// Clears everything and repopulates from `config`.
    ///
    /// Bad matcher lines and bad alias lines are logged and skipped. On a
    /// validation error the manager is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::InvalidConfig`] if validation fails.
    pub fn reload(
        &mut self,
        config: &VeinMinerConfig,
        registry: &dyn BlockRegistry,
    ) -> VeinMinerResult<ReloadSummary> {
        config.validate()?;

        self.global = BlockMatchSet::parse_lines(&config.global_blocks, registry, log_diagnostic);

        self.categories.clear();
        for (id, category) in &config.categories {
            if id.contains(' ') {
                tracing::warn!("Category id \"{}\" is invalid. Must not contain spaces", id);
                continue;
            }

            let category = ToolCategory::from_config(id, category, &config.algorithm, registry);
            if !category.is_hand() && category.items().next().is_none() {
                tracing::warn!("Category \"{}\" has no items. Ignoring registration", id);
                continue;
            }
            if category.blocks().is_empty() {
                tracing::warn!("No block list configured for category \"{}\"", id);
            }
            self.add_category(category);
        }

        self.aliases.clear();
        for line in &config.aliases {
            if let Some(group) = parse_alias_line(line, registry) {
                if !self.aliases.add_group(group) {
                    tracing::warn!("Duplicate alias: \"{}\"", line);
                }
            }
        }

        self.default_pattern = config.default_pattern.clone();

        let summary = ReloadSummary {
            global_blocks: self.global.len(),
            categories: self.categories.len(),
            aliases: self.aliases.len(),
        };
        tracing::info!(
            "Loaded {} global blocks and {} categories. Added {} aliases",
            summary.global_blocks,
            summary.categories,
            summary.aliases
        );
        Ok(summary)
    }

    /// Adds a category, replacing one with the same id.
    pub fn add_category(&mut self, category: ToolCategory) -> Option<ToolCategory> {
        self.categories.insert(category.id().to_owned(), category)
    }

    /// Removes a category by case-insensitive id.
    pub fn remove_category(&mut self, id: &str) -> Option<ToolCategory> {
        self.categories.remove(&id.to_lowercase())
    }

    /// Looks up a category by case-insensitive id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&ToolCategory> {
        self.categories.get(&id.to_lowercase())
    }

    /// The empty-hand category, if configured.
    #[must_use]
    pub fn hand_category(&self) -> Option<&ToolCategory> {
        self.categories.get(HAND_CATEGORY_ID)
    }

    /// The category activated by holding `item`.
    ///
    /// Among categories listing the item the highest priority wins; ties go
    /// to the lowest id. Air selects the hand category.
    #[must_use]
    pub fn category_for_item(&self, item: &NamespacedKey) -> Option<&ToolCategory> {
        let mut result: Option<&ToolCategory> = None;
        for category in self.categories.values() {
            if !category.contains_item(item) {
                continue;
            }
            if result.is_some_and(|current| current.priority() >= category.priority()) {
                continue;
            }
            result = Some(category);
        }
        result
    }

    /// Looks up a category, failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::UnknownCategory`].
    pub fn require_category(&self, id: &str) -> VeinMinerResult<&ToolCategory> {
        self.category(id)
            .ok_or_else(|| VeinMinerError::UnknownCategory(id.to_owned()))
    }

    /// Categories in id order.
    pub fn categories(&self) -> impl Iterator<Item = &ToolCategory> {
        self.categories.values()
    }

    /// The global block list.
    #[must_use]
    pub const fn global_blocks(&self) -> &BlockMatchSet {
        &self.global
    }

    /// Mutable access to the global block list.
    pub fn global_blocks_mut(&mut self) -> &mut BlockMatchSet {
        &mut self.global
    }

    /// The alias groups.
    #[must_use]
    pub const fn aliases(&self) -> &AliasResolver {
        &self.aliases
    }

    /// Mutable access to the alias groups.
    pub fn aliases_mut(&mut self) -> &mut AliasResolver {
        &mut self.aliases
    }

    /// Pattern used when none or an unknown one is requested.
    #[must_use]
    pub const fn default_pattern(&self) -> &NamespacedKey {
        &self.default_pattern
    }

    /// Whether `state` may be vein mined with `category`.
    #[must_use]
    pub fn is_vein_mineable(&self, category: &ToolCategory, state: &BlockState) -> bool {
        self.global.contains_state(state, false) || category.contains_state(state)
    }

    /// The matcher that made `state` vein-mineable, global list first.
    #[must_use]
    pub fn matcher_for<'a>(
        &'a self,
        category: &'a ToolCategory,
        state: &BlockState,
    ) -> Option<&'a BlockMatcher> {
        self.global
            .matcher_for(state)
            .or_else(|| category.blocks().matcher_for(state))
    }

    /// The alias group holding `matcher`, if any.
    #[must_use]
    pub fn alias_group_for(&self, matcher: &BlockMatcher) -> Option<&BlockMatchSet> {
        self.aliases.group_for_matcher(matcher)
    }
}

/// Parses one `;`-separated alias line.
///
/// A line needs at least two entries, unless its one entry is a tag.
fn parse_alias_line(line: &str, registry: &dyn BlockRegistry) -> Option<BlockMatchSet> {
    let entries: Vec<&str> = line
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    let lone_tag = entries.len() == 1 && entries[0].starts_with('#');
    if entries.len() < 2 && !lone_tag {
        tracing::warn!("Alias \"{}\" needs at least two entries or a tag", line);
        return None;
    }

    let group = BlockMatchSet::parse_lines(entries, registry, log_diagnostic);
    if group.is_empty() {
        tracing::warn!("Alias \"{}\" has no valid entries", line);
        return None;
    }
    Some(group)
}
