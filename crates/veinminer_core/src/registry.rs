//! The block catalogue consulted when parsing matcher strings.
//!
//! The host game owns the real catalogue; [`SimpleBlockRegistry`] is an
//! in-memory one for tools, tests and headless servers.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::block::{BlockTag, BlockType};
use crate::key::NamespacedKey;

/// Read-only view of the known block types and tags.
pub trait BlockRegistry {
    /// Whether `block_type` names a real block.
    fn is_block(&self, block_type: &BlockType) -> bool;

    /// Resolves a tag by key (without the leading `#`).
    fn tag(&self, key: &NamespacedKey) -> Option<Arc<BlockTag>>;
}

/// An in-memory [`BlockRegistry`].
#[derive(Debug, Default, Clone)]
pub struct SimpleBlockRegistry {
    blocks: BTreeSet<BlockType>,
    tags: BTreeMap<NamespacedKey, Arc<BlockTag>>,
}

impl SimpleBlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block type. Returns false if it was already known.
    pub fn register_block(&mut self, block_type: BlockType) -> bool {
        self.blocks.insert(block_type)
    }

    /// Registers a tag, replacing any tag with the same key.
    ///
    /// Members are registered as blocks too.
    pub fn register_tag(&mut self, tag: BlockTag) {
        for member in tag.members() {
            self.blocks.insert(member.clone());
        }
        self.tags.insert(tag.key().clone(), Arc::new(tag));
    }

    /// Builder-style [`SimpleBlockRegistry::register_block`].
    #[must_use]
    pub fn with_block(mut self, block_type: BlockType) -> Self {
        self.register_block(block_type);
        self
    }

    /// Builder-style [`SimpleBlockRegistry::register_tag`].
    #[must_use]
    pub fn with_tag(mut self, tag: BlockTag) -> Self {
        self.register_tag(tag);
        self
    }

    /// Number of known block types.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl BlockRegistry for SimpleBlockRegistry {
    fn is_block(&self, block_type: &BlockType) -> bool {
        self.blocks.contains(block_type)
    }

    fn tag(&self, key: &NamespacedKey) -> Option<Arc<BlockTag>> {
        self.tags.get(key).cloned()
    }
}
