//! # VeinMiner Configuration
//!
//! The TOML document a server loads at startup and on reload:
//!
//! ```toml
//! default_pattern = "veinminer:default"
//! global_blocks   = ["minecraft:stone"]
//! aliases         = ["minecraft:iron_ore;minecraft:deepslate_iron_ore"]
//!
//! [algorithm]
//! max_vein_size = 64
//! include_edges = false
//! tunnel_radius = 1
//!
//! [categories.pickaxe]
//! items           = ["minecraft:iron_pickaxe", "minecraft:diamond_pickaxe"]
//! priority        = 0
//! blocks          = ["minecraft:coal_ore", "#minecraft:gold_ores"]
//! max_vein_size   = 32
//! disabled_worlds = ["world_nether"]
//! ```
//!
//! Matcher and item strings are kept raw here; they are resolved when the
//! manager is built. A category named `hand` needs no items: it applies
//! when nothing is held.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use veinminer_core::NamespacedKey;
use veinminer_pattern::{TraversalConfig, EXPANSIVE_KEY, MAX_TUNNEL_RADIUS};

use crate::error::{VeinMinerError, VeinMinerResult};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeinMinerConfig {
    /// Pattern used when a player has not chosen one, or chose an unknown one.
    pub default_pattern: NamespacedKey,
    /// Matchers vein-mineable with every tool category.
    pub global_blocks: Vec<String>,
    /// Alias lines: `;`-separated matchers that may be mined together.
    pub aliases: Vec<String>,
    /// Traversal defaults.
    pub algorithm: TraversalConfig,
    /// Tool categories by id.
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl Default for VeinMinerConfig {
    fn default() -> Self {
        Self {
            default_pattern: EXPANSIVE_KEY,
            global_blocks: Vec::new(),
            aliases: Vec::new(),
            algorithm: TraversalConfig::default(),
            categories: BTreeMap::new(),
        }
    }
}

/// One tool category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Item keys of the tools in this category.
    pub items: Vec<String>,
    /// Wins over lower priorities when several categories list the held item.
    pub priority: i32,
    /// Matchers vein-mineable with this category.
    pub blocks: Vec<String>,
    /// Overrides `algorithm.max_vein_size`.
    pub max_vein_size: Option<usize>,
    /// Overrides `algorithm.include_edges`.
    pub include_edges: Option<bool>,
    /// Overrides `algorithm.tunnel_radius`.
    pub tunnel_radius: Option<usize>,
    /// Worlds where this category may not vein mine.
    pub disabled_worlds: BTreeSet<String>,
}

impl CategoryConfig {
    /// The traversal parameters of this category on top of `base`.
    #[must_use]
    pub fn traversal(&self, base: &TraversalConfig) -> TraversalConfig {
        TraversalConfig {
            max_vein_size: self.max_vein_size.unwrap_or(base.max_vein_size),
            include_edges: self.include_edges.unwrap_or(base.include_edges),
            tunnel_radius: self.tunnel_radius.unwrap_or(base.tunnel_radius),
        }
    }
}

impl VeinMinerConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::Parse`] for malformed TOML and
    /// [`VeinMinerError::InvalidConfig`] for values that fail validation.
    pub fn from_toml_str(input: &str) -> VeinMinerResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::Io`] if the file cannot be read, otherwise
    /// as [`VeinMinerConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> VeinMinerResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| VeinMinerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Checks values the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`VeinMinerError::InvalidConfig`] if any vein size cap is 0
    /// or any tunnel radius exceeds [`MAX_TUNNEL_RADIUS`].
    pub fn validate(&self) -> VeinMinerResult<()> {
        validate_traversal("algorithm", &self.algorithm)?;

        for (id, category) in &self.categories {
            validate_traversal(
                &format!("categories.{id}"),
                &category.traversal(&self.algorithm),
            )?;
        }

        Ok(())
    }
}

fn validate_traversal(section: &str, traversal: &TraversalConfig) -> VeinMinerResult<()> {
    if traversal.max_vein_size == 0 {
        return Err(VeinMinerError::InvalidConfig(format!(
            "{section}.max_vein_size must be at least 1"
        )));
    }
    if traversal.tunnel_radius > MAX_TUNNEL_RADIUS {
        return Err(VeinMinerError::InvalidConfig(format!(
            "{section}.tunnel_radius must be at most {MAX_TUNNEL_RADIUS}"
        )));
    }
    Ok(())
}
