//! Item catalog loader.

use std::path::Path;

use combat_core::{ItemCatalog, ItemDefinition, ItemSet};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFile {
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub sets: Vec<ItemSet>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses catalog RON. Duplicate item ids are rejected; set references
    /// to unknown items only produce a warning.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut catalog = ItemCatalog::new();
        for item in file.items {
            if catalog.contains(&item.id) {
                anyhow::bail!("Duplicate item id in catalog: {}", item.id);
            }
            catalog.insert(item);
        }

        for set in file.sets {
            for piece in set.pieces.iter().filter(|piece| !catalog.contains(piece)) {
                tracing::warn!(set = %set.id, item = %piece, "set piece missing from catalog");
            }
            catalog.insert_set(set);
        }

        for item in catalog.items() {
            if let Some(set) = &item.set
                && catalog.set(set).is_none()
            {
                tracing::warn!(item = %item.id, set = %set, "item names an unknown set");
            }
        }

        Ok(catalog)
    }
}
