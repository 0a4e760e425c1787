//! Enemy template loader.

use std::path::Path;

use combat_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::roster::EnemyRoster;

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyFile {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyRoster> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses roster RON. Templates must have a non-empty id and positive HP.
    pub fn parse(content: &str) -> LoadResult<EnemyRoster> {
        let file: EnemyFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        let mut roster = EnemyRoster::new();
        for template in file.enemies {
            if template.id.is_empty() {
                anyhow::bail!("Enemy template with empty id");
            }
            if template.max_hp == 0 {
                anyhow::bail!("Enemy template {} has zero max_hp", template.id);
            }
            let id = template.id.clone();
            if roster.insert(template).is_some() {
                anyhow::bail!("Duplicate enemy id in roster: {}", id);
            }
        }

        Ok(roster)
    }
}
