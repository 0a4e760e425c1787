//! Content factory for building combat content from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use combat_core::{CombatConfig, ItemCatalog, SkillBook};

use crate::loaders::{ConfigLoader, EnemyLoader, ItemLoader, LoadResult, SkillLoader};
use crate::roster::EnemyRoster;

const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");
const BUNDLED_ITEMS: &str = include_str!("../../data/items.ron");
const BUNDLED_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUNDLED_SKILLS: &str = include_str!("../../data/skills.ron");

/// Everything a host needs to stage a battle.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: CombatConfig,
    pub catalog: Arc<ItemCatalog>,
    pub enemies: EnemyRoster,
    pub skills: SkillBook,
}

/// Content factory that loads all combat content from a data directory,
/// or from the data set embedded in the crate.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── enemies.ron
/// └── skills.ron
/// ```
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Factory over the embedded default data set.
    pub fn bundled() -> Self {
        Self { data_dir: None }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        match &self.data_dir {
            Some(dir) => ConfigLoader::load(&dir.join("config.toml")),
            None => ConfigLoader::parse(BUNDLED_CONFIG),
        }
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        match &self.data_dir {
            Some(dir) => ItemLoader::load(&dir.join("items.ron")),
            None => ItemLoader::parse(BUNDLED_ITEMS),
        }
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyRoster> {
        match &self.data_dir {
            Some(dir) => EnemyLoader::load(&dir.join("enemies.ron")),
            None => EnemyLoader::parse(BUNDLED_ENEMIES),
        }
    }

    /// Load the skill submenu from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillBook> {
        match &self.data_dir {
            Some(dir) => SkillLoader::load(&dir.join("skills.ron")),
            None => SkillLoader::parse(BUNDLED_SKILLS),
        }
    }

    /// Loads every file and cross-checks enemy drops against the catalog.
    ///
    /// A drop with no catalog entry is kept (it will simply fail to enter the
    /// bag) and reported with a warning.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config()?;
        let catalog = self.load_items()?;
        let enemies = self.load_enemies()?;
        let skills = self.load_skills()?;

        for template in enemies.templates() {
            for drop in template.drops.iter().filter(|drop| !catalog.contains(drop)) {
                tracing::warn!(enemy = %template.id, item = %drop, "enemy drop missing from catalog");
            }
        }

        tracing::info!(
            items = catalog.len(),
            enemies = enemies.len(),
            skills = skills.len(),
            source = %self.describe(),
            "content loaded"
        );

        Ok(ContentBundle {
            config,
            catalog: Arc::new(catalog),
            enemies,
            skills,
        })
    }

    /// Returns the data directory path, `None` for the bundled set.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn describe(&self) -> String {
        match &self.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "bundled".to_owned(),
        }
    }
}
