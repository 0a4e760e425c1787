//! Content loaders for reading combat data from files.
//!
//! Each loader offers `load(path)` for files on disk and `parse(text)` for
//! content that is already in memory (the bundled data set goes through
//! `parse`).

pub mod config;
pub mod enemy;
pub mod factory;
pub mod item;
pub mod skill;

pub use config::ConfigLoader;
pub use enemy::EnemyLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use skill::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
