//! Data-driven combat content and loaders.
//!
//! This crate houses the static content a battle is built from and provides
//! loaders for the RON/TOML data files:
//! - Combat balance and timing configuration (TOML)
//! - Item catalog with equipment sets (RON)
//! - Enemy templates (RON)
//! - Skill table (RON)
//!
//! A default data set is embedded in the crate and available through
//! [`ContentFactory::bundled`]. All loaders deserialize combat-core types directly.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::EnemyRoster;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, EnemyLoader, ItemLoader, LoadResult, SkillLoader,
};
