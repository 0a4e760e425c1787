//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
///
/// Every table and key is optional; anything missing keeps its default.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::StatKind;

    use super::*;

    #[test]
    fn missing_tables_keep_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [balance]
            flee_chance = 75

            [modes.magic]
            base_damage = 12
            stat = "Int"
            mp_cost = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.balance.flee_chance, 75);
        assert_eq!(config.balance.enemy_defend_chance, 50);
        assert_eq!(config.timing, CombatConfig::default().timing);
        assert_eq!(config.modes.magic.base_damage, 12);
        assert_eq!(config.modes.magic.stat, StatKind::Int);
        assert_eq!(config.modes.melee, CombatConfig::default().modes.melee);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), CombatConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ConfigLoader::parse("[timing\nintro = 1").unwrap_err();
        assert!(err.to_string().contains("config TOML"));
    }
}
