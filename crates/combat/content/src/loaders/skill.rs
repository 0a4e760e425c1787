//! Skill table loader.

use std::path::Path;

use combat_core::{CombatConfig, SkillBook, SkillDef};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillFile {
    pub skills: Vec<SkillDef>,
}

/// Loader for the skill submenu from RON files.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillBook> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses the skill table in menu order. An empty table is an error;
    /// entries past the book's capacity are dropped with a warning.
    pub fn parse(content: &str) -> LoadResult<SkillBook> {
        let file: SkillFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill table RON: {}", e))?;

        if file.skills.is_empty() {
            anyhow::bail!("Skill table is empty");
        }
        if file.skills.len() > CombatConfig::MAX_SKILLS {
            tracing::warn!(
                count = file.skills.len(),
                capacity = CombatConfig::MAX_SKILLS,
                "skill table exceeds capacity, extra entries dropped"
            );
        }

        Ok(file.skills.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use combat_core::CombatMode;

    use super::*;

    #[test]
    fn keeps_menu_order() {
        let book = SkillLoader::parse(
            r#"(skills: [(id: "magic", mode: Magic), (id: "slash", mode: Melee)])"#,
        )
        .unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(0).map(|s| s.mode), Some(CombatMode::Magic));
        assert_eq!(book.get(1).map(|s| s.id.0.as_str()), Some("slash"));
    }

    #[test]
    fn overflow_is_truncated() {
        let entries: Vec<String> = (0..10)
            .map(|i| format!("(id: \"s{i}\", mode: Ranged)"))
            .collect();
        let book = SkillLoader::parse(&format!("(skills: [{}])", entries.join(","))).unwrap();
        assert_eq!(book.len(), CombatConfig::MAX_SKILLS);
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(SkillLoader::parse("(skills: [])").is_err());
    }
}
