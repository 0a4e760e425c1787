//! Skills available from the Skill submenu.

use arrayvec::ArrayVec;

use super::CombatMode;
use crate::config::{CombatConfig, ModeTable};

/// Stable skill identifier (`slash`, `shot`, `magic`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A skill entry. Damage and cost come from the mode table, not the skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDef {
    pub id: SkillId,
    pub mode: CombatMode,
}

impl SkillDef {
    pub fn new(id: impl Into<SkillId>, mode: CombatMode) -> Self {
        Self {
            id: id.into(),
            mode,
        }
    }

    /// MP cost under the given mode table.
    pub fn cost(&self, modes: &ModeTable) -> u32 {
        modes.profile(self.mode).mp_cost
    }
}

/// Ordered list of skills shown in the Skill submenu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBook {
    skills: ArrayVec<SkillDef, { CombatConfig::MAX_SKILLS }>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self {
            skills: ArrayVec::new(),
        }
    }

    /// Slash, Shot and Magic Bolt, one per combat mode.
    pub fn standard() -> Self {
        let mut book = Self::new();
        book.skills.push(SkillDef::new("slash", CombatMode::Melee));
        book.skills.push(SkillDef::new("shot", CombatMode::Ranged));
        book.skills.push(SkillDef::new("magic", CombatMode::Magic));
        book
    }

    /// Adds a skill. Returns false once the book is full.
    pub fn push(&mut self, skill: SkillDef) -> bool {
        self.skills.try_push(skill).is_ok()
    }

    pub fn get(&self, index: usize) -> Option<&SkillDef> {
        self.skills.get(index)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDef> {
        self.skills.iter()
    }
}

impl Default for SkillBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<SkillDef> for SkillBook {
    /// Skills beyond capacity are ignored.
    fn from_iter<I: IntoIterator<Item = SkillDef>>(iter: I) -> Self {
        let mut book = Self::new();
        for skill in iter {
            if !book.push(skill) {
                break;
            }
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_book_covers_every_mode() {
        let book = SkillBook::standard();
        let modes = ModeTable::default();
        assert_eq!(book.len(), 3);
        assert_eq!(book.get(0).map(|s| s.mode), Some(CombatMode::Melee));
        assert_eq!(book.get(2).map(|s| s.cost(&modes)), Some(8));
        assert_eq!(book.get(1).map(|s| s.cost(&modes)), Some(0));
    }

    #[test]
    fn book_caps_at_capacity() {
        let book: SkillBook = (0..20)
            .map(|i| SkillDef::new(SkillId(format!("s{i}")), CombatMode::Melee))
            .collect();
        assert_eq!(book.len(), CombatConfig::MAX_SKILLS);
    }
}
