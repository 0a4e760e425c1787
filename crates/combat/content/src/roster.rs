//! Enemy template registry.

use std::collections::BTreeMap;

use combat_core::{EnemyState, EnemyTemplate};

/// Every enemy template known to the game, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyRoster {
    templates: BTreeMap<String, EnemyTemplate>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a template. Returns the one it replaced.
    pub fn insert(&mut self, template: EnemyTemplate) -> Option<EnemyTemplate> {
        self.templates.insert(template.id.clone(), template)
    }

    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.get(id)
    }

    /// Builds a fresh enemy from the named template.
    pub fn spawn(&self, id: &str) -> Option<EnemyState> {
        self.get(id).map(EnemyState::from_template)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn templates(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<EnemyTemplate> for EnemyRoster {
    fn from_iter<I: IntoIterator<Item = EnemyTemplate>>(iter: I) -> Self {
        let mut roster = Self::new();
        for template in iter {
            roster.insert(template);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: &str, max_hp: u32) -> EnemyTemplate {
        EnemyTemplate {
            id: id.into(),
            max_hp,
            str: 1,
            dex: 1,
            int: 0,
            def: 0,
            atk_damage: 3,
            xp_reward: 10,
            gold_reward: 5,
            drops: Vec::new(),
            is_boss: false,
        }
    }

    #[test]
    fn spawn_builds_a_full_health_enemy() {
        let roster: EnemyRoster = [template("goblin", 12), template("wolf", 20)]
            .into_iter()
            .collect();

        let wolf = roster.spawn("wolf").unwrap();
        assert_eq!(wolf.kind, "wolf");
        assert_eq!(wolf.stats.hp, 20);
        assert!(roster.spawn("dragon").is_none());
        assert_eq!(roster.ids().collect::<Vec<_>>(), ["goblin", "wolf"]);
    }

    #[test]
    fn later_template_replaces_earlier() {
        let mut roster = EnemyRoster::new();
        assert!(roster.insert(template("orc", 25)).is_none());
        let replaced = roster.insert(template("orc", 30));
        assert_eq!(replaced.map(|t| t.max_hp), Some(25));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("orc").map(|t| t.max_hp), Some(30));
    }
}
