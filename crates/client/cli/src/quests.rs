//! Kill and collection tallies fed by the combat session.
use std::collections::BTreeMap;

use combat_core::{ItemId, QuestObserver};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuestLog {
    kills: BTreeMap<String, u32>,
    collected: BTreeMap<ItemId, u32>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kills(&self, kind: &str) -> u32 {
        self.kills.get(kind).copied().unwrap_or(0)
    }

    pub fn collected(&self, item: &ItemId) -> u32 {
        self.collected.get(item).copied().unwrap_or(0)
    }

    pub fn total_kills(&self) -> u32 {
        self.kills.values().sum()
    }
}

impl QuestObserver for QuestLog {
    fn on_enemy_kill(&mut self, kind: &str) {
        *self.kills.entry(kind.to_owned()).or_default() += 1;
        tracing::debug!(kind, total = self.kills(kind), "quest kill recorded");
    }

    fn on_collect(&mut self, item: &ItemId) {
        *self.collected.entry(item.clone()).or_default() += 1;
        tracing::debug!(item = %item, total = self.collected(item), "quest item recorded");
    }
}
