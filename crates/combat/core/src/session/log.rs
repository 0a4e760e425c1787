//! Battle log.
//!
//! Entries are structured data: a message key with typed parameters and a
//! display category. Turning them into text is the presentation layer's job.

use crate::action::{ActionError, SkillId};
use crate::state::{ItemEffect, ItemId};

/// Display category of a log entry. Renderers map these to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LogCategory {
    Info,
    PlayerAttack,
    PlayerGuard,
    Recovery,
    EnemyGuard,
    EnemyAttack,
    Victory,
    Reward,
    Alert,
}

/// One battle event with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleMessage {
    WildAppears { enemy: String },
    AttackForDmg { dmg: u32 },
    CritAttackForDmg { dmg: u32 },
    /// `cost` is the MP spent, zero for free skills.
    SkillDealsDmg { skill: SkillId, dmg: u32, cost: u32 },
    CritSkillDealsDmg { skill: SkillId, dmg: u32, cost: u32 },
    DefendStance,
    NotEnoughMp { required: u32, available: u32 },
    NoUsableItems,
    UsedItem { item: ItemId, effect: ItemEffect },
    CannotUseItem { item: ItemId },
    CannotFleeBoss,
    FledSuccess,
    FledFail,
    EnemyDefend { enemy: String },
    EnemyAttacks { enemy: String, dmg: u32 },
    Victory,
    XpGoldReward { xp: u32, gold: u32 },
    Defeated,
}

impl BattleMessage {
    /// Stable localization key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::WildAppears { .. } => "wild_appears",
            Self::AttackForDmg { .. } => "attack_for_dmg",
            Self::CritAttackForDmg { .. } => "crit_attack_for_dmg",
            Self::SkillDealsDmg { .. } => "skill_deals_dmg",
            Self::CritSkillDealsDmg { .. } => "crit_skill_deals_dmg",
            Self::DefendStance => "defend_stance",
            Self::NotEnoughMp { .. } => "not_enough_mp",
            Self::NoUsableItems => "no_usable_items",
            Self::UsedItem { .. } => "used_item_desc",
            Self::CannotUseItem { .. } => "cannot_use_item",
            Self::CannotFleeBoss => "cannot_flee_boss",
            Self::FledSuccess => "fled_success",
            Self::FledFail => "fled_fail",
            Self::EnemyDefend { .. } => "enemy_defend",
            Self::EnemyAttacks { .. } => "enemy_attacks",
            Self::Victory => "victory",
            Self::XpGoldReward { .. } => "xp_gold_reward",
            Self::Defeated => "defeated",
        }
    }

    pub fn category(&self) -> LogCategory {
        match self {
            Self::WildAppears { .. } => LogCategory::Info,
            Self::AttackForDmg { .. }
            | Self::CritAttackForDmg { .. }
            | Self::SkillDealsDmg { .. }
            | Self::CritSkillDealsDmg { .. } => LogCategory::PlayerAttack,
            Self::DefendStance => LogCategory::PlayerGuard,
            Self::UsedItem { .. } | Self::FledSuccess => LogCategory::Recovery,
            Self::EnemyDefend { .. } => LogCategory::EnemyGuard,
            Self::EnemyAttacks { .. } => LogCategory::EnemyAttack,
            Self::Victory => LogCategory::Victory,
            Self::XpGoldReward { .. } => LogCategory::Reward,
            Self::NotEnoughMp { .. }
            | Self::NoUsableItems
            | Self::CannotUseItem { .. }
            | Self::CannotFleeBoss
            | Self::FledFail
            | Self::Defeated => LogCategory::Alert,
        }
    }
}

impl From<&ActionError> for BattleMessage {
    fn from(error: &ActionError) -> Self {
        match error {
            ActionError::InsufficientMana {
                required,
                available,
            } => Self::NotEnoughMp {
                required: *required,
                available: *available,
            },
            ActionError::NoUsableItems => Self::NoUsableItems,
            ActionError::ItemConsumeFailed { item } => Self::CannotUseItem { item: item.clone() },
            ActionError::FleeRefusedBoss => Self::CannotFleeBoss,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub message: BattleMessage,
    pub category: LogCategory,
}

/// Append-only, ordered battle log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message under its own category.
    pub fn push(&mut self, message: BattleMessage) {
        let category = message.category();
        self.entries.push(LogEntry { message, category });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended at or after `index`. Hosts keep a cursor to render new lines.
    pub fn since(&self, index: usize) -> &[LogEntry] {
        self.entries.get(index..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// True if any entry has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.message.key() == key)
    }
}
