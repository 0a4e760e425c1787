//! Victory reward settlement.

use super::log::{BattleLog, BattleMessage};
use crate::combatant::{EnemyProfile, Loadout, PlayerProfile, QuestObserver};
use crate::state::ItemId;

/// What a victory granted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardReport {
    pub xp: u32,
    pub gold: u32,
    pub levels_gained: u32,
    /// Player level after the XP grant.
    pub new_level: u32,
    /// Drops that entered the bag.
    pub collected: Vec<ItemId>,
    /// Drops that did not fit and were lost.
    pub lost: Vec<ItemId>,
}

impl RewardReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

pub struct RewardSettlement;

impl RewardSettlement {
    /// Grants XP, gold and drops from a defeated enemy.
    ///
    /// Each drop is inserted individually. A drop that does not fit is lost
    /// and reported. Quests hear about the kill and every collected drop.
    pub fn settle<P, E>(
        player: &mut P,
        enemy: &E,
        mut quests: Option<&mut (dyn QuestObserver + '_)>,
        log: &mut BattleLog,
    ) -> RewardReport
    where
        P: PlayerProfile + ?Sized,
        E: EnemyProfile + ?Sized,
    {
        let xp = enemy.xp_reward();
        let gold = enemy.gold_reward();
        let levels_gained = player.add_xp(xp);
        player.add_gold(gold);
        log.push(BattleMessage::XpGoldReward { xp, gold });

        if let Some(quests) = quests.as_deref_mut() {
            quests.on_enemy_kill(enemy.kind());
        }

        let mut collected = Vec::new();
        let mut lost = Vec::new();
        for item in enemy.drops() {
            if player.loadout_mut().add_item(item) {
                if let Some(quests) = quests.as_deref_mut() {
                    quests.on_collect(item);
                }
                collected.push(item.clone());
            } else {
                tracing::warn!(item = %item, enemy = enemy.kind(), "drop lost: bag full");
                lost.push(item.clone());
            }
        }

        let report = RewardReport {
            xp,
            gold,
            levels_gained,
            new_level: player.stats().level,
            collected,
            lost,
        };
        tracing::info!(
            xp = report.xp,
            gold = report.gold,
            levels = report.levels_gained,
            collected = report.collected.len(),
            lost = report.lost.len(),
            "rewards settled"
        );
        report
    }
}
