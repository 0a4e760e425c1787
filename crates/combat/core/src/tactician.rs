//! Enemy decision rule.
//!
//! One branch point per enemy turn: a badly hurt enemy may brace instead of
//! attacking. There is no targeting and no skill selection.

use crate::config::BalanceConfig;
use crate::env::RngOracle;
use crate::stats::CombatantStats;

/// What the enemy does this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EnemyIntent {
    Defend,
    Attack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyTactician;

impl EnemyTactician {
    /// True when HP is strictly below the low-HP threshold.
    pub fn is_low_hp(stats: &CombatantStats, balance: &BalanceConfig) -> bool {
        u64::from(stats.hp) * 100 < u64::from(stats.max_hp) * u64::from(balance.enemy_low_hp_threshold)
    }

    /// Decide the enemy's move.
    ///
    /// A random draw is consumed only when the enemy is below the threshold.
    pub fn decide(
        stats: &CombatantStats,
        balance: &BalanceConfig,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> EnemyIntent {
        let intent = if Self::is_low_hp(stats, balance)
            && rng.chance_percent(balance.enemy_defend_chance)
        {
            EnemyIntent::Defend
        } else {
            EnemyIntent::Attack
        };

        tracing::debug!(
            hp = stats.hp,
            max_hp = stats.max_hp,
            intent = %intent,
            "enemy tactician decided"
        );
        intent
    }
}
