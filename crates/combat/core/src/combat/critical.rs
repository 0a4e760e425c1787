//! Critical hit chance and multiplier.

use crate::config::BalanceConfig;
use crate::env::RngOracle;

/// Probability of a critical hit for the given DEX, clamped to `[0.05, 1.0]`
/// under default balance.
pub fn crit_probability(dex: u32, balance: &BalanceConfig) -> f64 {
    let percent = f64::from(balance.crit_base) + f64::from(dex) * f64::from(balance.crit_per_dex);
    (percent / 100.0).min(1.0)
}

/// Roll a critical hit: one uniform draw compared against [`crit_probability`].
pub fn roll_critical(
    dex: u32,
    balance: &BalanceConfig,
    rng: &mut (impl RngOracle + ?Sized),
) -> bool {
    rng.chance(crit_probability(dex, balance))
}

/// Critical hits deal 1.5x damage, truncated.
#[inline]
pub fn apply_critical(damage: u32) -> u32 {
    damage.saturating_mul(3) / 2
}
