//! Combat configuration constants and tunable parameters.

use crate::action::CombatMode;
use crate::stats::StatKind;

/// Phase timers, all measured in host ticks (frames at 60 Hz).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    pub intro: u32,
    pub attack: u32,
    pub skill: u32,
    pub defend: u32,
    pub item: u32,
    pub flee_fail: u32,
    pub flee_success: u32,
    pub enemy: u32,
    pub hit_flash: u32,
}

impl TimingConfig {
    pub const DEFAULT_INTRO: u32 = 60;
    pub const DEFAULT_ATTACK: u32 = 30;
    pub const DEFAULT_SKILL: u32 = 30;
    pub const DEFAULT_DEFEND: u32 = 20;
    pub const DEFAULT_ITEM: u32 = 20;
    pub const DEFAULT_FLEE_FAIL: u32 = 20;
    pub const DEFAULT_FLEE_SUCCESS: u32 = 40;
    pub const DEFAULT_ENEMY: u32 = 30;
    pub const DEFAULT_HIT_FLASH: u32 = 15;

    pub fn new() -> Self {
        Self {
            intro: Self::DEFAULT_INTRO,
            attack: Self::DEFAULT_ATTACK,
            skill: Self::DEFAULT_SKILL,
            defend: Self::DEFAULT_DEFEND,
            item: Self::DEFAULT_ITEM,
            flee_fail: Self::DEFAULT_FLEE_FAIL,
            flee_success: Self::DEFAULT_FLEE_SUCCESS,
            enemy: Self::DEFAULT_ENEMY,
            hit_flash: Self::DEFAULT_HIT_FLASH,
        }
    }

    /// Every timer set to one tick. Useful for headless runs and tests.
    pub fn instant() -> Self {
        Self {
            intro: 1,
            attack: 1,
            skill: 1,
            defend: 1,
            item: 1,
            flee_fail: 1,
            flee_success: 1,
            enemy: 1,
            hit_flash: 1,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Probability knobs, expressed as whole percentages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceConfig {
    /// Chance that a flee attempt against a non-boss succeeds.
    pub flee_chance: u32,
    /// Enemy HP percentage below which it considers defending.
    pub enemy_low_hp_threshold: u32,
    /// Chance that a low-HP enemy defends instead of attacking.
    pub enemy_defend_chance: u32,
    /// Multiplier applied to the governing stat (and its equipment bonus).
    pub stat_scaling: u32,
    /// Base critical chance in percent, before DEX.
    pub crit_base: u32,
    /// Critical chance gained per point of DEX, in percent.
    pub crit_per_dex: u32,
}

impl BalanceConfig {
    pub const DEFAULT_FLEE_CHANCE: u32 = 50;
    pub const DEFAULT_ENEMY_LOW_HP_THRESHOLD: u32 = 30;
    pub const DEFAULT_ENEMY_DEFEND_CHANCE: u32 = 50;
    pub const DEFAULT_STAT_SCALING: u32 = 2;
    pub const DEFAULT_CRIT_BASE: u32 = 5;
    pub const DEFAULT_CRIT_PER_DEX: u32 = 1;

    pub fn new() -> Self {
        Self {
            flee_chance: Self::DEFAULT_FLEE_CHANCE,
            enemy_low_hp_threshold: Self::DEFAULT_ENEMY_LOW_HP_THRESHOLD,
            enemy_defend_chance: Self::DEFAULT_ENEMY_DEFEND_CHANCE,
            stat_scaling: Self::DEFAULT_STAT_SCALING,
            crit_base: Self::DEFAULT_CRIT_BASE,
            crit_per_dex: Self::DEFAULT_CRIT_PER_DEX,
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Damage profile of a single combat mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeProfile {
    pub base_damage: u32,
    /// Stat whose value (plus equipment bonus) scales the hit.
    pub stat: StatKind,
    /// MP spent per use. Zero for free modes.
    pub mp_cost: u32,
}

impl ModeProfile {
    pub const fn new(base_damage: u32, stat: StatKind, mp_cost: u32) -> Self {
        Self {
            base_damage,
            stat,
            mp_cost,
        }
    }
}

/// Per-mode damage table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModeTable {
    pub melee: ModeProfile,
    pub ranged: ModeProfile,
    pub magic: ModeProfile,
}

impl ModeTable {
    pub const DEFAULT_MELEE: ModeProfile = ModeProfile::new(8, StatKind::Str, 0);
    pub const DEFAULT_RANGED: ModeProfile = ModeProfile::new(5, StatKind::Dex, 0);
    pub const DEFAULT_MAGIC: ModeProfile = ModeProfile::new(10, StatKind::Int, 8);

    pub fn new() -> Self {
        Self {
            melee: Self::DEFAULT_MELEE,
            ranged: Self::DEFAULT_RANGED,
            magic: Self::DEFAULT_MAGIC,
        }
    }

    pub fn profile(&self, mode: CombatMode) -> &ModeProfile {
        match mode {
            CombatMode::Melee => &self.melee,
            CombatMode::Ranged => &self.ranged,
            CombatMode::Magic => &self.magic,
        }
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete tunable surface of a combat session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub timing: TimingConfig,
    pub balance: BalanceConfig,
    pub modes: ModeTable,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_BAG_SLOTS: usize = 20;
    pub const MAX_SKILLS: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the timer block (builder pattern).
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_balance(mut self, balance: BalanceConfig) -> Self {
        self.balance = balance;
        self
    }

    #[must_use]
    pub fn with_modes(mut self, modes: ModeTable) -> Self {
        self.modes = modes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CombatConfig::default();
        assert_eq!(config.timing.intro, 60);
        assert_eq!(config.timing.flee_success, 40);
        assert_eq!(config.timing.hit_flash, 15);
        assert_eq!(config.balance.flee_chance, 50);
        assert_eq!(config.balance.stat_scaling, 2);
        assert_eq!(config.modes.profile(CombatMode::Magic).mp_cost, 8);
        assert_eq!(config.modes.profile(CombatMode::Ranged).stat, StatKind::Dex);
    }

    #[test]
    fn instant_timing_uses_single_ticks() {
        let config = CombatConfig::new().with_timing(TimingConfig::instant());
        assert_eq!(config.timing.intro, 1);
        assert_eq!(config.timing.enemy, 1);
    }
}
