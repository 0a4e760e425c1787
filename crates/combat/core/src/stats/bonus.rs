//! Equipment-derived bonuses.
//!
//! These are NOT stored on the combatant. They are recomputed from the equipped
//! items every time an action resolves.

use crate::action::CombatMode;
use crate::state::ItemId;

/// The four trainable attributes.
///
/// - **STR**: melee damage
/// - **DEX**: ranged damage and critical chance
/// - **INT**: magic damage
/// - **DEF**: damage reduction
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Str,
    Dex,
    Int,
    Def,
}

/// Aggregate bonus granted by everything a combatant has equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentBonus {
    /// Flat weapon attack.
    pub atk: u32,
    pub def: u32,
    pub str: u32,
    pub dex: u32,
    pub int: u32,
    /// Critical chance in percent.
    pub crit: u32,
}

impl EquipmentBonus {
    pub fn stat(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Str => self.str,
            StatKind::Dex => self.dex,
            StatKind::Int => self.int,
            StatKind::Def => self.def,
        }
    }

    /// Field-wise sum.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            atk: self.atk + other.atk,
            def: self.def + other.def,
            str: self.str + other.str,
            dex: self.dex + other.dex,
            int: self.int + other.int,
            crit: self.crit + other.crit,
        }
    }
}

impl core::ops::Add for EquipmentBonus {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl core::iter::Sum for EquipmentBonus {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::combine)
    }
}

/// Attack contribution of the equipped weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeaponBonus {
    pub item: ItemId,
    pub attack: u32,
    /// Mode the weapon is built for. Informational; the bonus applies to every mode.
    pub style: CombatMode,
}
