//! Stat system.
//!
//! - `core`: persistent stat block (HP/MP pools, attributes, level and XP)
//! - `bonus`: equipment aggregates recomputed at resolution time

pub mod bonus;
pub mod core;

pub use bonus::{EquipmentBonus, StatKind, WeaponBonus};
pub use self::core::{CombatantStats, HP_PER_LEVEL, MP_PER_LEVEL, POINTS_PER_LEVEL};
