//! Player actions.
//!
//! An [`Action`] is produced by the action menu and consumed exactly once by
//! the session. Everything an action needs at resolution time (mode, cost,
//! item id) is captured when it is built.

mod error;
mod skill;

pub use error::ActionError;
pub use skill::{SkillBook, SkillDef, SkillId};

use crate::state::ItemId;

/// Damage family of a skill or weapon.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatMode {
    #[default]
    Melee,
    Ranged,
    Magic,
}

/// A committed player choice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Attack,
    Defend,
    Skill {
        skill: SkillId,
        mode: CombatMode,
        cost: u32,
    },
    Item {
        item: ItemId,
    },
    Flee,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Skill { .. } => "skill",
            Self::Item { .. } => "item",
            Self::Flee => "flee",
        }
    }
}
