//! Deterministic turn-based combat rules.
//!
//! `combat-core` runs one battle between a player and a single enemy. It holds
//! no global state: combatants are borrowed through the capability traits in
//! [`combatant`], randomness arrives through an injected [`RngOracle`], and the
//! battle log is structured data for the host to present.
//! All battle state changes flow through [`session::CombatSession`].
pub mod action;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod env;
pub mod error;
pub mod menu;
pub mod session;
pub mod state;
pub mod stats;
pub mod tactician;

pub use action::{Action, ActionError, CombatMode, SkillBook, SkillDef, SkillId};
pub use combat::{apply_critical, calculate_damage, crit_probability, mitigate_enemy_attack, roll_critical};
pub use combatant::{Combatant, EmptyLoadout, EnemyProfile, Loadout, PlayerProfile, QuestObserver};
pub use config::{BalanceConfig, CombatConfig, ModeProfile, ModeTable, TimingConfig};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
pub use menu::{ActionMenu, MainOption, MenuCommand, MenuLevel, Navigation};
pub use session::{
    BattleLog, BattleMessage, CombatResult, CombatSession, LogCategory, LogEntry, Phase,
    RewardReport, RewardSettlement,
};
pub use state::{
    BagSlot, ENEMY_HIT_FLASH, EnemyState, EnemyTemplate, EquipSlot, InventoryError,
    InventoryState, ItemCatalog, ItemDefinition, ItemEffect, ItemId, ItemKind, ItemSet,
    PlayerState, SetBonus, UsableItem,
};
pub use stats::{CombatantStats, EquipmentBonus, StatKind, WeaponBonus};
pub use tactician::{EnemyIntent, EnemyTactician};
