//! Combat math.
//!
//! Pure functions for damage, mitigation and critical hits. Nothing here holds
//! state; the session feeds in stat lines and an RNG handle.
//!
//! # Core Functions
//!
//! - `calculate_damage`: raw hit minus defense, floored at 1
//! - `mitigate_enemy_attack`: defending halves the blow before defense applies
//! - `roll_critical` / `apply_critical`: DEX-driven critical hits

pub mod critical;
pub mod damage;

pub use critical::{apply_critical, crit_probability, roll_critical};
pub use damage::{calculate_damage, defense_reduction, mitigate_enemy_attack};
