//! Reference combatant state.
//!
//! Items, inventory, player and enemy types that implement the capability
//! traits in [`crate::combatant`]. Hosts may use them directly or bring their
//! own implementations.

mod enemy;
mod error;
mod inventory;
mod items;
mod player;

pub use enemy::{ENEMY_HIT_FLASH, EnemyState, EnemyTemplate};
pub use error::InventoryError;
pub use inventory::{BagSlot, InventoryState, UsableItem};
pub use items::{
    EquipSlot, ItemCatalog, ItemDefinition, ItemEffect, ItemId, ItemKind, ItemSet, SetBonus,
};
pub use player::PlayerState;
