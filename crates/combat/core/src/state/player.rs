use std::sync::Arc;

use super::{InventoryState, ItemCatalog};
use crate::combatant::{Combatant, PlayerProfile};
use crate::stats::CombatantStats;

/// Reference player: a stat block and an inventory.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub name: String,
    pub stats: CombatantStats,
    pub inventory: InventoryState,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, stats: CombatantStats, inventory: InventoryState) -> Self {
        Self {
            name: name.into(),
            stats,
            inventory,
        }
    }

    /// Fresh level-1 character with an empty bag.
    pub fn fresh(name: impl Into<String>, catalog: Arc<ItemCatalog>) -> Self {
        Self::new(name, CombatantStats::player(), InventoryState::new(catalog))
    }
}

impl Combatant for PlayerState {
    type Loadout = InventoryState;

    fn stats(&self) -> &CombatantStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatantStats {
        &mut self.stats
    }

    fn loadout(&self) -> &InventoryState {
        &self.inventory
    }

    fn loadout_mut(&mut self) -> &mut InventoryState {
        &mut self.inventory
    }
}

impl PlayerProfile for PlayerState {
    fn gold(&self) -> u32 {
        self.inventory.gold
    }

    fn add_gold(&mut self, amount: u32) {
        self.inventory.add_gold(amount);
    }
}
