//! Capability interfaces the combat session depends on.
//!
//! The session never sees a concrete player or enemy type. It works through
//! [`Combatant`] (stats plus a [`Loadout`]) and the side-specific extensions
//! [`PlayerProfile`] and [`EnemyProfile`]. Hosts with their own entity model
//! implement these traits; [`PlayerState`](crate::PlayerState) and
//! [`EnemyState`](crate::EnemyState) are the reference implementations.

use crate::state::{InventoryState, ItemEffect, ItemId, UsableItem};
use crate::stats::{CombatantStats, StatKind, WeaponBonus};

/// Equipment and bag access needed during battle.
pub trait Loadout {
    fn equipped_weapon(&self) -> Option<WeaponBonus>;

    /// Defense granted by equipment (the stat block's own DEF excluded).
    fn total_defense(&self) -> u32;

    fn stat_bonus(&self, stat: StatKind) -> u32;

    /// Consumables currently in the bag, in bag order.
    fn usable_items(&self) -> Vec<UsableItem>;

    /// Removes one consumable and returns its effect, or `None` if absent.
    fn consume(&mut self, item: &ItemId) -> Option<ItemEffect>;

    /// Best-effort insertion. Returns false when the item does not fit.
    fn add_item(&mut self, item: &ItemId) -> bool;
}

impl Loadout for InventoryState {
    fn equipped_weapon(&self) -> Option<WeaponBonus> {
        InventoryState::equipped_weapon(self)
    }

    fn total_defense(&self) -> u32 {
        InventoryState::total_defense(self)
    }

    fn stat_bonus(&self, stat: StatKind) -> u32 {
        InventoryState::stat_bonus(self, stat)
    }

    fn usable_items(&self) -> Vec<UsableItem> {
        InventoryState::usable_items(self)
    }

    fn consume(&mut self, item: &ItemId) -> Option<ItemEffect> {
        InventoryState::consume(self, item)
    }

    fn add_item(&mut self, item: &ItemId) -> bool {
        InventoryState::add_item(self, item)
    }
}

/// Loadout of a combatant that carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyLoadout;

impl Loadout for EmptyLoadout {
    fn equipped_weapon(&self) -> Option<WeaponBonus> {
        None
    }

    fn total_defense(&self) -> u32 {
        0
    }

    fn stat_bonus(&self, _stat: StatKind) -> u32 {
        0
    }

    fn usable_items(&self) -> Vec<UsableItem> {
        Vec::new()
    }

    fn consume(&mut self, _item: &ItemId) -> Option<ItemEffect> {
        None
    }

    fn add_item(&mut self, _item: &ItemId) -> bool {
        false
    }
}

/// Anything that can stand on one side of a battle.
pub trait Combatant {
    type Loadout: Loadout;

    fn stats(&self) -> &CombatantStats;
    fn stats_mut(&mut self) -> &mut CombatantStats;
    fn loadout(&self) -> &Self::Loadout;
    fn loadout_mut(&mut self) -> &mut Self::Loadout;

    /// Consumes an item and applies its heal and MP effects.
    fn apply_item(&mut self, item: &ItemId) -> Option<ItemEffect> {
        let effect = self.loadout_mut().consume(item)?;
        let stats = self.stats_mut();
        stats.heal(effect.heal);
        stats.restore_mp(effect.restore_mp);
        Some(effect)
    }

    fn use_item(&mut self, item: &ItemId) -> bool {
        self.apply_item(item).is_some()
    }

    /// Own DEF plus equipment defense.
    fn total_defense(&self) -> u32 {
        self.stats().def + self.loadout().total_defense()
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }
}

/// Player-side progression hooks used by reward settlement.
pub trait PlayerProfile: Combatant {
    fn gold(&self) -> u32;
    fn add_gold(&mut self, amount: u32);

    /// Grants XP; returns the number of levels gained.
    fn add_xp(&mut self, amount: u32) -> u32 {
        self.stats_mut().add_xp(amount)
    }
}

/// Enemy-side data the session reads.
pub trait EnemyProfile: Combatant {
    /// Template id, e.g. `cave_troll`.
    fn kind(&self) -> &str;
    fn atk_damage(&self) -> u32;
    fn is_boss(&self) -> bool;
    fn xp_reward(&self) -> u32;
    fn gold_reward(&self) -> u32;
    fn drops(&self) -> &[ItemId];

    /// Notification for the renderer that the enemy was struck.
    fn take_hit(&mut self);
}

/// External quest tracker notified on victory.
pub trait QuestObserver {
    fn on_enemy_kill(&mut self, kind: &str);

    /// Called only for drops that actually entered the bag.
    fn on_collect(&mut self, item: &ItemId);
}
