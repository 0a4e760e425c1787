//! Enemy templates and live enemy state.

use crate::combatant::{Combatant, EmptyLoadout, EnemyProfile};
use crate::state::ItemId;
use crate::stats::CombatantStats;

/// Frames an enemy flashes after being struck.
pub const ENEMY_HIT_FLASH: u32 = 6;

/// Static enemy definition, loaded from content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub max_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub str: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dex: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub int: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub def: u32,
    pub atk_damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_boss: bool,
}

impl EnemyTemplate {
    pub fn stats(&self) -> CombatantStats {
        CombatantStats::new(self.max_hp, 0, self.str, self.dex, self.int, self.def)
    }
}

/// A live enemy on the map or in battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyState {
    pub kind: String,
    pub stats: CombatantStats,
    pub atk_damage: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub drops: Vec<ItemId>,
    pub is_boss: bool,
    pub hit_flash: u32,
    /// Frames before this enemy may start another battle.
    pub combat_cooldown: u32,
    pub active: bool,
    loadout: EmptyLoadout,
}

impl EnemyState {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            kind: template.id.clone(),
            stats: template.stats(),
            atk_damage: template.atk_damage,
            xp_reward: template.xp_reward,
            gold_reward: template.gold_reward,
            drops: template.drops.clone(),
            is_boss: template.is_boss,
            hit_flash: 0,
            combat_cooldown: 0,
            active: true,
            loadout: EmptyLoadout,
        }
    }

    /// Advances per-frame timers.
    pub fn tick(&mut self) {
        self.hit_flash = self.hit_flash.saturating_sub(1);
        self.combat_cooldown = self.combat_cooldown.saturating_sub(1);
    }

    /// Keeps the enemy from re-engaging for `frames` ticks. Applied after a flee.
    pub fn apply_combat_cooldown(&mut self, frames: u32) {
        self.combat_cooldown = frames;
    }

    /// Removes the enemy from play. Applied after a win.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// True if the enemy is alive, active and off cooldown.
    pub fn can_engage(&self) -> bool {
        self.active && self.combat_cooldown == 0 && self.stats.is_alive()
    }
}

impl Combatant for EnemyState {
    type Loadout = EmptyLoadout;

    fn stats(&self) -> &CombatantStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatantStats {
        &mut self.stats
    }

    fn loadout(&self) -> &EmptyLoadout {
        &self.loadout
    }

    fn loadout_mut(&mut self) -> &mut EmptyLoadout {
        &mut self.loadout
    }
}

impl EnemyProfile for EnemyState {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn atk_damage(&self) -> u32 {
        self.atk_damage
    }

    fn is_boss(&self) -> bool {
        self.is_boss
    }

    fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    fn drops(&self) -> &[ItemId] {
        &self.drops
    }

    fn take_hit(&mut self) {
        self.hit_flash = ENEMY_HIT_FLASH;
    }
}
