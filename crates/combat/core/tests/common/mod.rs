#![allow(dead_code)]

use std::sync::Arc;

use combat_core::{
    CombatConfig, CombatSession, EnemyProfile, EnemyState, EnemyTemplate, EquipSlot,
    EquipmentBonus, ItemCatalog, ItemDefinition, ItemEffect, ItemId, ItemKind, Navigation, Phase,
    PlayerProfile, PlayerState, QuestObserver, RngOracle, TimingConfig,
};

pub fn catalog() -> Arc<ItemCatalog> {
    let catalog = ItemCatalog::new()
        .with_item(ItemDefinition::new(
            "miruvor",
            "Miruvor",
            ItemKind::Consumable(ItemEffect::new(40, 0)),
        ))
        .with_item(ItemDefinition::new(
            "ent_draught",
            "Ent Draught",
            ItemKind::Consumable(ItemEffect::new(0, 40)),
        ))
        .with_item(ItemDefinition::new("goblin_ear", "Goblin Ear", ItemKind::Material))
        .with_item(ItemDefinition::new(
            "worn_boots",
            "Worn Boots",
            ItemKind::Armor {
                slot: EquipSlot::Boots,
                stats: EquipmentBonus {
                    def: 1,
                    ..Default::default()
                },
            },
        ));
    Arc::new(catalog)
}

pub fn hero() -> PlayerState {
    PlayerState::fresh("hero", catalog())
}

pub fn enemy(id: &str, max_hp: u32, def: u32, atk_damage: u32) -> EnemyState {
    EnemyState::from_template(&EnemyTemplate {
        id: id.into(),
        max_hp,
        str: 1,
        dex: 1,
        int: 0,
        def,
        atk_damage,
        xp_reward: 15,
        gold_reward: 8,
        drops: Vec::new(),
        is_boss: false,
    })
}

pub fn boss(id: &str, max_hp: u32) -> EnemyState {
    let mut boss = enemy(id, max_hp, 8, 15);
    boss.is_boss = true;
    boss
}

/// Short timers so tests can step through phases quickly.
pub fn fast_config() -> CombatConfig {
    CombatConfig::new().with_timing(TimingConfig {
        intro: 1,
        attack: 2,
        skill: 2,
        defend: 2,
        item: 2,
        flee_fail: 2,
        flee_success: 3,
        enemy: 2,
        hit_flash: 3,
    })
}

/// Ticks until the session reaches `phase` or a result. Panics after 1000 ticks.
pub fn tick_until<P, E, R>(session: &mut CombatSession<'_, P, E, R>, phase: Phase)
where
    P: PlayerProfile,
    E: EnemyProfile,
    R: RngOracle,
{
    for _ in 0..1000 {
        if session.phase() == phase {
            return;
        }
        session.tick();
    }
    panic!("never reached {phase:?}, stuck in {:?}", session.phase());
}

/// Moves the main cursor from entry 0 to `index` using Down presses.
pub fn select_main<P, E, R>(session: &mut CombatSession<'_, P, E, R>, index: usize)
where
    P: PlayerProfile,
    E: EnemyProfile,
    R: RngOracle,
{
    for _ in 0..index {
        session.submit_navigation(Navigation::Down);
    }
}

#[derive(Debug, Default)]
pub struct QuestTally {
    pub kills: Vec<String>,
    pub collected: Vec<ItemId>,
}

impl QuestObserver for QuestTally {
    fn on_enemy_kill(&mut self, kind: &str) {
        self.kills.push(kind.to_owned());
    }

    fn on_collect(&mut self, item: &ItemId) {
        self.collected.push(item.clone());
    }
}
