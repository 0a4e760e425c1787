//! Scripted player for headless runs.
//!
//! The autopilot only ever presses the same keys a person would, so every
//! decision still goes through the session's menu and validation.
use combat_core::{ActionMenu, CombatConfig, CombatMode, MainOption, Navigation, PlayerState, StatKind};

use crate::input::KeyAction;

/// Below this HP percentage the autopilot drinks a healing item if it has one.
pub const HEAL_THRESHOLD_PERCENT: u32 = 35;

/// What the autopilot wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    Attack,
    /// Use the skill at this index of the skill book.
    Skill(usize),
    /// Use the item at this index of the usable list.
    Item(usize),
}

#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, player: &PlayerState, menu: &ActionMenu, config: &CombatConfig) -> Plan {
        let stats = &player.stats;
        let wounded = stats.hp * 100 < stats.max_hp * HEAL_THRESHOLD_PERCENT;
        if wounded
            && let Some(index) = player
                .inventory
                .usable_items()
                .iter()
                .position(|entry| entry.effect.heal > 0)
        {
            return Plan::Item(index);
        }

        let magic = config.modes.profile(CombatMode::Magic);
        let int = stats.int + player.inventory.stat_bonus(StatKind::Int);
        let str = stats.str + player.inventory.stat_bonus(StatKind::Str);
        if stats.mp >= magic.mp_cost
            && int > str
            && let Some(index) = menu
                .skills()
                .iter()
                .position(|skill| skill.mode == CombatMode::Magic)
        {
            return Plan::Skill(index);
        }

        Plan::Attack
    }

    /// Key presses that carry out `plan` from the menu's current Main cursor.
    pub fn keys(&self, plan: Plan, menu: &ActionMenu) -> Vec<KeyAction> {
        let (option, sub_index) = match plan {
            Plan::Attack => (MainOption::Attack, None),
            Plan::Skill(index) => (MainOption::Skill, Some(index)),
            Plan::Item(index) => (MainOption::Item, Some(index)),
        };

        let mut keys = steps_down(menu.cursor(), option.index(), MAIN_LEN);
        keys.push(KeyAction::Confirm);
        if let Some(index) = sub_index {
            keys.extend(std::iter::repeat_n(KeyAction::Navigate(Navigation::Down), index));
            keys.push(KeyAction::Confirm);
        }
        keys
    }
}

const MAIN_LEN: usize = <MainOption as strum::EnumCount>::COUNT;

fn steps_down(from: usize, to: usize, len: usize) -> Vec<KeyAction> {
    let presses = (to + len - from % len) % len;
    vec![KeyAction::Navigate(Navigation::Down); presses]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use combat_core::{ItemCatalog, ItemDefinition, ItemEffect, ItemId, ItemKind, SkillBook};

    use super::*;

    fn player() -> PlayerState {
        let catalog = ItemCatalog::new()
            .with_item(ItemDefinition::new(
                "ent_draught",
                "Ent Draught",
                ItemKind::Consumable(ItemEffect::new(0, 40)),
            ))
            .with_item(ItemDefinition::new(
                "miruvor",
                "Miruvor",
                ItemKind::Consumable(ItemEffect::new(40, 0)),
            ));
        PlayerState::fresh("hero", Arc::new(catalog))
    }

    #[test]
    fn healthy_player_attacks() {
        let autopilot = Autopilot::new();
        let menu = ActionMenu::new(SkillBook::standard());
        let plan = autopilot.decide(&player(), &menu, &CombatConfig::default());
        assert_eq!(plan, Plan::Attack);
        assert_eq!(autopilot.keys(plan, &menu), [KeyAction::Confirm]);
    }

    #[test]
    fn wounded_player_drinks_the_first_healing_item() {
        let autopilot = Autopilot::new();
        let mut hero = player();
        hero.stats.hp = 20;
        hero.inventory.add_item(&ItemId::from("ent_draught"));
        hero.inventory.add_item(&ItemId::from("miruvor"));
        let menu = ActionMenu::new(SkillBook::standard());

        let plan = autopilot.decide(&hero, &menu, &CombatConfig::default());
        assert_eq!(plan, Plan::Item(1));
        let down = KeyAction::Navigate(Navigation::Down);
        assert_eq!(
            autopilot.keys(plan, &menu),
            [down, down, down, KeyAction::Confirm, down, KeyAction::Confirm]
        );
    }

    #[test]
    fn wounded_player_without_potions_keeps_attacking() {
        let mut hero = player();
        hero.stats.hp = 5;
        let menu = ActionMenu::new(SkillBook::standard());
        assert_eq!(
            Autopilot::new().decide(&hero, &menu, &CombatConfig::default()),
            Plan::Attack
        );
    }

    #[test]
    fn caster_uses_magic_while_mana_lasts() {
        let autopilot = Autopilot::new();
        let mut hero = player();
        hero.stats.int = 9;
        let menu = ActionMenu::new(SkillBook::standard());
        assert_eq!(autopilot.decide(&hero, &menu, &CombatConfig::default()), Plan::Skill(2));

        hero.stats.mp = 7;
        assert_eq!(autopilot.decide(&hero, &menu, &CombatConfig::default()), Plan::Attack);
    }

    #[test]
    fn cursor_wraps_to_target() {
        let down = KeyAction::Navigate(Navigation::Down);
        assert_eq!(steps_down(4, 0, 5), [down]);
        assert!(steps_down(3, 3, 5).is_empty());
        assert_eq!(steps_down(0, 4, 5).len(), 4);
    }
}
