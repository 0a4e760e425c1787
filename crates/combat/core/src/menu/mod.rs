//! Action menu.
//!
//! A three-level cursor state machine (Main, Skill, Item). It turns navigation
//! and confirm/cancel input into [`Action`] values and never touches combatant
//! stats. The Item list is supplied by the session when the submenu opens.

use crate::action::{Action, ActionError, SkillBook};
use crate::config::ModeTable;
use crate::state::UsableItem;

/// Menu depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MenuLevel {
    #[default]
    Main,
    Skill,
    Item,
}

/// Entries of the main menu, in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumCount,
    strum::VariantArray,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MainOption {
    Attack,
    Defend,
    Skill,
    Item,
    Flee,
}

impl MainOption {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Navigation {
    Up,
    Down,
    Left,
    Right,
}

/// Outcome of confirming the current entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// A leaf entry was chosen.
    Commit(Action),
    /// The Item entry was chosen; the caller must supply the usable list.
    RequestItems,
    /// A submenu was entered.
    Opened(MenuLevel),
    /// Nothing to confirm.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionMenu {
    level: MenuLevel,
    cursor: usize,
    skills: SkillBook,
    items: Vec<UsableItem>,
    item_cursor: usize,
}

fn wrap_prev(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + len - 1) % len }
}

fn wrap_next(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + 1) % len }
}

impl ActionMenu {
    pub fn new(skills: SkillBook) -> Self {
        Self {
            level: MenuLevel::Main,
            cursor: 0,
            skills,
            items: Vec::new(),
            item_cursor: 0,
        }
    }

    pub fn level(&self) -> MenuLevel {
        self.level
    }

    /// Cursor within the Main or Skill list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn item_cursor(&self) -> usize {
        self.item_cursor
    }

    pub fn skills(&self) -> &SkillBook {
        &self.skills
    }

    /// Consumables listed in the Item submenu.
    pub fn items(&self) -> &[UsableItem] {
        &self.items
    }

    /// Main entry under the cursor, when at the Main level.
    pub fn main_option(&self) -> Option<MainOption> {
        match self.level {
            MenuLevel::Main => <MainOption as strum::VariantArray>::VARIANTS.get(self.cursor).copied(),
            _ => None,
        }
    }

    /// Back to Main with the cursor on the first entry.
    pub fn reset(&mut self) {
        self.level = MenuLevel::Main;
        self.cursor = 0;
        self.item_cursor = 0;
        self.items.clear();
    }

    /// Up/Down wrap around; Left/Right clamp at the ends of the Main list.
    pub fn navigate(&mut self, nav: Navigation) {
        use strum::EnumCount;
        match self.level {
            MenuLevel::Main => {
                let len = MainOption::COUNT;
                self.cursor = match nav {
                    Navigation::Up => wrap_prev(self.cursor, len),
                    Navigation::Down => wrap_next(self.cursor, len),
                    Navigation::Left => self.cursor.saturating_sub(1),
                    Navigation::Right => (self.cursor + 1).min(len - 1),
                };
            }
            MenuLevel::Skill => match nav {
                Navigation::Up => self.cursor = wrap_prev(self.cursor, self.skills.len()),
                Navigation::Down => self.cursor = wrap_next(self.cursor, self.skills.len()),
                Navigation::Left | Navigation::Right => {}
            },
            MenuLevel::Item => match nav {
                Navigation::Up => self.item_cursor = wrap_prev(self.item_cursor, self.items.len()),
                Navigation::Down => {
                    self.item_cursor = wrap_next(self.item_cursor, self.items.len())
                }
                Navigation::Left | Navigation::Right => {}
            },
        }
    }

    /// Confirms the entry under the cursor.
    ///
    /// Skill costs are read from `modes` so the emitted action carries them.
    pub fn confirm(&mut self, modes: &ModeTable) -> MenuCommand {
        match self.level {
            MenuLevel::Main => match self.main_option() {
                Some(MainOption::Attack) => MenuCommand::Commit(Action::Attack),
                Some(MainOption::Defend) => MenuCommand::Commit(Action::Defend),
                Some(MainOption::Skill) => {
                    self.level = MenuLevel::Skill;
                    self.cursor = 0;
                    MenuCommand::Opened(MenuLevel::Skill)
                }
                Some(MainOption::Item) => MenuCommand::RequestItems,
                Some(MainOption::Flee) => MenuCommand::Commit(Action::Flee),
                None => MenuCommand::Ignored,
            },
            MenuLevel::Skill => match self.skills.get(self.cursor) {
                Some(skill) => MenuCommand::Commit(Action::Skill {
                    skill: skill.id.clone(),
                    mode: skill.mode,
                    cost: skill.cost(modes),
                }),
                None => MenuCommand::Ignored,
            },
            MenuLevel::Item => match self.items.get(self.item_cursor) {
                Some(entry) => MenuCommand::Commit(Action::Item {
                    item: entry.item.clone(),
                }),
                None => MenuCommand::Ignored,
            },
        }
    }

    /// Leaves a submenu, restoring the Main cursor to the entry that opened it.
    pub fn cancel(&mut self) {
        match self.level {
            MenuLevel::Main => {}
            MenuLevel::Skill => {
                self.level = MenuLevel::Main;
                self.cursor = MainOption::Skill.index();
            }
            MenuLevel::Item => {
                self.level = MenuLevel::Main;
                self.cursor = MainOption::Item.index();
                self.items.clear();
                self.item_cursor = 0;
            }
        }
    }

    /// Enters the Item submenu with a freshly built list.
    ///
    /// An empty list is rejected and the menu stays at Main.
    pub fn open_items(&mut self, items: Vec<UsableItem>) -> Result<(), ActionError> {
        if items.is_empty() {
            return Err(ActionError::NoUsableItems);
        }
        self.items = items;
        self.item_cursor = 0;
        self.level = MenuLevel::Item;
        Ok(())
    }

    /// Replaces the Item list after a failed use. Falls back to Main when empty.
    pub fn refresh_items(&mut self, items: Vec<UsableItem>) {
        if items.is_empty() {
            self.cancel();
            return;
        }
        self.item_cursor = self.item_cursor.min(items.len() - 1);
        self.items = items;
    }
}

impl Default for ActionMenu {
    fn default() -> Self {
        Self::new(SkillBook::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CombatMode;
    use crate::state::{ItemEffect, ItemId};

    fn potion(id: &str) -> UsableItem {
        UsableItem {
            item: ItemId::from(id),
            quantity: 1,
            effect: ItemEffect::new(40, 0),
        }
    }

    #[test]
    fn main_vertical_wraps_and_horizontal_clamps() {
        let mut menu = ActionMenu::default();
        menu.navigate(Navigation::Up);
        assert_eq!(menu.main_option(), Some(MainOption::Flee));
        menu.navigate(Navigation::Down);
        assert_eq!(menu.cursor(), 0);
        menu.navigate(Navigation::Left);
        assert_eq!(menu.cursor(), 0);
        for _ in 0..10 {
            menu.navigate(Navigation::Right);
        }
        assert_eq!(menu.main_option(), Some(MainOption::Flee));
    }

    #[test]
    fn skill_submenu_emits_costed_action() {
        let modes = ModeTable::default();
        let mut menu = ActionMenu::default();
        menu.navigate(Navigation::Down);
        menu.navigate(Navigation::Down);
        assert_eq!(menu.confirm(&modes), MenuCommand::Opened(MenuLevel::Skill));
        assert_eq!(menu.level(), MenuLevel::Skill);
        menu.navigate(Navigation::Up);
        match menu.confirm(&modes) {
            MenuCommand::Commit(Action::Skill { mode, cost, .. }) => {
                assert_eq!(mode, CombatMode::Magic);
                assert_eq!(cost, 8);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cancel_restores_opening_entry() {
        let modes = ModeTable::default();
        let mut menu = ActionMenu::default();
        menu.navigate(Navigation::Right);
        menu.navigate(Navigation::Right);
        menu.confirm(&modes);
        menu.cancel();
        assert_eq!(menu.level(), MenuLevel::Main);
        assert_eq!(menu.main_option(), Some(MainOption::Skill));

        menu.open_items(vec![potion("miruvor")]).unwrap();
        menu.cancel();
        assert_eq!(menu.main_option(), Some(MainOption::Item));
        assert!(menu.items().is_empty());
    }

    #[test]
    fn empty_item_list_never_opens() {
        let mut menu = ActionMenu::default();
        assert_eq!(menu.open_items(Vec::new()), Err(ActionError::NoUsableItems));
        assert_eq!(menu.level(), MenuLevel::Main);
    }

    #[test]
    fn item_submenu_cycles_and_commits() {
        let modes = ModeTable::default();
        let mut menu = ActionMenu::default();
        menu.open_items(vec![potion("miruvor"), potion("athelas")]).unwrap();
        menu.navigate(Navigation::Up);
        assert_eq!(menu.item_cursor(), 1);
        assert_eq!(
            menu.confirm(&modes),
            MenuCommand::Commit(Action::Item {
                item: ItemId::from("athelas")
            })
        );

        menu.refresh_items(vec![potion("miruvor")]);
        assert_eq!(menu.item_cursor(), 0);
        menu.refresh_items(Vec::new());
        assert_eq!(menu.level(), MenuLevel::Main);
    }
}
