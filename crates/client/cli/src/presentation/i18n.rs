//! English and Chinese battle text.
//!
//! The session logs structured [`BattleMessage`]s; this module is the only
//! place that turns them into sentences.
use combat_core::{
    BattleMessage, CombatResult, ItemCatalog, ItemEffect, ItemId, MainOption, SkillDef, SkillId,
};

use crate::config::Lang;

/// Fixed interface strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Actions,
    Skills,
    Items,
    NoItems,
    BattleLog,
    Free,
    UsedFallback,
}

pub struct Localizer<'a> {
    lang: Lang,
    catalog: &'a ItemCatalog,
}

impl<'a> Localizer<'a> {
    pub fn new(lang: Lang, catalog: &'a ItemCatalog) -> Self {
        Self { lang, catalog }
    }

    pub fn message(&self, message: &BattleMessage) -> String {
        let zh = self.lang == Lang::Zh;
        match message {
            BattleMessage::WildAppears { enemy } => {
                let name = enemy_name(enemy);
                if zh {
                    format!("野生的 {name} 出现了！")
                } else {
                    format!("A wild {name} appears!")
                }
            }
            BattleMessage::AttackForDmg { dmg } => {
                if zh {
                    format!("你造成了 {dmg} 点伤害！")
                } else {
                    format!("You attack for {dmg} damage!")
                }
            }
            BattleMessage::CritAttackForDmg { dmg } => {
                if zh {
                    format!("暴击！你造成了 {dmg} 点伤害！")
                } else {
                    format!("CRITICAL! You attack for {dmg} damage!")
                }
            }
            BattleMessage::SkillDealsDmg { skill, dmg, cost } => {
                let skill = self.skill_name(skill);
                let line = if zh {
                    format!("{skill} 造成了 {dmg} 点伤害！")
                } else {
                    format!("{skill} deals {dmg} damage!")
                };
                line + &cost_suffix(*cost)
            }
            BattleMessage::CritSkillDealsDmg { skill, dmg, cost } => {
                let skill = self.skill_name(skill);
                let line = if zh {
                    format!("暴击！{skill} 造成了 {dmg} 点伤害！")
                } else {
                    format!("CRITICAL! {skill} deals {dmg} damage!")
                };
                line + &cost_suffix(*cost)
            }
            BattleMessage::DefendStance => self.pick("You take a defensive stance.", "你摆出了防御姿态。"),
            BattleMessage::NotEnoughMp { .. } => self.pick("Not enough MP!", "魔力不足！"),
            BattleMessage::NoUsableItems => self.pick("No usable items!", "没有可用物品！"),
            BattleMessage::UsedItem { item, effect } => {
                let name = self.item_name(item);
                let desc = self.effect_desc(effect);
                if zh {
                    format!("使用了 {name}！{desc}")
                } else {
                    format!("Used {name}! {desc}")
                }
            }
            BattleMessage::CannotUseItem { .. } => self.pick("Cannot use that item!", "无法使用该物品！"),
            BattleMessage::CannotFleeBoss => self.pick("Cannot flee from a Boss!", "无法从Boss战中逃跑！"),
            BattleMessage::FledSuccess => self.pick("You fled successfully!", "成功逃跑了！"),
            BattleMessage::FledFail => self.pick("Failed to flee!", "逃跑失败！"),
            BattleMessage::EnemyDefend { enemy } => {
                let name = enemy_name(enemy);
                if zh {
                    format!("{name} 摆出了防御姿态！")
                } else {
                    format!("{name} braces for defense!")
                }
            }
            BattleMessage::EnemyAttacks { enemy, dmg } => {
                let name = enemy_name(enemy);
                if zh {
                    format!("{name} 造成了 {dmg} 点伤害！")
                } else {
                    format!("{name} attacks for {dmg} damage!")
                }
            }
            BattleMessage::Victory => self.pick("Victory!", "胜利！"),
            BattleMessage::XpGoldReward { xp, gold } => {
                if zh {
                    format!("+{xp} 经验  +{gold} 金币")
                } else {
                    format!("+{xp} XP  +{gold} Gold")
                }
            }
            BattleMessage::Defeated => self.pick("You have been defeated...", "你被击败了……"),
        }
    }

    pub fn label(&self, label: Label) -> String {
        let (en, zh) = match label {
            Label::Actions => ("Actions:", "行动:"),
            Label::Skills => ("Skills: (ESC to back)", "技能: (ESC 返回)"),
            Label::Items => ("Items: (ESC to back)", "物品: (ESC 返回)"),
            Label::NoItems => ("  No items", "  无物品"),
            Label::BattleLog => ("Battle Log:", "战斗日志:"),
            Label::Free => (" [Free]", " [免费]"),
            Label::UsedFallback => ("Used", "已使用"),
        };
        self.pick(en, zh)
    }

    pub fn option(&self, option: MainOption) -> String {
        let (en, zh) = match option {
            MainOption::Attack => ("Attack", "攻击"),
            MainOption::Defend => ("Defend", "防御"),
            MainOption::Skill => ("Skill", "技能"),
            MainOption::Item => ("Item", "物品"),
            MainOption::Flee => ("Flee", "逃跑"),
        };
        self.pick(en, zh)
    }

    pub fn round(&self, n: u32) -> String {
        match self.lang {
            Lang::En => format!("Round {n}"),
            Lang::Zh => format!("第 {n} 回合"),
        }
    }

    pub fn enemy_title(&self, kind: &str, is_boss: bool) -> String {
        let name = enemy_name(kind);
        match (is_boss, self.lang) {
            (false, _) => name,
            (true, Lang::En) => format!("[BOSS] {name}"),
            (true, Lang::Zh) => format!("[首领] {name}"),
        }
    }

    /// Prompt shown once the battle has a result.
    pub fn continue_prompt(&self, result: CombatResult) -> String {
        let (en, zh) = match result {
            CombatResult::Win => ("VICTORY! Press Enter to continue", "胜利！按 Enter 继续"),
            CombatResult::Lose => ("DEFEATED! Press Enter...", "战败！按 Enter 继续……"),
            CombatResult::Flee => ("Escaped! Press Enter...", "逃跑成功！按 Enter 继续……"),
        };
        self.pick(en, zh)
    }

    pub fn level_up(&self, level: u32) -> String {
        match self.lang {
            Lang::En => format!("Level Up! Lv{level}"),
            Lang::Zh => format!("升级了！Lv{level}"),
        }
    }

    pub fn got_item(&self, item: &ItemId) -> String {
        let name = self.item_name(item);
        match self.lang {
            Lang::En => format!("Got {name}"),
            Lang::Zh => format!("获得了 {name}"),
        }
    }

    /// Skill submenu entry, e.g. `Magic (INT) [8 MP]`.
    pub fn skill_entry(&self, skill: &SkillDef, cost: u32) -> String {
        let (en, zh) = match skill.id.0.as_str() {
            "slash" => ("Slash (STR)", "斩击 (力量)"),
            "shot" => ("Shot (DEX)", "射击 (敏捷)"),
            "magic" => ("Magic (INT)", "魔法 (智力)"),
            other => (other, other),
        };
        let tag = if cost == 0 {
            self.label(Label::Free)
        } else {
            format!(" [{cost} MP]")
        };
        self.pick(en, zh) + &tag
    }

    pub fn skill_name(&self, skill: &SkillId) -> String {
        let (en, zh) = match skill.0.as_str() {
            "slash" => ("Slash", "斩击"),
            "shot" => ("Shot", "射击"),
            "magic" => ("Magic", "魔法"),
            other => (other, other),
        };
        self.pick(en, zh)
    }

    pub fn item_name(&self, item: &ItemId) -> String {
        self.catalog
            .get(item)
            .map(|definition| definition.name.clone())
            .unwrap_or_else(|| item.to_string())
    }

    fn effect_desc(&self, effect: &ItemEffect) -> String {
        let mut parts = Vec::new();
        if effect.heal > 0 {
            parts.push(format!("+{} HP", effect.heal));
        }
        if effect.restore_mp > 0 {
            parts.push(format!("+{} MP", effect.restore_mp));
        }
        if parts.is_empty() {
            self.label(Label::UsedFallback)
        } else {
            parts.join(" ")
        }
    }

    fn pick(&self, en: &str, zh: &str) -> String {
        match self.lang {
            Lang::En => en.to_owned(),
            Lang::Zh => zh.to_owned(),
        }
    }
}

/// `cave_troll` becomes `Cave Troll`.
pub fn enemy_name(kind: &str) -> String {
    kind.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn cost_suffix(cost: u32) -> String {
    if cost == 0 {
        String::new()
    } else {
        format!(" (-{cost} MP)")
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{CombatMode, ItemDefinition, ItemKind};

    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog::new().with_item(ItemDefinition::new(
            "miruvor",
            "Miruvor",
            ItemKind::Consumable(ItemEffect::new(40, 0)),
        ))
    }

    #[test]
    fn enemy_ids_are_title_cased() {
        assert_eq!(enemy_name("cave_troll"), "Cave Troll");
        assert_eq!(enemy_name("goblin"), "Goblin");
    }

    #[test]
    fn english_messages_fill_parameters() {
        let catalog = catalog();
        let en = Localizer::new(Lang::En, &catalog);

        assert_eq!(
            en.message(&BattleMessage::WildAppears {
                enemy: "uruk_archer".into()
            }),
            "A wild Uruk Archer appears!"
        );
        assert_eq!(
            en.message(&BattleMessage::SkillDealsDmg {
                skill: "magic".into(),
                dmg: 16,
                cost: 8
            }),
            "Magic deals 16 damage! (-8 MP)"
        );
        assert_eq!(
            en.message(&BattleMessage::UsedItem {
                item: "miruvor".into(),
                effect: ItemEffect::new(40, 0),
            }),
            "Used Miruvor! +40 HP"
        );
    }

    #[test]
    fn chinese_messages() {
        let catalog = catalog();
        let zh = Localizer::new(Lang::Zh, &catalog);

        assert_eq!(zh.message(&BattleMessage::FledFail), "逃跑失败！");
        assert_eq!(
            zh.message(&BattleMessage::XpGoldReward { xp: 15, gold: 8 }),
            "+15 经验  +8 金币"
        );
        assert_eq!(zh.enemy_title("balrog", true), "[首领] Balrog");
        assert_eq!(zh.round(3), "第 3 回合");
    }

    #[test]
    fn skill_entries_show_cost() {
        let catalog = catalog();
        let en = Localizer::new(Lang::En, &catalog);
        assert_eq!(
            en.skill_entry(&SkillDef::new("slash", CombatMode::Melee), 0),
            "Slash (STR) [Free]"
        );
        assert_eq!(
            en.skill_entry(&SkillDef::new("magic", CombatMode::Magic), 8),
            "Magic (INT) [8 MP]"
        );
    }

    #[test]
    fn unknown_items_fall_back_to_id() {
        let catalog = catalog();
        let en = Localizer::new(Lang::En, &catalog);
        assert_eq!(en.got_item(&ItemId::from("goblin_ear")), "Got goblin_ear");
    }
}
