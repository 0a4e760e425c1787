//! Battle session.
//!
//! [`CombatSession`] runs one fight between a player and a single enemy, from
//! the intro countdown to a Win, Lose or Flee result. The host calls
//! [`tick`](CombatSession::tick) once per frame and forwards player input
//! through the three `submit_*` verbs.
//!
//! # Phase flow
//!
//! ```text
//! Intro -> PlayerChoose -> PlayerAct -> CheckEnd -> EnemyAct -> PlayerChoose ...
//!                       \-> Flee                \-> Win | Lose
//! ```
//!
//! Win, Lose and Flee are absorbing. Once a result is set, nothing mutates
//! the phase, the log or either combatant again.

mod log;
mod phase;
mod reward;

pub use log::{BattleLog, BattleMessage, LogCategory, LogEntry};
pub use phase::{CombatResult, Phase};
pub use reward::{RewardReport, RewardSettlement};

use crate::action::{Action, ActionError, CombatMode, SkillBook, SkillId};
use crate::combat::{apply_critical, calculate_damage, mitigate_enemy_attack, roll_critical};
use crate::combatant::{EnemyProfile, Loadout, PlayerProfile, QuestObserver};
use crate::config::CombatConfig;
use crate::error::GameError;
use crate::env::{PcgRng, RngOracle};
use crate::menu::{ActionMenu, MenuCommand, Navigation};
use crate::state::ItemId;
use crate::tactician::{EnemyIntent, EnemyTactician};

/// One battle between a player and an enemy.
///
/// The session borrows both combatants for its whole life; they outlive it.
pub struct CombatSession<'a, P, E, R = PcgRng>
where
    P: PlayerProfile,
    E: EnemyProfile,
    R: RngOracle,
{
    player: &'a mut P,
    enemy: &'a mut E,
    rng: R,
    config: CombatConfig,
    quests: Option<&'a mut dyn QuestObserver>,

    phase: Phase,
    round_num: u32,
    timer: u32,
    menu: ActionMenu,
    log: BattleLog,

    player_defending: bool,
    player_flash: u32,
    enemy_flash: u32,

    result: Option<CombatResult>,
    reward: Option<RewardReport>,
    finished: bool,
}

impl<'a, P, E, R> CombatSession<'a, P, E, R>
where
    P: PlayerProfile,
    E: EnemyProfile,
    R: RngOracle,
{
    /// Starts a battle with default configuration and the standard skills.
    pub fn start(player: &'a mut P, enemy: &'a mut E, rng: R) -> Self {
        let config = CombatConfig::default();
        let mut log = BattleLog::new();
        log.push(BattleMessage::WildAppears {
            enemy: enemy.kind().to_owned(),
        });
        tracing::info!(
            enemy = enemy.kind(),
            boss = enemy.is_boss(),
            player_hp = player.stats().hp,
            enemy_hp = enemy.stats().hp,
            "combat started"
        );

        Self {
            player,
            enemy,
            rng,
            timer: config.timing.intro,
            config,
            quests: None,
            phase: Phase::Intro,
            round_num: 1,
            menu: ActionMenu::new(SkillBook::standard()),
            log,
            player_defending: false,
            player_flash: 0,
            enemy_flash: 0,
            result: None,
            reward: None,
            finished: false,
        }
    }

    /// Replaces the configuration before the first tick (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: CombatConfig) -> Self {
        if self.phase == Phase::Intro {
            self.timer = config.timing.intro;
        }
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: SkillBook) -> Self {
        self.menu = ActionMenu::new(skills);
        self
    }

    /// Attaches the quest tracker notified on victory.
    #[must_use]
    pub fn with_quests(mut self, quests: &'a mut dyn QuestObserver) -> Self {
        self.quests = Some(quests);
        self
    }

    // ===== host output =====

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_num(&self) -> u32 {
        self.round_num
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    pub fn result(&self) -> Option<CombatResult> {
        self.result
    }

    /// Rewards granted on victory.
    pub fn reward(&self) -> Option<&RewardReport> {
        self.reward.as_ref()
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn player(&self) -> &P {
        &*self.player
    }

    pub fn enemy(&self) -> &E {
        &*self.enemy
    }

    pub fn is_player_defending(&self) -> bool {
        self.player_defending
    }

    /// Remaining hit-flash frames for the player.
    pub fn player_flash(&self) -> u32 {
        self.player_flash
    }

    /// Remaining hit-flash frames for the enemy.
    pub fn enemy_flash(&self) -> u32 {
        self.enemy_flash
    }

    /// Remaining frames of the current timed phase.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// True once the player acknowledged the result.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ===== frame driver =====

    /// Advances the session by one frame.
    pub fn tick(&mut self) {
        if self.result.is_some() {
            return;
        }

        self.player_flash = self.player_flash.saturating_sub(1);
        self.enemy_flash = self.enemy_flash.saturating_sub(1);

        match self.phase {
            Phase::Intro => {
                if self.countdown() {
                    self.menu.reset();
                    self.enter(Phase::PlayerChoose);
                }
            }
            Phase::PlayerChoose => {}
            Phase::PlayerAct => {
                if self.countdown() {
                    self.enter(Phase::CheckEnd);
                }
            }
            Phase::CheckEnd => self.check_end(),
            Phase::EnemyAct => {
                if self.countdown() {
                    self.end_enemy_turn();
                }
            }
            Phase::Flee => {
                if self.countdown() {
                    self.conclude(CombatResult::Flee);
                }
            }
            Phase::Win | Phase::Lose => {}
        }
    }

    // ===== player input =====

    /// Moves the menu cursor. Ignored outside `PlayerChoose`.
    pub fn submit_navigation(&mut self, nav: Navigation) {
        if self.phase != Phase::PlayerChoose {
            return;
        }
        self.menu.navigate(nav);
    }

    /// Leaves the current submenu. Ignored outside `PlayerChoose`.
    pub fn submit_cancel(&mut self) {
        if self.phase != Phase::PlayerChoose {
            return;
        }
        self.menu.cancel();
    }

    /// Confirms the menu entry under the cursor.
    ///
    /// After a result, this acknowledges the end screen instead.
    pub fn submit_confirm(&mut self) {
        if self.result.is_some() {
            self.finished = true;
            return;
        }
        if self.phase != Phase::PlayerChoose {
            return;
        }

        match self.menu.confirm(&self.config.modes) {
            MenuCommand::Commit(action) => self.resolve(action),
            MenuCommand::RequestItems => {
                let items = self.player.loadout().usable_items();
                if let Err(err) = self.menu.open_items(items) {
                    self.reject(err);
                }
            }
            MenuCommand::Opened(_) | MenuCommand::Ignored => {}
        }
    }

    // ===== action resolution =====

    fn resolve(&mut self, action: Action) {
        tracing::debug!(round = self.round_num, action = action.as_str(), "resolving player action");
        match action {
            Action::Attack => {
                let (dmg, crit) = self.strike(CombatMode::Melee);
                self.log.push(if crit {
                    BattleMessage::CritAttackForDmg { dmg }
                } else {
                    BattleMessage::AttackForDmg { dmg }
                });
                self.begin_player_act(self.config.timing.attack);
            }
            Action::Defend => {
                self.player_defending = true;
                self.log.push(BattleMessage::DefendStance);
                self.begin_player_act(self.config.timing.defend);
            }
            Action::Skill { skill, mode, cost } => self.resolve_skill(skill, mode, cost),
            Action::Item { item } => self.resolve_item(item),
            Action::Flee => self.resolve_flee(),
        }
    }

    fn resolve_skill(&mut self, skill: SkillId, mode: CombatMode, cost: u32) {
        let available = self.player.stats().mp;
        if cost > 0 && !self.player.stats_mut().use_mp(cost) {
            self.reject(ActionError::InsufficientMana {
                required: cost,
                available,
            });
            return;
        }

        let (dmg, crit) = self.strike(mode);
        self.log.push(if crit {
            BattleMessage::CritSkillDealsDmg { skill, dmg, cost }
        } else {
            BattleMessage::SkillDealsDmg { skill, dmg, cost }
        });
        self.menu.reset();
        self.begin_player_act(self.config.timing.skill);
    }

    fn resolve_item(&mut self, item: ItemId) {
        match self.player.apply_item(&item) {
            Some(effect) => {
                self.log.push(BattleMessage::UsedItem { item, effect });
                self.menu.reset();
                self.begin_player_act(self.config.timing.item);
            }
            None => {
                self.reject(ActionError::ItemConsumeFailed { item });
                let items = self.player.loadout().usable_items();
                self.menu.refresh_items(items);
            }
        }
    }

    fn resolve_flee(&mut self) {
        if self.enemy.is_boss() {
            // Refused without a roll; the turn is still spent.
            self.reject(ActionError::FleeRefusedBoss);
            self.begin_player_act(self.config.timing.flee_fail);
            return;
        }

        if self.rng.chance_percent(self.config.balance.flee_chance) {
            self.log.push(BattleMessage::FledSuccess);
            self.timer = self.config.timing.flee_success;
            self.enter(Phase::Flee);
        } else {
            self.log.push(BattleMessage::FledFail);
            self.begin_player_act(self.config.timing.flee_fail);
        }
    }

    /// Rolls and applies a player hit in the given mode. Returns (damage, critical).
    fn strike(&mut self, mode: CombatMode) -> (u32, bool) {
        let profile = *self.config.modes.profile(mode);
        let balance = &self.config.balance;

        let stats = self.player.stats();
        let loadout = self.player.loadout();
        let stat_bonus =
            (stats.stat(profile.stat) + loadout.stat_bonus(profile.stat)) * balance.stat_scaling;
        let weapon_bonus = loadout.equipped_weapon().map_or(0, |weapon| weapon.attack);
        let target_def = self.enemy.total_defense();

        let mut dmg = calculate_damage(profile.base_damage, stat_bonus, weapon_bonus, target_def);
        let crit = roll_critical(stats.dex, balance, &mut self.rng);
        if crit {
            dmg = apply_critical(dmg);
        }

        self.enemy.stats_mut().apply_damage(dmg);
        self.enemy.take_hit();
        self.enemy_flash = self.config.timing.hit_flash;

        tracing::debug!(
            mode = %mode,
            base = profile.base_damage,
            stat_bonus,
            weapon_bonus,
            target_def,
            dmg,
            crit,
            enemy_hp = self.enemy.stats().hp,
            "player hit resolved"
        );
        (dmg, crit)
    }

    fn reject(&mut self, err: ActionError) {
        tracing::debug!(
            round = self.round_num,
            code = err.error_code(),
            severity = err.severity().as_str(),
            error = %err,
            "player action rejected"
        );
        self.log.push(BattleMessage::from(&err));
    }

    fn begin_player_act(&mut self, frames: u32) {
        self.timer = frames;
        self.enter(Phase::PlayerAct);
    }

    // ===== phase machinery =====

    fn check_end(&mut self) {
        if !self.enemy.is_alive() {
            self.log.push(BattleMessage::Victory);
            if self.reward.is_none() {
                let report = RewardSettlement::settle(
                    &mut *self.player,
                    &*self.enemy,
                    self.quests.as_deref_mut(),
                    &mut self.log,
                );
                self.reward = Some(report);
            }
            self.conclude(CombatResult::Win);
        } else if !self.player.is_alive() {
            self.log.push(BattleMessage::Defeated);
            self.conclude(CombatResult::Lose);
        } else {
            self.timer = self.config.timing.enemy;
            self.enter(Phase::EnemyAct);
            self.enemy_turn();
        }
    }

    fn enemy_turn(&mut self) {
        let intent = EnemyTactician::decide(self.enemy.stats(), &self.config.balance, &mut self.rng);
        let enemy = self.enemy.kind().to_owned();
        match intent {
            EnemyIntent::Defend => {
                self.log.push(BattleMessage::EnemyDefend { enemy });
            }
            EnemyIntent::Attack => {
                let dmg = mitigate_enemy_attack(
                    self.enemy.atk_damage(),
                    self.player_defending,
                    self.player.total_defense(),
                );
                self.player.stats_mut().apply_damage(dmg);
                self.player_flash = self.config.timing.hit_flash;
                tracing::debug!(
                    dmg,
                    defending = self.player_defending,
                    player_hp = self.player.stats().hp,
                    "enemy hit resolved"
                );
                self.log.push(BattleMessage::EnemyAttacks { enemy, dmg });
            }
        }
    }

    fn end_enemy_turn(&mut self) {
        if !self.player.is_alive() {
            self.log.push(BattleMessage::Defeated);
            self.conclude(CombatResult::Lose);
            return;
        }
        self.round_num += 1;
        self.player_defending = false;
        self.menu.reset();
        self.enter(Phase::PlayerChoose);
    }

    fn conclude(&mut self, result: CombatResult) {
        self.enter(result.into());
        self.result = Some(result);
        tracing::info!(
            result = %result,
            rounds = self.round_num,
            player_hp = self.player.stats().hp,
            enemy_hp = self.enemy.stats().hp,
            "combat ended"
        );
    }

    /// Decrements the phase timer. True when it runs out.
    fn countdown(&mut self) -> bool {
        self.timer = self.timer.saturating_sub(1);
        self.timer == 0
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, round = self.round_num, "phase transition");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::env::ScriptedRng;
    use crate::state::{EnemyState, EnemyTemplate, ItemCatalog, PlayerState};
    use std::sync::Arc;

    fn player() -> PlayerState {
        PlayerState::fresh("hero", Arc::new(ItemCatalog::new()))
    }

    fn wolf() -> EnemyState {
        EnemyState::from_template(&EnemyTemplate {
            id: "wolf".into(),
            max_hp: 20,
            str: 3,
            dex: 2,
            int: 0,
            def: 1,
            atk_damage: 5,
            xp_reward: 15,
            gold_reward: 8,
            drops: Vec::new(),
            is_boss: false,
        })
    }

    #[test]
    fn intro_counts_down_to_player_choose() {
        let mut hero = player();
        let mut enemy = wolf();
        let mut session = CombatSession::start(&mut hero, &mut enemy, ScriptedRng::never());
        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.round_num(), 1);
        assert!(session.battle_log().contains_key("wild_appears"));
        for _ in 0..TimingConfig::DEFAULT_INTRO - 1 {
            session.tick();
        }
        assert_eq!(session.phase(), Phase::Intro);
        session.tick();
        assert_eq!(session.phase(), Phase::PlayerChoose);
    }

    #[test]
    fn input_outside_player_choose_is_ignored() {
        let mut hero = player();
        let mut enemy = wolf();
        let mut session = CombatSession::start(&mut hero, &mut enemy, ScriptedRng::never());
        let before = session.menu().clone();
        session.submit_navigation(Navigation::Down);
        session.submit_confirm();
        session.submit_cancel();
        assert_eq!(session.menu(), &before);
        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(session.battle_log().len(), 1);
    }

    #[test]
    fn hit_flash_counts_down_each_tick() {
        let mut hero = player();
        let mut enemy = wolf();
        let mut session = CombatSession::start(&mut hero, &mut enemy, ScriptedRng::never())
            .with_config(CombatConfig::new().with_timing(TimingConfig {
                intro: 1,
                ..TimingConfig::default()
            }));
        session.tick();
        session.submit_confirm();
        assert_eq!(session.enemy_flash(), 15);
        session.tick();
        assert_eq!(session.enemy_flash(), 14);
        assert_eq!(session.enemy().hit_flash, crate::state::ENEMY_HIT_FLASH);
    }
}
