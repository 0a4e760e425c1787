//! Headless battle runner driven by the autopilot.
//!
//! Log entries are printed as plain text lines as soon as the session logs
//! them. Used for `SKIRMISH_AUTOPLAY` runs and in tests.
use std::io::Write;

use anyhow::Result;
use combat_core::{MenuLevel, Phase};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    app::Battle,
    autopilot::{Autopilot, Plan},
    presentation::{event_loop::apply_key, i18n::Localizer},
};

/// Upper bound on ticks before a headless battle is declared stuck.
pub const MAX_TICKS: u64 = 60 * 60 * 30;

pub struct HeadlessRunner<'t, W> {
    text: Localizer<'t>,
    autopilot: Autopilot,
    frame_interval: Option<Duration>,
    out: W,
    printed: usize,
}

impl<'t, W: Write> HeadlessRunner<'t, W> {
    /// `frame_interval` of `None` runs ticks back to back.
    pub fn new(text: Localizer<'t>, frame_interval: Option<Duration>, out: W) -> Self {
        Self {
            text,
            autopilot: Autopilot::new(),
            frame_interval,
            out,
            printed: 0,
        }
    }

    pub async fn run(&mut self, battle: &mut Battle<'_>) -> Result<()> {
        let mut frames = self.frame_interval.map(|period| {
            let mut frames = time::interval(period);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
            frames
        });

        for _ in 0..MAX_TICKS {
            self.flush_log(battle)?;

            if battle.is_finished() {
                return Ok(());
            }
            if battle.result().is_some() {
                battle.submit_confirm();
                continue;
            }
            if battle.phase() == Phase::PlayerChoose && battle.menu().level() == MenuLevel::Main {
                self.take_turn(battle);
            }

            if let Some(frames) = frames.as_mut() {
                frames.tick().await;
            }
            battle.tick();
        }

        anyhow::bail!("battle did not finish within {} ticks", MAX_TICKS)
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn take_turn(&self, battle: &mut Battle<'_>) {
        let plan = self
            .autopilot
            .decide(battle.player(), battle.menu(), battle.config());
        tracing::debug!(?plan, round = battle.round_num(), "autopilot turn");
        for key in self.autopilot.keys(plan, battle.menu()) {
            apply_key(battle, key);
        }

        // A rejected choice leaves the turn open; fall back to a plain attack.
        if battle.phase() == Phase::PlayerChoose {
            battle.submit_cancel();
            for key in self.autopilot.keys(Plan::Attack, battle.menu()) {
                apply_key(battle, key);
            }
        }
    }

    fn flush_log(&mut self, battle: &Battle<'_>) -> Result<()> {
        for entry in battle.battle_log().since(self.printed) {
            writeln!(
                self.out,
                "[{:>2}] {}",
                battle.round_num(),
                self.text.message(&entry.message)
            )?;
        }
        self.printed = battle.battle_log().len();
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use combat_content::ContentFactory;
    use combat_core::{CombatResult, CombatSession, ItemId, PcgRng, PlayerState};

    use super::*;
    use crate::config::Lang;

    #[tokio::test]
    async fn autopilot_beats_a_goblin() {
        let bundle = ContentFactory::bundled().load_all().unwrap();
        let mut player = PlayerState::fresh("hero", bundle.catalog.clone());
        let mut goblin = bundle.enemies.spawn("goblin").unwrap();

        let output = {
            let mut battle: Battle<'_> =
                CombatSession::start(&mut player, &mut goblin, PcgRng::seeded(7))
                    .with_config(bundle.config.clone())
                    .with_skills(bundle.skills.clone());
            let mut runner =
                HeadlessRunner::new(Localizer::new(Lang::En, &bundle.catalog), None, Vec::new());
            runner.run(&mut battle).await.unwrap();
            assert_eq!(battle.result(), Some(CombatResult::Win));
            assert!(battle.is_finished());
            String::from_utf8(runner.into_output()).unwrap()
        };

        assert!(output.starts_with("[ 1] A wild Goblin appears!"));
        assert!(output.contains("Victory!"));
        assert!(output.contains("+10 XP  +5 Gold"));
        assert!(player.inventory.has_item(&ItemId::from("goblin_ear")));
    }

    #[tokio::test]
    async fn caster_falls_back_to_attacks_when_mana_runs_out() {
        let bundle = ContentFactory::bundled().load_all().unwrap();
        let mut player = PlayerState::fresh("hero", bundle.catalog.clone());
        player.stats.int = 9;
        player.stats.mp = 8;
        let mut uruk = bundle.enemies.spawn("uruk_berserker").unwrap();

        let mut battle: Battle<'_> = CombatSession::start(&mut player, &mut uruk, PcgRng::seeded(1))
            .with_config(bundle.config.clone())
            .with_skills(bundle.skills.clone());
        let mut runner =
            HeadlessRunner::new(Localizer::new(Lang::En, &bundle.catalog), None, Vec::new());
        runner.run(&mut battle).await.unwrap();

        assert!(battle.result().is_some());
        assert!(battle.battle_log().contains_key("skill_deals_dmg")
            || battle.battle_log().contains_key("crit_skill_deals_dmg"));
        assert!(
            battle.battle_log().contains_key("attack_for_dmg")
                || battle.battle_log().contains_key("crit_attack_for_dmg")
        );
    }
}
