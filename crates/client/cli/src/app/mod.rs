//! Glue code tying content, the combat session, and the terminal UI together.
use std::io;

use anyhow::{Context, Result};
use combat_content::{ContentBundle, ContentFactory};
use combat_core::{
    CombatResult, CombatSession, EnemyState, ItemId, PcgRng, PlayerState, RewardReport,
};
use tokio::time::Duration;

use crate::config::CliConfig;
use crate::presentation::{
    EventLoop, HeadlessRunner, Localizer, LoopExit, event_loop::FRAME_INTERVAL_MS,
    terminal::Screen,
};
use crate::quests::QuestLog;

/// The session type the client drives.
pub type Battle<'a> = CombatSession<'a, PlayerState, EnemyState, PcgRng>;

/// Frames an escaped enemy waits before it can engage again.
pub const FLEE_COOLDOWN_FRAMES: u32 = 180;

/// Consumables the hero carries into every battle.
const STARTER_KIT: &[(&str, u32)] = &[("miruvor", 2), ("ent_draught", 1)];
const STARTER_WEAPON: &str = "wood_sword";

pub struct CliApp {
    config: CliConfig,
    content: ContentBundle,
}

pub struct CliAppBuilder {
    config: CliConfig,
}

impl CliAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<CliApp> {
        let factory = match &self.config.content_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let content = factory.load_all()?;
        Ok(CliApp {
            config: self.config,
            content,
        })
    }
}

impl CliApp {
    pub fn builder(config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(config)
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!(enemy = %self.config.enemy, autoplay = self.config.autoplay, "CLI client starting...");

        let CliApp { config, content } = self;

        let mut player = starting_hero(&content)?;
        let mut enemy = content.enemies.spawn(&config.enemy).with_context(|| {
            let known: Vec<&str> = content.enemies.ids().collect();
            format!(
                "unknown enemy '{}' (known: {})",
                config.enemy,
                known.join(", ")
            )
        })?;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "battle seeded");

        let mut quests = QuestLog::new();
        let text = Localizer::new(config.lang, &content.catalog);

        let (result, reward) = {
            let mut battle: Battle<'_> =
                CombatSession::start(&mut player, &mut enemy, PcgRng::seeded(seed))
                    .with_config(content.config.clone())
                    .with_skills(content.skills.clone())
                    .with_quests(&mut quests);

            if config.autoplay {
                let interval = (!config.fast).then(|| Duration::from_millis(FRAME_INTERVAL_MS));
                let mut runner = HeadlessRunner::new(text, interval, io::stdout().lock());
                runner.run(&mut battle).await?;
            } else {
                let mut screen = Screen::enter()?;
                let exit = EventLoop::new(text, config.fast)
                    .run(screen.terminal_mut(), &mut battle)
                    .await?;
                if exit == LoopExit::Quit {
                    tracing::info!("CLI client exiting");
                    return Ok(());
                }
            }

            (battle.result(), battle.reward().cloned())
        };

        match result {
            Some(CombatResult::Flee) => enemy.apply_combat_cooldown(FLEE_COOLDOWN_FRAMES),
            Some(CombatResult::Win) => enemy.deactivate(),
            Some(CombatResult::Lose) | None => {}
        }

        let text = Localizer::new(config.lang, &content.catalog);
        print_summary(&text, result, reward.as_ref(), &player);
        let quest_items: u32 = reward
            .iter()
            .flat_map(|reward| &reward.collected)
            .map(|item| quests.collected(item))
            .sum();
        tracing::info!(
            ?result,
            kills = quests.kills(&config.enemy),
            total_kills = quests.total_kills(),
            quest_items,
            hp = player.stats.hp,
            "CLI client exiting"
        );

        Ok(())
    }
}

/// Level-1 hero with the starter kit in the bag and a weapon in hand.
fn starting_hero(content: &ContentBundle) -> Result<PlayerState> {
    let mut player = PlayerState::fresh("Hero", content.catalog.clone());
    for (item, count) in STARTER_KIT {
        player
            .inventory
            .add_items(&ItemId::from(*item), *count)
            .with_context(|| format!("failed to pack starter item '{item}'"))?;
    }

    let weapon = ItemId::from(STARTER_WEAPON);
    player
        .inventory
        .add_items(&weapon, 1)
        .and_then(|()| player.inventory.equip(&weapon))
        .with_context(|| format!("failed to equip starter weapon '{STARTER_WEAPON}'"))?;

    Ok(player)
}

fn print_summary(
    text: &Localizer<'_>,
    result: Option<CombatResult>,
    reward: Option<&RewardReport>,
    player: &PlayerState,
) {
    let Some(result) = result else {
        return;
    };
    println!("{result:?}");

    if let Some(reward) = reward {
        if reward.leveled_up() {
            println!("{}", text.level_up(reward.new_level));
        }
        for item in &reward.collected {
            println!("{}", text.got_item(item));
        }
        for item in &reward.lost {
            tracing::warn!(item = %item, "drop lost to a full bag");
        }
    }

    println!(
        "HP {}/{}  MP {}/{}  Lv{}  XP {}  Gold {}",
        player.stats.hp,
        player.stats.max_hp,
        player.stats.mp,
        player.stats.max_mp,
        player.stats.level,
        player.stats.xp,
        player.inventory.gold
    );
}
