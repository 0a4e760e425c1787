//! Frame loop for the interactive battle screen.
//!
//! Each frame drains pending key presses into the session's input verbs,
//! advances the session by one tick and redraws.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    app::Battle,
    input::{self, KeyAction},
    presentation::{i18n::Localizer, terminal::Tui, ui},
};

pub const FRAME_INTERVAL_MS: u64 = 16;

/// How the loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The result was acknowledged.
    Finished,
    /// The user quit mid-battle.
    Quit,
}

pub struct EventLoop<'t> {
    text: Localizer<'t>,
    frame_interval: Duration,
}

impl<'t> EventLoop<'t> {
    pub fn new(text: Localizer<'t>, fast: bool) -> Self {
        let frame_interval = if fast {
            Duration::from_millis(1)
        } else {
            Duration::from_millis(FRAME_INTERVAL_MS)
        };
        Self {
            text,
            frame_interval,
        }
    }

    pub async fn run(&self, terminal: &mut Tui, battle: &mut Battle<'_>) -> Result<LoopExit> {
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        ui::render(terminal, battle, &self.text)?;

        loop {
            frames.tick().await;

            if self.drain_input(terminal, battle)? {
                tracing::info!(phase = %battle.phase(), "battle abandoned by user");
                return Ok(LoopExit::Quit);
            }
            if battle.is_finished() {
                return Ok(LoopExit::Finished);
            }

            battle.tick();
            ui::render(terminal, battle, &self.text)?;
        }
    }

    /// Applies every pending key press. Returns `true` on quit.
    fn drain_input(&self, terminal: &mut Tui, battle: &mut Battle<'_>) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if apply_key(battle, input::handle_key(key)) {
                        return Ok(true);
                    }
                }
                TermEvent::Resize(_, _) => {
                    terminal.autoresize()?;
                }
                _ => {}
            }
        }
        Ok(false)
    }
}

/// Forwards a key command to the session. Returns `true` on quit.
pub fn apply_key(battle: &mut Battle<'_>, key: KeyAction) -> bool {
    match key {
        KeyAction::Quit => return true,
        KeyAction::Navigate(nav) => battle.submit_navigation(nav),
        KeyAction::Confirm => battle.submit_confirm(),
        KeyAction::Cancel => battle.submit_cancel(),
        KeyAction::None => {}
    }
    false
}
