//! Battle screen rendering with Ratatui.
//!
//! Layout, top to bottom: header (round and enemy), the two combatant panels,
//! the action menu beside the battle log, and a footer with key help or the
//! result prompt.
use anyhow::Result;
use combat_core::{
    CombatantStats, EnemyProfile, LogCategory, MainOption, MenuLevel, Phase, PlayerProfile,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListDirection, ListItem, Paragraph},
};
use strum::VariantArray;

use crate::app::Battle;
use crate::presentation::{
    i18n::{Label, Localizer},
    terminal::Tui,
};

pub const LOG_PANEL_HEIGHT: u16 = 8;

pub fn render(terminal: &mut Tui, battle: &Battle<'_>, text: &Localizer<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, battle, text))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, battle: &Battle<'_>, text: &Localizer<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(LOG_PANEL_HEIGHT),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], battle, text);

    let combatants = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_player(frame, combatants[0], battle);
    render_enemy(frame, combatants[1], battle, text);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);
    render_menu(frame, lower[0], battle, text);
    render_log(frame, lower[1], battle, text);

    render_footer(frame, chunks[3], battle, text);
}

fn render_header(frame: &mut Frame, area: Rect, battle: &Battle<'_>, text: &Localizer<'_>) {
    let enemy = battle.enemy();
    let title = text.enemy_title(enemy.kind(), enemy.is_boss());
    let line = Line::from(vec![
        Span::styled(
            text.round(battle.round_num()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  |  "),
        Span::styled(
            title,
            Style::default()
                .fg(if enemy.is_boss() { Color::LightRed } else { Color::Cyan })
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("skirmish")),
        area,
    );
}

fn render_player(frame: &mut Frame, area: Rect, battle: &Battle<'_>) {
    let player = battle.player();
    let stats = &player.stats;
    let mut title = format!("{}  Lv{}", player.name, stats.level);
    if battle.is_player_defending() {
        title.push_str("  [DEF]");
    }
    let block = flash_block(title, battle.player_flash());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(hp_gauge(stats), rows[0]);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(ratio(stats.mp, stats.max_mp))
            .label(format!("MP {}/{}", stats.mp, stats.max_mp)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(format!(
            "STR {}  DEX {}  INT {}  DEF {}  Gold {}",
            stats.str,
            stats.dex,
            stats.int,
            stats.def,
            player.gold()
        )),
        rows[2],
    );
}

fn render_enemy(frame: &mut Frame, area: Rect, battle: &Battle<'_>, text: &Localizer<'_>) {
    let enemy = battle.enemy();
    let stats = &enemy.stats;
    let block = flash_block(
        text.enemy_title(enemy.kind(), enemy.is_boss()),
        battle.enemy_flash(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(hp_gauge(stats), rows[0]);
    frame.render_widget(
        Paragraph::new(format!(
            "STR {}  DEX {}  DEF {}  ATK {}",
            stats.str,
            stats.dex,
            stats.def,
            enemy.atk_damage()
        )),
        rows[1],
    );
}

fn render_menu(frame: &mut Frame, area: Rect, battle: &Battle<'_>, text: &Localizer<'_>) {
    let menu = battle.menu();
    let active = battle.phase() == Phase::PlayerChoose;

    let (title, entries, selected): (String, Vec<String>, usize) = match menu.level() {
        MenuLevel::Main => (
            text.label(Label::Actions),
            MainOption::VARIANTS
                .iter()
                .map(|option| text.option(*option))
                .collect(),
            menu.cursor(),
        ),
        MenuLevel::Skill => {
            let modes = &battle.config().modes;
            (
                text.label(Label::Skills),
                menu.skills()
                    .iter()
                    .map(|skill| text.skill_entry(skill, skill.cost(modes)))
                    .collect(),
                menu.cursor(),
            )
        }
        MenuLevel::Item => {
            let entries = if menu.items().is_empty() {
                vec![text.label(Label::NoItems)]
            } else {
                menu.items()
                    .iter()
                    .map(|entry| format!("{} x{}", text.item_name(&entry.item), entry.quantity))
                    .collect()
            };
            (text.label(Label::Items), entries, menu.item_cursor())
        }
    };

    let items: Vec<ListItem> = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if active && index == selected {
                ListItem::new(format!("> {entry}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {entry}"))
                    .style(Style::default().fg(if active { Color::White } else { Color::DarkGray }))
            }
        })
        .collect();

    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_log(frame: &mut Frame, area: Rect, battle: &Battle<'_>, text: &Localizer<'_>) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = battle
        .battle_log()
        .entries()
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(text.message(&entry.message)).style(category_style(entry.category)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(text.label(Label::BattleLog)),
        )
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, battle: &Battle<'_>, text: &Localizer<'_>) {
    let line = match battle.result() {
        Some(result) => Line::from(Span::styled(
            text.continue_prompt(result),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::raw("[WASD/hjkl/Arrows] Move | "),
            Span::raw("[Enter/Space] Confirm | "),
            Span::raw("[Esc] Back | "),
            Span::raw("[q] Quit"),
        ]),
    };

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Panel border that turns red while the combatant's hit flash runs.
fn flash_block(title: String, flash: u32) -> Block<'static> {
    let border = if flash > 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn hp_gauge(stats: &CombatantStats) -> Gauge<'static> {
    let color = match stats.hp_percent() {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };
    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio(stats.hp, stats.max_hp))
        .label(format!("HP {}/{}", stats.hp, stats.max_hp))
}

fn ratio(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        (f64::from(value) / f64::from(max)).clamp(0.0, 1.0)
    }
}

pub fn category_style(category: LogCategory) -> Style {
    match category {
        LogCategory::Info => Style::default().fg(Color::White),
        LogCategory::PlayerAttack => Style::default().fg(Color::Yellow),
        LogCategory::PlayerGuard => Style::default().fg(Color::LightBlue),
        LogCategory::Recovery => Style::default().fg(Color::LightGreen),
        LogCategory::EnemyGuard => Style::default().fg(Color::LightCyan),
        LogCategory::EnemyAttack => Style::default().fg(Color::LightRed),
        LogCategory::Victory => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LogCategory::Reward => Style::default().fg(Color::Rgb(255, 215, 0)),
        LogCategory::Alert => Style::default().fg(Color::Red),
    }
}
