//! Level selection: locks, badges, best scores.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::GameMode;
use crate::bank::{Language, QuestionBank};
use crate::engine::{Badge, ProgressTracker};

pub fn render_level_select(
    frame: &mut Frame,
    area: Rect,
    bank: &QuestionBank,
    tracker: &ProgressTracker,
    mode: GameMode,
    language: Language,
    selected: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(
            " {} ({:.0}% complete) ",
            mode.name(),
            tracker.completion_percent()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let items: Vec<ListItem> = bank
        .levels()
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let number = level.level_number;
            let unlocked = tracker.is_level_unlocked(number);
            let record = tracker.record(number);

            let status = if !unlocked {
                "🔒 locked".to_string()
            } else if record.completed {
                format!("best {}  {}", record.best_score, badge_label(record.badge))
            } else {
                "new".to_string()
            };
            let text = format!(
                "{}Level {}  {:<22} {}",
                if i == selected { "> " } else { "  " },
                number,
                level.title.get(language),
                status
            );
            let style = if !unlocked {
                Style::default().fg(Color::DarkGray)
            } else if i == selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);

    let help = Paragraph::new("[↑/↓] Choose  [Enter] Start  [Esc] Back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}

fn badge_label(badge: Badge) -> &'static str {
    match badge {
        Badge::Gold => "★ Gold",
        Badge::Silver => "★ Silver",
        Badge::Bronze => "★ Bronze",
        Badge::None => "",
    }
}
