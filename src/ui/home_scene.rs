//! Home screen: game mode and language selection.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::GameMode;
use crate::bank::Language;

pub struct HomeView {
    pub selected_mode: usize,
    pub selected_language: usize,
    pub picking_language: bool,
    pub combined_completion: f64,
}

pub fn render_home(frame: &mut Frame, area: Rect, view: &HomeView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from("SHIKSHA"),
        Line::from("Mathematics & Science Practice"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_choice_list(
        frame,
        body[0],
        " Game ",
        &GameMode::ALL.map(|m| m.name()),
        view.selected_mode,
        !view.picking_language,
    );
    render_choice_list(
        frame,
        body[1],
        " Language ",
        &Language::ALL.map(|l| l.name()),
        view.selected_language,
        view.picking_language,
    );

    let completion = Paragraph::new(format!(
        "Overall completion: {:.0}%",
        view.combined_completion
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(completion, chunks[2]);

    let help = Paragraph::new("[↑/↓] Choose  [Tab] Switch column  [Enter] Play  [q] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn render_choice_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[&str],
    selected: usize,
    active: bool,
) {
    let border = if active { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prefix = if i == selected { "> " } else { "  " };
            let style = if i == selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, entry)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}
