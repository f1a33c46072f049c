//! Quiz-battle scene: question, options, countdown, health bars.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::widgets::{centered_rect, render_countdown, render_feedback, render_health};
use crate::bank::Language;
use crate::constants::MAX_HEALTH;
use crate::engine::LevelSession;

pub fn render_battle(
    frame: &mut Frame,
    area: Rect,
    session: &LevelSession,
    language: Language,
    highlighted_option: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // health bars
            Constraint::Length(3), // countdown + score
            Constraint::Length(4), // prompt
            Constraint::Min(6),    // options
            Constraint::Length(3), // feedback
            Constraint::Length(1), // help
        ])
        .split(area);

    let bars = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);
    render_health(frame, bars[0], "You", session.player_health(), MAX_HEALTH);
    render_health(frame, bars[1], "Opponent", session.opponent_health(), MAX_HEALTH);

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    let limit = session
        .current_question()
        .map(|q| q.time_limit_seconds)
        .unwrap_or(0);
    render_countdown(frame, status[0], session.time_remaining(), limit);
    let score = Paragraph::new(format!(
        "Score {}   Streak {}   Q {}/{}",
        session.score(),
        session.streak(),
        session.current_question_index() + 1,
        session.question_count()
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(score, status[1]);

    if let Some(question) = session.current_question() {
        let prompt = Paragraph::new(question.prompt.get(language))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", question.difficulty.name())),
            );
        frame.render_widget(prompt, chunks[2]);

        let items: Vec<ListItem> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let prefix = if i == highlighted_option { "> " } else { "  " };
                let style = if i == highlighted_option {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{}{}. {}", prefix, i + 1, option.get(language))).style(style)
            })
            .collect();
        let options = List::new(items).block(Block::default().borders(Borders::ALL));
        frame.render_widget(options, chunks[3]);
    }

    if let Some(outcome) = session.feedback_outcome() {
        render_feedback(frame, chunks[4], outcome);
    }

    let help = Paragraph::new("[1-4/↑↓+Enter] Answer  [p] Pause  [r] Restart  [Esc] Quit level")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);

    if session.is_paused() {
        render_pause_overlay(frame, area);
    }
}

fn render_pause_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup);
    let text = Paragraph::new("Paused. Press [p] to resume")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(text, popup);
}
