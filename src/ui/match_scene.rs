//! Tile-match scene: the drag board with the answer token and option slots.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{render_countdown, render_feedback};
use crate::bank::Language;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::matching::MatchGame;

pub fn render_match(frame: &mut Frame, area: Rect, game: &MatchGame, language: Language) {
    let session = game.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // countdown + score
            Constraint::Length(3), // prompt
            Constraint::Min(8),    // board
            Constraint::Length(3), // feedback
            Constraint::Length(1), // help
        ])
        .split(area);

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);
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
            .block(Block::default().borders(Borders::ALL).title(" Drag the tile to your answer "));
        frame.render_widget(prompt, chunks[1]);
    }

    render_board(frame, chunks[2], game, language);

    if let Some(outcome) = session.feedback_outcome() {
        render_feedback(frame, chunks[3], outcome);
    }

    let help = Paragraph::new("[↑↓←→] Move tile  [Space] Drop  [p] Pause  [r] Restart  [Esc] Quit level")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

/// Board coordinates are abstract unit cells; scale them into the rect.
fn render_board(frame: &mut Frame, area: Rect, game: &MatchGame, language: Language) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let scale_x = f64::from(inner.width.saturating_sub(1)) / BOARD_WIDTH;
    let scale_y = f64::from(inner.height.saturating_sub(1)) / BOARD_HEIGHT;
    let project = |x: f64, y: f64| -> (u16, u16) {
        (
            inner.x + (x * scale_x).round() as u16,
            inner.y + (y * scale_y).round() as u16,
        )
    };

    let Some(question) = game.session().current_question() else {
        return;
    };

    // Option slots along the bottom.
    for slot in game.targets() {
        let (x, y) = project(slot.position.x, slot.position.y);
        let label = question
            .options
            .get(slot.option_index)
            .map(|o| o.get(language))
            .unwrap_or("");
        let text = format!("[ {} ]", label);
        let width = (text.chars().count() as u16).min(inner.width);
        let slot_area = Rect {
            x: x.saturating_sub(width / 2).max(inner.x),
            y: y.min(inner.y + inner.height - 1),
            width,
            height: 1,
        };
        let widget = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
        frame.render_widget(widget, slot_area.intersection(inner));
    }

    // The draggable token.
    let token = game.token();
    let (tx, ty) = project(token.x, token.y);
    let token_area = Rect {
        x: tx.min(inner.x + inner.width - 1),
        y: ty.min(inner.y + inner.height - 1),
        width: 3.min(inner.width),
        height: 1,
    };
    let widget = Paragraph::new("◆")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(widget, token_area.intersection(inner));
}
