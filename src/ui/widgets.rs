//! Small drawing helpers shared by the scenes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::engine::RoundOutcome;

/// A centered sub-rectangle, sized in percent of the parent.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Countdown gauge for the current question. Turns red in the last seconds.
pub fn render_countdown(frame: &mut Frame, area: Rect, remaining: u32, limit: u32) {
    let ratio = if limit == 0 {
        0.0
    } else {
        f64::from(remaining) / f64::from(limit)
    };
    let color = if remaining <= 5 {
        Color::Red
    } else if ratio < 0.5 {
        Color::Yellow
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Time "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}s", remaining));
    frame.render_widget(gauge, area);
}

/// Health bar for battle mode.
pub fn render_health(frame: &mut Frame, area: Rect, title: &str, health: u32, max: u32) {
    let ratio = f64::from(health) / f64::from(max.max(1));
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", health, max));
    frame.render_widget(gauge, area);
}

/// One-line verdict shown during the feedback window.
pub fn render_feedback(frame: &mut Frame, area: Rect, outcome: RoundOutcome) {
    let (text, color) = if outcome.is_correct {
        (
            format!("Correct! +{} points (streak {})", outcome.points_awarded, outcome.new_streak),
            Color::Green,
        )
    } else {
        ("Not quite! Streak lost".to_string(), Color::Red)
    };
    let banner = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}
