//! End-of-session results.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets::centered_rect;
use crate::engine::{Badge, SessionEnd, SessionOutcome};

pub fn render_results(frame: &mut Frame, area: Rect, end: &SessionEnd) {
    let popup = centered_rect(60, 50, area);
    let badge = Badge::for_accuracy(end.accuracy_percent);

    let (headline, color) = match end.outcome {
        SessionOutcome::Completed => ("Level complete!", Color::Green),
        SessionOutcome::Failed => ("Defeated! Try again", Color::Red),
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score:    {}", end.final_score)),
        Line::from(format!("Accuracy: {:.0}%", end.accuracy_percent)),
    ];
    if badge != Badge::None {
        lines.push(Line::styled(
            format!("Badge:    {}", badge.name()),
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "[Enter] Level select   [r] Replay",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Level {} ", end.level_number))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, popup);
}
