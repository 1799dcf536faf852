//! Submitted view: read-only summary of the last submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the submission summary
///
/// The message line is rendered only when the submitted message was
/// non-empty.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(record) = &app.state.submission else {
        return;
    };

    let label = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("First Name: ", label),
            Span::raw(record.first_name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Last Name: ", label),
            Span::raw(record.last_name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label),
            Span::raw(record.email.as_str()),
        ]),
    ];

    if let Some(message) = record.message_display() {
        for (i, text) in message.lines().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled("Message: ", label),
                    Span::raw(text.to_string()),
                ]));
            } else {
                lines.push(Line::from(text.to_string()));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(
            "Submitted at {}",
            record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        Style::default().fg(Color::DarkGray),
    ));

    let block = Block::default()
        .title(" Submission ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
