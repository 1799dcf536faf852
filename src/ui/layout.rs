//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: header, content, status bar
pub fn create_layout(area: Rect, show_status_bar: bool) -> (Rect, Rect, Rect) {
    let status_height = if show_status_bar { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Min(0),                // Content
            Constraint::Length(status_height), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " Contact Form ",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

/// Draw the status bar with key hints and the invalid-field count
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let invalid = app.state.errors.len();
    let status = if invalid == 0 {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!(" ✗ {invalid} invalid "),
            Style::default().fg(Color::Red),
        )
    };
    spans.push(status);

    spans.push(Span::styled(
        view_hints(app.state.current_view),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn view_hints(view: View) -> &'static str {
    match view {
        View::Editing => "Tab: next field  Shift+Tab: previous  Enter: submit  Esc: quit",
        View::Submitted => "q: quit",
    }
}
