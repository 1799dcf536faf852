//! Editing view: input fields, submit button, inline error list

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Draw the editable contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = super::accent_color(&app.config);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First Name
            Constraint::Length(3),             // Last Name
            Constraint::Length(3),             // Email
            Constraint::Length(5),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Errors
        ])
        .split(area);

    for (index, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            app.state.form.field(*id),
            app.state.form.active_field() == index,
            app.state.errors.contains_key(id),
            accent,
        );
    }

    draw_submit_button(frame, chunks[4], app);
    draw_errors(frame, chunks[5], app);
}

/// The sole button of the form
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area)[0];

    render_button(
        frame,
        button_area,
        "Submit",
        app.state.form.is_submit_row_active(),
    );
}

/// One line per invalid field, in field order
fn draw_errors(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.errors.is_empty() {
        return;
    }

    let lines: Vec<Line> = app
        .state
        .errors
        .values()
        .map(|err| Line::styled(format!("Error: {err}"), Style::default().fg(Color::Red)))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
