//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod summary;

use crate::app::App;
use crate::config::TuiConfig;
use crate::state::View;
use ratatui::{style::Color, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let show_status_bar = app.config.status_bar_enabled();

    let (header_area, content_area, status_area) = layout::create_layout(area, show_status_bar);

    layout::draw_header(frame, header_area);

    match app.state.current_view {
        View::Editing => form::draw(frame, content_area, app),
        View::Submitted => summary::draw(frame, content_area, app),
    }

    if show_status_bar {
        layout::draw_status_bar(frame, status_area, app);
    }
}

/// Accent color for the focused field, from config when set
fn accent_color(config: &TuiConfig) -> Color {
    config
        .accent_color
        .as_deref()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Color::Cyan)
}
