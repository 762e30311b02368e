//! User interface rendering.

mod chart;
mod keymap_bar;
mod layout;
mod status_bar;
mod theme;

use std::time::Instant;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use layout::ChartLayout;
pub use theme::ThemeColors;

/// Draw the UI and remember the chart layout for mouse hit testing.
pub fn draw(f: &mut Frame<'_>, app: &mut App, now: Instant) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let title = app.title();
    let layout = chart::draw_chart(f, chunks[0], &app.chart, &app.config, &title, now, &colors);
    app.layout = Some(layout);

    status_bar::draw_status(f, chunks[1], &app.status, app.chart.is_animating(now), &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
