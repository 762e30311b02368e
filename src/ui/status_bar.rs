//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    animating: bool,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::raw(status.to_string())];
    if animating {
        spans.push(Span::styled("  ~", Style::default().fg(colors.heading)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
