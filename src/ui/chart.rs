//! Scatter chart rendering.

use std::time::Instant;

use super::{ChartLayout, ThemeColors};
use crate::chart::{AxisTick, ChartState, LabelState, Tooltip};
use crate::util::ChartConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Clear, Padding, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the whole chart into `area` and return where everything landed.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartState,
    config: &ChartConfig,
    title: &str,
    now: Instant,
    colors: &ThemeColors,
) -> ChartLayout {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = ChartLayout::compute(inner, &config.margins);
    if !layout.is_drawable() {
        let para = Paragraph::new("Terminal too small")
            .style(Style::default().fg(colors.error))
            .alignment(Alignment::Center);
        f.render_widget(para, inner);
        return layout;
    }

    let positions = chart.point_positions(now);
    draw_points(f, &layout, chart, &positions, config.circle_radius, colors);
    draw_x_axis(f, &layout, &chart.axis_ticks_x(now, config.x_ticks), colors);
    draw_y_axis(f, &layout, &chart.axis_ticks_y(now, config.y_ticks), colors);
    draw_labels(f, &layout.x_labels, &chart.label_states_x(), colors);
    draw_labels(f, &layout.y_labels, &chart.label_states_y(), colors);

    if let (Some(index), Some(tooltip)) = (chart.hovered(), chart.hovered_tooltip()) {
        if let Some(&unit) = positions.get(index) {
            let anchor = layout.to_cell(unit);
            draw_tooltip(f, inner, anchor, config.tooltip_offset, &tooltip, colors);
        }
    }

    layout
}

fn draw_points(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    chart: &ChartState,
    positions: &[(f64, f64)],
    radius: f64,
    colors: &ThemeColors,
) {
    // Canvas units: one per column, two per row, so circles come out round.
    let width = layout.plot.width.saturating_sub(1).max(1) as f64;
    let height = (layout.plot.height.saturating_sub(1).max(1) * 2) as f64;
    let hovered = chart.hovered();
    let records = chart.data().records();

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for (i, &(ux, uy)) in positions.iter().enumerate() {
                let color = if hovered == Some(i) {
                    colors.highlight
                } else {
                    colors.circle
                };
                ctx.draw(&Circle {
                    x: ux * width,
                    y: (1.0 - uy) * height,
                    radius,
                    color,
                });
            }
            ctx.layer();
            for (record, &(ux, uy)) in records.iter().zip(positions) {
                let half = record.abbr.width() as f64 / 2.0;
                ctx.print(
                    (ux * width - half).max(0.0),
                    (1.0 - uy) * height,
                    Span::styled(
                        record.abbr.clone(),
                        Style::default()
                            .fg(colors.circle_text)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, layout.plot);
}

fn draw_x_axis(f: &mut Frame<'_>, layout: &ChartLayout, ticks: &[AxisTick], colors: &ThemeColors) {
    let area = layout.x_axis;
    if area.height == 0 {
        return;
    }
    let style = Style::default().fg(colors.axis);
    let buf = f.buffer_mut();

    for col in area.x..area.x + area.width {
        if let Some(cell) = buf.cell_mut((col, area.y)) {
            cell.set_char('─').set_style(style);
        }
    }
    if let Some(cell) = buf.cell_mut((layout.y_axis.x + layout.y_axis.width.saturating_sub(1), area.y)) {
        cell.set_char('└').set_style(style);
    }

    let span = area.width.saturating_sub(1) as f64;
    let mut next_free = area.x;
    for tick in ticks {
        let col = area.x + (tick.position * span).round() as u16;
        if let Some(cell) = buf.cell_mut((col, area.y)) {
            cell.set_char('┬').set_style(style);
        }
        if area.height < 2 {
            continue;
        }
        let width = tick.label.width() as u16;
        let start = col.saturating_sub(width / 2).max(area.x);
        let end = start + width;
        if start < next_free || end > area.x + area.width {
            continue;
        }
        buf.set_string(start, area.y + 1, &tick.label, tick_style(tick, style, colors));
        next_free = end + 1;
    }
}

fn draw_y_axis(f: &mut Frame<'_>, layout: &ChartLayout, ticks: &[AxisTick], colors: &ThemeColors) {
    let area = layout.y_axis;
    if area.width == 0 {
        return;
    }
    let style = Style::default().fg(colors.axis);
    let line_col = area.x + area.width - 1;
    let buf = f.buffer_mut();

    for row in area.y..area.y + area.height {
        if let Some(cell) = buf.cell_mut((line_col, row)) {
            cell.set_char('│').set_style(style);
        }
    }

    let span = area.height.saturating_sub(1) as f64;
    for tick in ticks {
        let row = area.y + (tick.position * span).round() as u16;
        if let Some(cell) = buf.cell_mut((line_col, row)) {
            cell.set_char('┤').set_style(style);
        }
        let width = (tick.label.width() as u16).min(area.width.saturating_sub(2));
        let start = line_col.saturating_sub(width + 1);
        buf.set_stringn(start, row, &tick.label, width as usize, tick_style(tick, style, colors));
    }
}

/// Labels of a moving axis are dimmed until it settles.
fn tick_style(tick: &AxisTick, axis: Style, colors: &ThemeColors) -> Style {
    if tick.moving {
        axis.fg(colors.label_inactive)
    } else {
        axis
    }
}

fn draw_labels<F: Copy>(
    f: &mut Frame<'_>,
    rects: &[(Rect, F)],
    labels: &[LabelState<F>],
    colors: &ThemeColors,
) {
    for ((rect, _), label) in rects.iter().zip(labels) {
        let style = if label.active {
            Style::default()
                .fg(colors.label_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors.label_inactive)
        };
        f.buffer_mut()
            .set_stringn(rect.x, rect.y, label.text, rect.width as usize, style);
    }
}

fn draw_tooltip(
    f: &mut Frame<'_>,
    bounds: Rect,
    anchor: (u16, u16),
    offset: (i16, i16),
    tooltip: &Tooltip,
    colors: &ThemeColors,
) {
    let text_width = tooltip.lines().iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = (text_width + 4).min(bounds.width);
    let height = 5u16.min(bounds.height);
    if width == 0 || height == 0 {
        return;
    }

    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;

    let preferred_x = anchor.0 as i32 + offset.0 as i32;
    let x = if preferred_x + width as i32 <= right as i32 {
        preferred_x
    } else {
        anchor.0 as i32 - offset.0 as i32 - width as i32
    };
    let x = x.clamp(bounds.x as i32, (right - width) as i32) as u16;

    let preferred_y = anchor.1 as i32 + offset.1 as i32 - height as i32 + 1;
    let y = preferred_y.clamp(bounds.y as i32, (bottom - height) as i32) as u16;

    let area = Rect::new(x, y, width, height);
    let lines: Vec<Line<'_>> = tooltip
        .lines()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text.to_string(), style))
        })
        .collect();

    f.render_widget(Clear, area);
    let para = Paragraph::new(lines)
        .style(Style::default().fg(colors.tooltip_fg).bg(colors.tooltip_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border).bg(colors.tooltip_bg))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(colors.tooltip_bg)),
        );
    f.render_widget(para, area);
}
