//! Screen layout of the chart and hit testing against it.

use crate::data::{AxisField, XField, YField};
use crate::util::ChartMargins;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Where each part of the chart landed on screen for the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLayout {
    /// Area holding circles.
    pub plot: Rect,
    /// Axis line and tick labels below the plot.
    pub x_axis: Rect,
    /// Tick labels and axis line left of the plot.
    pub y_axis: Rect,
    /// Clickable X labels.
    pub x_labels: Vec<(Rect, XField)>,
    /// Clickable Y labels.
    pub y_labels: Vec<(Rect, YField)>,
}

impl ChartLayout {
    /// Split `area` into plot, axes and label regions.
    pub fn compute(area: Rect, margins: &ChartMargins) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(margins.top),
                Constraint::Min(1),
                Constraint::Length(margins.x_axis),
                Constraint::Length(margins.x_labels),
            ])
            .split(area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(margins.y_labels),
                Constraint::Length(margins.y_axis),
                Constraint::Min(1),
                Constraint::Length(margins.right),
            ])
            .split(area);

        let plot = Rect::new(cols[2].x, rows[1].y, cols[2].width, rows[1].height);
        let x_axis = Rect::new(plot.x, rows[2].y, plot.width, rows[2].height);
        let y_axis = Rect::new(cols[1].x, plot.y, cols[1].width, plot.height);

        let x_labels = XField::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| (*i as u16) < rows[3].height)
            .map(|(i, &field)| {
                let rect = centered_label(field.axis_label(), plot.x, plot.width, rows[3].y + i as u16);
                (rect, field)
            })
            .collect();

        let label_col = cols[0];
        let first_row = (plot.y + plot.height / 2).saturating_sub(YField::ALL.len() as u16 / 2);
        let y_labels = YField::ALL
            .iter()
            .enumerate()
            .map(|(i, &field)| (i as u16, field))
            .filter(|(i, _)| first_row + i < plot.y + plot.height.max(1))
            .map(|(i, field)| {
                let width = (field.axis_label().width() as u16).min(label_col.width.saturating_sub(1));
                let x = label_col.x + label_col.width.saturating_sub(width + 1);
                (Rect::new(x, first_row + i, width, 1), field)
            })
            .collect();

        Self {
            plot,
            x_axis,
            y_axis,
            x_labels,
            y_labels,
        }
    }

    /// Whether the plot is large enough to draw.
    pub fn is_drawable(&self) -> bool {
        self.plot.width >= 4 && self.plot.height >= 2
    }

    /// X label under the cell `(col, row)`.
    pub fn x_label_at(&self, col: u16, row: u16) -> Option<XField> {
        let pos = Position::new(col, row);
        self.x_labels
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, field)| *field)
    }

    /// Y label under the cell `(col, row)`.
    pub fn y_label_at(&self, col: u16, row: u16) -> Option<YField> {
        let pos = Position::new(col, row);
        self.y_labels
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, field)| *field)
    }

    /// Unit-space coordinates of the centre of cell `(col, row)`, if it lies
    /// in the plot.
    pub fn to_unit(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        if !self.is_drawable() || !self.plot.contains(Position::new(col, row)) {
            return None;
        }
        let ux = (col - self.plot.x) as f64 / (self.plot.width - 1) as f64;
        let uy = (row - self.plot.y) as f64 / (self.plot.height - 1) as f64;
        Some((ux, uy))
    }

    /// Screen cell of a unit-space point, clamped to the plot.
    pub fn to_cell(&self, unit: (f64, f64)) -> (u16, u16) {
        let span_x = self.plot.width.saturating_sub(1) as f64;
        let span_y = self.plot.height.saturating_sub(1) as f64;
        let col = self.plot.x + (unit.0.clamp(0.0, 1.0) * span_x).round() as u16;
        let row = self.plot.y + (unit.1.clamp(0.0, 1.0) * span_y).round() as u16;
        (col, row)
    }

    /// Hit radius in unit space for a circle of `radius_cells` columns.
    /// Rows are about twice as tall as columns are wide.
    pub fn unit_radius(&self, radius_cells: f64) -> (f64, f64) {
        let span_x = self.plot.width.saturating_sub(1).max(1) as f64;
        let span_y = self.plot.height.saturating_sub(1).max(1) as f64;
        let rows = (radius_cells / 2.0).max(0.5);
        (radius_cells / span_x, rows / span_y)
    }
}

fn centered_label(text: &str, x: u16, width: u16, row: u16) -> Rect {
    let text_width = (text.width() as u16).min(width);
    let offset = (width - text_width) / 2;
    Rect::new(x + offset, row, text_width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ChartLayout {
        ChartLayout::compute(Rect::new(0, 0, 120, 40), &ChartMargins::default())
    }

    #[test]
    fn regions_do_not_overlap() {
        let l = layout();
        assert!(l.is_drawable());
        assert!(!l.plot.intersects(l.x_axis));
        assert!(!l.plot.intersects(l.y_axis));
        assert_eq!(l.x_axis.y, l.plot.y + l.plot.height);
        assert_eq!(l.y_axis.x + l.y_axis.width, l.plot.x);
    }

    #[test]
    fn labels_stack_in_field_order() {
        let l = layout();
        assert_eq!(l.x_labels.len(), 3);
        assert_eq!(l.y_labels.len(), 3);
        assert!(l.x_labels.windows(2).all(|w| w[0].0.y + 1 == w[1].0.y));
        assert!(l.y_labels.windows(2).all(|w| w[0].0.y + 1 == w[1].0.y));
        assert_eq!(l.x_labels[0].1, XField::Poverty);
        assert_eq!(l.y_labels[2].1, YField::Obesity);
    }

    #[test]
    fn label_hit_testing() {
        let l = layout();
        let (rect, field) = l.x_labels[2];
        assert_eq!(l.x_label_at(rect.x, rect.y), Some(field));
        assert_eq!(l.x_label_at(rect.x + rect.width, rect.y), None);
        let (rect, field) = l.y_labels[1];
        assert_eq!(l.y_label_at(rect.x + 1, rect.y), Some(field));
        assert_eq!(l.y_label_at(l.plot.x, l.plot.y), None);
    }

    #[test]
    fn unit_and_cell_round_trip_on_corners() {
        let l = layout();
        assert_eq!(l.to_unit(l.plot.x, l.plot.y), Some((0.0, 0.0)));
        let far = (l.plot.x + l.plot.width - 1, l.plot.y + l.plot.height - 1);
        assert_eq!(l.to_unit(far.0, far.1), Some((1.0, 1.0)));
        assert_eq!(l.to_cell((1.0, 1.0)), far);
        assert_eq!(l.to_unit(0, 0), None);
    }

    #[test]
    fn tiny_area_is_not_drawable() {
        let l = ChartLayout::compute(Rect::default(), &ChartMargins::default());
        assert!(!l.is_drawable());
        assert_eq!(l.to_unit(l.plot.x, l.plot.y), None);
        assert!(l.x_labels.is_empty());
    }
}
