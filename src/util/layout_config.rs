//! Layout and behaviour configuration for the chart.

use std::time::Duration;

/// Scale domain padding. The domain of an axis is `[min * floor, max * ceil]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Factor applied to the field minimum.
    pub floor_factor: f64,
    /// Factor applied to the field maximum.
    pub ceil_factor: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            floor_factor: 0.8,
            ceil_factor: 1.2,
        }
    }
}

/// Margins around the plot area, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartMargins {
    /// Rows above the plot.
    pub top: u16,
    /// Columns right of the plot.
    pub right: u16,
    /// Width of the column holding the clickable Y labels.
    pub y_labels: u16,
    /// Width of the Y axis tick labels.
    pub y_axis: u16,
    /// Rows for the X axis line and its tick labels.
    pub x_axis: u16,
    /// Rows for the clickable X labels.
    pub x_labels: u16,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 1,
            right: 3,
            y_labels: 26,
            y_axis: 8,
            x_axis: 2,
            x_labels: 3,
        }
    }
}

/// Combined chart configuration.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Domain padding for both axes.
    pub scale: ScaleConfig,
    /// Margins around the plot.
    pub margins: ChartMargins,
    /// Length of axis and point transitions. Zero disables animation.
    pub transition: Duration,
    /// Circle radius in cells.
    pub circle_radius: f64,
    /// Tooltip offset from the hovered point as (columns, rows).
    pub tooltip_offset: (i16, i16),
    /// Requested tick count on the X axis.
    pub x_ticks: usize,
    /// Requested tick count on the Y axis.
    pub y_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scale: ScaleConfig::default(),
            margins: ChartMargins::default(),
            transition: Duration::from_millis(2000),
            circle_radius: 1.5,
            tooltip_offset: (2, -1),
            x_ticks: 10,
            y_ticks: 8,
        }
    }
}
