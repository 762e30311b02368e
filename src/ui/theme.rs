//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Title text color.
    pub heading: Color,
    /// Axis lines and tick labels.
    pub axis: Color,
    /// Border color.
    pub border: Color,
    /// State circle outline.
    pub circle: Color,
    /// State abbreviation inside circles.
    pub circle_text: Color,
    /// Hovered circle.
    pub highlight: Color,
    /// Label of the chosen field.
    pub label_active: Color,
    /// Labels of the other fields.
    pub label_inactive: Color,
    /// Tooltip foreground color.
    pub tooltip_fg: Color,
    /// Tooltip background color.
    pub tooltip_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                axis: Color::Rgb(168, 153, 132),
                border: Color::Rgb(102, 92, 84),
                circle: Color::Rgb(131, 165, 152),
                circle_text: Color::Rgb(251, 241, 199),
                highlight: Color::Rgb(250, 189, 47),
                label_active: Color::Rgb(251, 241, 199),
                label_inactive: Color::Rgb(124, 111, 100),
                tooltip_fg: Color::Rgb(251, 241, 199),
                tooltip_bg: Color::Rgb(80, 73, 69),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                axis: Color::Rgb(102, 92, 84),
                border: Color::Rgb(213, 196, 161),
                circle: Color::Rgb(7, 102, 120),
                circle_text: Color::Rgb(40, 40, 40),
                highlight: Color::Rgb(181, 118, 20),
                label_active: Color::Rgb(40, 40, 40),
                label_inactive: Color::Rgb(168, 153, 132),
                tooltip_fg: Color::Rgb(251, 245, 234),
                tooltip_bg: Color::Rgb(80, 73, 69),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
