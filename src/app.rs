//! Application state and logic.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::chart::ChartState;
use crate::clipboard;
use crate::data::{AxisField, CensusReader, XField, YField};
use crate::error::Result;
use crate::ui::ChartLayout;
use crate::util::ChartConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Source data file.
    pub file_path: PathBuf,
    /// Chart session.
    pub chart: ChartState,
    /// Layout and behaviour settings.
    pub config: ChartConfig,
    /// Layout of the last drawn frame.
    pub layout: Option<ChartLayout>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Whether the current hover came from the mouse.
    mouse_hover: bool,
}

impl App {
    /// Load `path` and build the chart on the given initial fields.
    pub fn load(path: &Path, config: ChartConfig, x: XField, y: YField) -> Result<Self> {
        let data = CensusReader::read_file(path)?;
        let records = data.len();
        let chart = ChartState::new(data, &config, x, y);

        Ok(Self {
            file_path: path.to_path_buf(),
            chart,
            config,
            layout: None,
            status: format!("{} states loaded", records),
            theme: Theme::GruvboxDark,
            mouse_hover: false,
        })
    }

    /// Chart title: the file name.
    pub fn title(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| format!("Censusplot - {}", n.to_string_lossy()))
            .unwrap_or_else(|| "Censusplot".to_string())
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,

            // Axis switching
            (KeyModifiers::NONE, KeyCode::Char('x')) | (KeyModifiers::SHIFT, KeyCode::Char('X')) => {
                let field = self.chart.cycle_x(now);
                self.status = format!("X: {}", field.axis_label());
            },
            (KeyModifiers::NONE, KeyCode::Char('y')) | (KeyModifiers::SHIFT, KeyCode::Char('Y')) => {
                let field = self.chart.cycle_y(now);
                self.status = format!("Y: {}", field.axis_label());
            },
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='3')) => {
                if let Some(field) = XField::from_position(c as usize - '1' as usize) {
                    self.select_x(field, now);
                }
            },
            (KeyModifiers::NONE, KeyCode::Char(c @ '4'..='6')) => {
                if let Some(field) = YField::from_position(c as usize - '4' as usize) {
                    self.select_y(field, now);
                }
            },

            // Keyboard hover
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.chart.hover_next();
                self.mouse_hover = false;
            },
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.chart.hover_prev();
                self.mouse_hover = false;
            },
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.chart.clear_hover();
                self.mouse_hover = false;
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('c')) => self.copy_tooltip(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => self.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                self.status = "Help: click a label or press x/y to switch axes, 1-3 pick X, 4-6 pick Y, h/l walk states, c copy tooltip, T theme, q quit".to_string();
            },

            _ => {},
        }
        Action::Continue
    }

    /// Handle a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(field) = layout.x_label_at(event.column, event.row) {
                    self.select_x(field, now);
                } else if let Some(field) = layout.y_label_at(event.column, event.row) {
                    self.select_y(field, now);
                }
            },
            MouseEventKind::Moved => {
                let hit = layout.to_unit(event.column, event.row).and_then(|unit| {
                    let radius = layout.unit_radius(self.config.circle_radius);
                    self.chart.hit_test(unit, radius, now)
                });
                match hit {
                    Some(index) => {
                        self.chart.hover(index);
                        self.mouse_hover = true;
                    },
                    None if self.mouse_hover => {
                        self.chart.clear_hover();
                        self.mouse_hover = false;
                    },
                    None => {},
                }
            },
            _ => {},
        }
    }

    /// Handle a terminal resize. Width and height are recomputed on the next
    /// draw; chosen fields are kept.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "terminal resized");
        self.layout = None;
    }

    /// Bind `field` to the X axis.
    pub fn select_x(&mut self, field: XField, now: Instant) {
        if self.chart.select_x(field, now) {
            self.status = format!("X: {}", field.axis_label());
        }
    }

    /// Bind `field` to the Y axis.
    pub fn select_y(&mut self, field: YField, now: Instant) {
        if self.chart.select_y(field, now) {
            self.status = format!("Y: {}", field.axis_label());
        }
    }

    /// Copy the visible tooltip to the clipboard.
    pub fn copy_tooltip(&mut self) {
        let Some(tooltip) = self.chart.hovered_tooltip() else {
            self.status = "No state selected".to_string();
            return;
        };
        match clipboard::copy_to_clipboard(&tooltip.text()) {
            Ok(_) => self.status = format!("Copied {}!", tooltip.title),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
