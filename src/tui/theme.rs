//! Immutable render styles, built once from the resolved config and passed
//! into every draw call.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{
    DEFAULT_CURSOR_BG, DEFAULT_CURSOR_FG, DEFAULT_FOCUSED_BORDER, DEFAULT_NORMAL_BORDER,
    DEFAULT_SELECTED_BG, DEFAULT_SELECTED_FG, ThemeColors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub focused_border: Style,
    pub normal_border: Style,
    pub selected: Style,
    pub cursor: Style,
    pub title: Style,
    pub status: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&ThemeColors::default())
    }
}

impl Theme {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let focused_border =
            parse_color("focused_border", &colors.focused_border, DEFAULT_FOCUSED_BORDER);
        let normal_border =
            parse_color("normal_border", &colors.normal_border, DEFAULT_NORMAL_BORDER);
        let selected_fg = parse_color("selected_fg", &colors.selected_fg, DEFAULT_SELECTED_FG);
        let selected_bg = parse_color("selected_bg", &colors.selected_bg, DEFAULT_SELECTED_BG);
        let cursor_fg = parse_color("cursor_fg", &colors.cursor_fg, DEFAULT_CURSOR_FG);
        let cursor_bg = parse_color("cursor_bg", &colors.cursor_bg, DEFAULT_CURSOR_BG);

        Self {
            focused_border: Style::new().fg(focused_border),
            normal_border: Style::new().fg(normal_border),
            selected: Style::new().fg(selected_fg).bg(selected_bg),
            cursor: Style::new().fg(cursor_fg).bg(cursor_bg),
            title: Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            status: Style::new().fg(Color::Gray),
            help: Style::new().fg(Color::DarkGray),
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.normal_border
        }
    }
}

/// Parse a configured color, falling back to `default` with a warning.
fn parse_color(field: &str, value: &str, default: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("Invalid color {:?} for theme.{}, using {:?}", value, field, default);
        Color::from_str(default).unwrap_or(Color::Reset)
    })
}
