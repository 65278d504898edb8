//! # StatusBar Component
//!
//! Bottom line under the board: the latest activity on the left, key hints
//! on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational. It receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(view.status.as_str(), adding, &theme);
//! status_bar.render(frame, area);
//! ```
//!
//! ### Hints follow the mode
//!
//! While a column is adding, the hints describe the editor keys instead of
//! the navigation keys, so the bar never advertises a key that would be
//! ignored.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const NAVIGATE_HINTS: &str = " a Add  ↑↓ Select  Tab Next column  Ctrl+C Quit ";
pub const ADDING_HINTS: &str = " Enter Confirm  Esc Cancel  ←→ Move  Ctrl+C Quit ";

pub struct StatusBar<'a> {
    /// Latest activity message (e.g. `Added "x" to Todo`), may be empty
    pub status: &'a str,
    /// Whether the focused column is in add-mode
    pub adding: bool,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: &'a str, adding: bool, theme: &'a Theme) -> Self {
        Self {
            status,
            adding,
            theme,
        }
    }

    fn hints(&self) -> &'static str {
        if self.adding {
            ADDING_HINTS
        } else {
            NAVIGATE_HINTS
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints = self.hints();
        let hints_width = hints.chars().count() as u16;
        let [status_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        if !self.status.is_empty() {
            let status = format!(" Log: {}", self.status);
            frame.render_widget(Span::styled(status, self.theme.status), status_area);
        }
        frame.render_widget(
            Line::from(Span::styled(hints, self.theme.help)).right_aligned(),
            hints_area,
        );
    }
}
