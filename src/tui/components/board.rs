//! # Board Component
//!
//! Lays the three columns side by side with the status bar underneath.
//! All data comes from a `BoardView` snapshot; the theme is a prop.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::BoardView;
use crate::tui::component::Component;
use crate::tui::components::column::ColumnWidget;
use crate::tui::components::status_bar::StatusBar;
use crate::tui::theme::Theme;

pub struct BoardWidget<'a> {
    pub view: &'a BoardView,
    pub theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(view: &'a BoardView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Component for BoardWidget<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min, Ratio};

        let [columns_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(area);

        let count = self.view.columns.len().max(1) as u32;
        let column_areas = Layout::horizontal(
            self.view.columns.iter().map(|_| Ratio(1, count)),
        )
        .margin(1)
        .spacing(1)
        .split(columns_area);

        for (column, column_area) in self.view.columns.iter().zip(column_areas.iter()) {
            ColumnWidget::new(column, self.theme).render(frame, *column_area);
        }

        let adding = self
            .view
            .columns
            .iter()
            .any(|c| c.focused && c.list.editor.is_some());
        StatusBar::new(&self.view.status, adding, self.theme).render(frame, status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Column, Key};
    use crate::test_support::{key, seeded_board, text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(view: &BoardView) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let area = f.area();
                BoardWidget::new(view, &theme).render(f, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draws_all_columns() {
        let board = seeded_board();
        let text = screen_text(&draw(&board.view()));
        for title in ["Todo", "In Progress", "Done", "one", "two", "three", "four"] {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn test_only_focused_column_has_focused_border() {
        let mut board = seeded_board();
        board.dispatch(key(Key::Tab));
        assert_eq!(board.focused(), Column::InProgress);

        let theme = Theme::default();
        let buffer = draw(&board.view());
        // Top-left corners of the three boxes, one row down for the margin
        let focused: Vec<bool> = (0..buffer.area.width)
            .filter(|&x| buffer[(x, 1)].symbol() == "┌")
            .map(|x| buffer[(x, 1)].fg == theme.focused_border.fg.unwrap())
            .collect();
        assert_eq!(focused, [false, true, false]);
    }

    #[test]
    fn test_status_line_after_add() {
        let mut board = seeded_board();
        board.dispatch(text("a"));
        board.dispatch(text("x"));
        board.dispatch(key(Key::Enter));

        let text = screen_text(&draw(&board.view()));
        assert!(text.contains("Log: Added \"x\" to Todo"));
    }
}
