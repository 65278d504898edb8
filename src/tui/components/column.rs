//! # Column Component
//!
//! Draws one board column: a bordered box holding the column heading, the
//! item titles, and the inline editor while the column is adding.
//!
//! Follows the transient wrapper pattern: `ColumnWidget` is created each
//! frame from a borrowed `ColumnView` and the shared `Theme`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::board::ColumnView;
use crate::core::editor::EditorView;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;

pub struct ColumnWidget<'a> {
    pub view: &'a ColumnView,
    pub theme: &'a Theme,
}

impl<'a> ColumnWidget<'a> {
    pub fn new(view: &'a ColumnView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn lines(&self, inner_width: usize) -> Vec<Line<'a>> {
        let list = &self.view.list;
        let mut lines = vec![
            Line::from(Span::styled(list.title.clone(), self.theme.title)),
            Line::default(),
        ];

        let slot = list.editor.as_ref();
        if let Some(slot) = slot.filter(|s| s.below_row.is_none()) {
            lines.push(editor_line(&slot.view, self.theme, inner_width));
        }

        for (idx, row) in list.rows.iter().enumerate() {
            let title = truncate_to_width(&row.title, inner_width);
            let span = if row.selected {
                Span::styled(title, self.theme.selected)
            } else {
                Span::raw(title)
            };
            lines.push(Line::from(span));

            if let Some(slot) = slot.filter(|s| s.below_row == Some(idx)) {
                lines.push(editor_line(&slot.view, self.theme, inner_width));
            }
        }

        lines
    }
}

impl Component for ColumnWidget<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;

        let block = Block::bordered()
            .border_style(self.theme.border(self.view.focused))
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.lines(inner_width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// The editor buffer with the cursor cell highlighted, scrolled so the
/// cursor stays inside `inner_width`. Text left of the cursor wins the space.
fn editor_line<'a>(view: &EditorView, theme: &Theme, inner_width: usize) -> Line<'a> {
    let room = inner_width.saturating_sub(str_width(&view.at_cursor));
    let before = tail_to_width(&view.before, room);
    let after = head_to_width(&view.after, room - str_width(before));

    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(view.at_cursor.clone(), theme.cursor),
        Span::raw(after.to_string()),
    ])
}

fn str_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Longest prefix of `s` that fits in `max_width` cells.
fn head_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        used += c.width().unwrap_or(0);
        if used > max_width {
            return &s[..idx];
        }
    }
    s
}

/// Longest suffix of `s` that fits in `max_width` cells.
fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > max_width {
            return &s[idx + c.len_utf8()..];
        }
    }
    s
}

/// Truncate a string to fit within `max_width` display cells, adding "…" if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if str_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
