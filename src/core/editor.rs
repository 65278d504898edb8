//! # TextEditor
//!
//! Single-line text buffer with a cursor, used by a list's add-mode.
//!
//! ## Responsibilities
//!
//! - Capture text input at the cursor
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Msg::Confirmed` on Enter
//!
//! ## State Management
//!
//! The cursor is a byte offset into `buffer` and always sits on a char
//! boundary in `0..=buffer.len()`. Every editing operation is a no-op while
//! the editor is unfocused. `confirm()` leaves the buffer alone; the owner
//! decides when to `reset()`.

use log::debug;

use crate::core::message::{Key, Msg};

/// Glyph drawn when the cursor sits past the last character.
pub const CURSOR_GLYPH: char = ' ';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditor {
    buffer: String,
    /// Byte offset in `buffer` (0..=buffer.len())
    pos: usize,
    focused: bool,
}

/// The buffer split around the cursor, ready for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub before: String,
    /// Character under the cursor, or `CURSOR_GLYPH` at the end of the buffer.
    pub at_cursor: String,
    pub after: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Clear the buffer, rewind the cursor, and blur.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.pos = 0;
        self.focused = false;
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in characters, in `0..=len()`.
    pub fn cursor(&self) -> usize {
        self.buffer[..self.pos].chars().count()
    }

    pub fn insert(&mut self, text: &str) {
        if !self.focused {
            return;
        }
        self.buffer.insert_str(self.pos, text);
        self.pos += text.len();
    }

    pub fn move_left(&mut self) {
        if self.focused && self.pos > 0 {
            self.pos = prev_char_boundary(&self.buffer, self.pos);
        }
    }

    pub fn move_right(&mut self) {
        if self.focused && self.pos < self.buffer.len() {
            self.pos = next_char_boundary(&self.buffer, self.pos);
        }
    }

    pub fn move_home(&mut self) {
        if self.focused {
            self.pos = 0;
        }
    }

    /// Jump to the append position, one past the last character.
    pub fn move_end(&mut self) {
        if self.focused {
            self.pos = self.buffer.len();
        }
    }

    pub fn backspace(&mut self) {
        if !self.focused || self.pos == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(prev..self.pos);
        self.pos = prev;
    }

    pub fn delete(&mut self) {
        if !self.focused || self.pos >= self.buffer.len() {
            return;
        }
        let next = next_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(self.pos..next);
    }

    /// The confirmation message for the current contents. Does not reset.
    pub fn confirm(&self) -> Msg {
        Msg::Confirmed(self.buffer.clone())
    }

    /// Apply one key. Returns `Msg::Confirmed` on Enter; swallows everything
    /// while unfocused.
    pub fn handle(&mut self, key: &Key) -> Option<Msg> {
        if !self.focused {
            return None;
        }

        match key {
            Key::Enter => {
                debug!("Editor confirmed {} chars", self.len());
                return Some(self.confirm());
            }
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Home => self.move_home(),
            Key::End => self.move_end(),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Space => self.insert(" "),
            Key::Text(text) => self.insert(text),
            _ => {}
        }
        None
    }

    pub fn view(&self) -> EditorView {
        let before = self.buffer[..self.pos].to_string();
        let rest = &self.buffer[self.pos..];
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => EditorView {
                before,
                at_cursor: c.to_string(),
                after: chars.as_str().to_string(),
            },
            None => EditorView {
                before,
                at_cursor: CURSOR_GLYPH.to_string(),
                after: String::new(),
            },
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
