//! # Board
//!
//! Core business state for the task board: the per-column item
//! collections (source of truth), one `ListWidget` per column, and the
//! single focused column.
//!
//! ```text
//! Board
//! ├── items: BTreeMap<Column, Vec<Item>>     // source of truth
//! ├── lists: BTreeMap<Column, ListWidget>    // selection + add-mode
//! ├── focused: Column                        // only column receiving input
//! ├── size: Option<Size>                     // last terminal size, opaque
//! └── status: String                         // one-line activity log
//! ```
//!
//! State changes only happen through `update(msg)`. After any step that
//! touches `items`, the matching list is re-synced before returning, so the
//! two maps never disagree when observed from outside.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};

use crate::core::item::{Column, Item};
use crate::core::list::{EditorSlot, ListView, ListWidget};
use crate::core::message::{Effect, Key, Msg};

/// Terminal dimensions as reported by the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

pub struct Board {
    items: BTreeMap<Column, Vec<Item>>,
    lists: BTreeMap<Column, ListWidget>,
    focused: Column,
    size: Option<Size>,
    status: String,
}

impl Board {
    /// Build a board from column headings and seed items. Seed items keep
    /// their relative order within each column.
    pub fn new(titles: &BTreeMap<Column, String>, seed: Vec<Item>) -> Self {
        let mut items: BTreeMap<Column, Vec<Item>> =
            Column::ALL.iter().map(|&c| (c, Vec::new())).collect();
        for item in seed {
            items.entry(item.column).or_default().push(item);
        }

        let lists = Column::ALL
            .iter()
            .map(|&column| {
                let title = titles
                    .get(&column)
                    .cloned()
                    .unwrap_or_else(|| column.label().to_string());
                let mut list = ListWidget::new(title);
                list.set_items(items[&column].clone());
                (column, list)
            })
            .collect();

        let mut board = Self {
            items,
            lists,
            focused: Column::Todo,
            size: None,
            status: String::new(),
        };
        board.list_mut(Column::Todo).focus();
        board
    }

    pub fn focused(&self) -> Column {
        self.focused
    }

    pub fn items(&self, column: Column) -> &[Item] {
        self.items.get(&column).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn list(&self, column: Column) -> &ListWidget {
        &self.lists[&column]
    }

    fn list_mut(&mut self, column: Column) -> &mut ListWidget {
        self.lists.entry(column).or_default()
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Move focus to the next column in display order, wrapping around.
    pub fn focus_next(&mut self) {
        let previous = self.focused;
        self.focused = previous.next();
        self.list_mut(previous).blur();
        self.list_mut(self.focused).focus();
        debug!("Focus moved {:?} -> {:?}", previous, self.focused);
    }

    /// Insert a new item before position `at` of the focused column and
    /// re-sync that column's list.
    fn on_item_added(&mut self, title: String, at: usize) {
        let column = self.focused;
        let item = Item::new(title, "", column);

        let items = self.items.entry(column).or_default();
        let at = at.min(items.len());
        info!("Adding '{}' to {:?} at {}", item.title, column, at);
        self.status = format!("Added \"{}\" to {}", item.title, column);
        items.insert(at, item);

        let synced = items.clone();
        let list = self.list_mut(column);
        list.set_items(synced);
        list.clamp_selection();
    }

    /// Process one message. A returned `Effect::Emit` must be fed back in;
    /// `dispatch` does that.
    pub fn update(&mut self, msg: Msg) -> Effect {
        match msg {
            Msg::Key(Key::Quit) => {
                info!("Quit requested");
                return Effect::Quit;
            }
            Msg::Resize { width, height } => {
                self.size = Some(Size { width, height });
                return Effect::None;
            }
            Msg::ItemAdded { title, at } => {
                self.on_item_added(title, at);
                return Effect::None;
            }
            Msg::Key(Key::Tab) => self.focus_next(),
            _ => {}
        }

        let focused = self.focused;
        self.list_mut(focused).handle(&msg).into()
    }

    /// Run `msg` and every follow-up it produces until the chain settles.
    /// Returns `Effect::Quit` or `Effect::None`.
    pub fn dispatch(&mut self, msg: Msg) -> Effect {
        let mut next = msg;
        loop {
            debug!("Board step: {:?}", next);
            match self.update(next) {
                Effect::Emit(follow_up) => next = follow_up,
                effect => return effect,
            }
        }
    }

    pub fn view(&self) -> BoardView {
        let columns = Column::ALL
            .iter()
            .map(|&column| {
                let focused = column == self.focused;
                ColumnView {
                    column,
                    focused,
                    list: self.lists[&column].view(focused),
                }
            })
            .collect();

        BoardView {
            columns,
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub column: Column,
    pub focused: bool,
    pub list: ListView,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub status: String,
}

/// Plain-text layout: one block per column, `>` marks the selected row,
/// `*` the focused column, and the editor line shows the cursor as `[c]`.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let marker = if column.focused { "*" } else { " " };
            writeln!(f, "{} {}", marker, column.list.title)?;

            let slot = column.list.editor.as_ref();
            let editor_line = |slot: &EditorSlot| {
                let view = &slot.view;
                format!("    + {}[{}]{}", view.before, view.at_cursor, view.after)
            };

            if let Some(slot) = slot.filter(|s| s.below_row.is_none()) {
                writeln!(f, "{}", editor_line(slot))?;
            }

            for (row_idx, row) in column.list.rows.iter().enumerate() {
                let cursor = if row.selected { ">" } else { " " };
                writeln!(f, "  {} {}", cursor, row.title)?;
                if let Some(slot) = slot.filter(|s| s.below_row == Some(row_idx)) {
                    writeln!(f, "{}", editor_line(slot))?;
                }
            }
        }

        if !self.status.is_empty() {
            writeln!(f)?;
            writeln!(f, "Log: {}", self.status)?;
        }
        Ok(())
    }
}
