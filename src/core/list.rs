//! # ListWidget
//!
//! One column's selectable list of items, with an inline editor for adding
//! new ones.
//!
//! ## Responsibilities
//!
//! - Track the selected row, wrapping at both ends
//! - Enter and leave add-mode (`a` to begin, `Esc` to cancel)
//! - Turn the editor's `Confirmed` into `ItemAdded` for the board
//!
//! ## Focus
//!
//! The widget does not store a focus flag. The board owns the single
//! focused column and passes `focused` into `view()` as a prop. `blur()`
//! exists so the board can cancel a pending entry when focus moves away,
//! which keeps add-mode confined to the focused column.
//!
//! ## Add-mode and navigation
//!
//! While adding, `Up`/`Down` do not move the selection. The new item is
//! inserted at the selection captured on confirm, so the target row stays
//! where it was when the user pressed `a`.

use log::debug;

use crate::core::editor::{EditorView, TextEditor};
use crate::core::item::Item;
use crate::core::message::{Key, Msg};

/// Key that opens the inline editor.
pub const ADD_KEY: &str = "a";

#[derive(Debug, Clone, Default)]
pub struct ListWidget {
    pub title: String,
    items: Vec<Item>,
    selected: usize,
    adding: bool,
    editor: TextEditor,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub selected: bool,
}

/// Where the inline editor goes and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSlot {
    /// Row the editor is drawn beneath; `None` means above all rows.
    pub below_row: Option<usize>,
    pub view: EditorView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: String,
    pub rows: Vec<RowView>,
    pub editor: Option<EditorSlot>,
}

impl ListWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn focus(&mut self) {
        debug!("List '{}' focused", self.title);
    }

    /// Lose focus. A pending entry is discarded.
    pub fn blur(&mut self) {
        if self.adding {
            debug!("List '{}' blurred while adding; entry discarded", self.title);
        }
        self.cancel_add();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    /// Replace the displayed items. The selection is left alone; callers
    /// follow up with `clamp_selection()` when the length may have shrunk.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Pull the selection back inside `0..len` (0 for an empty list).
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn move_selection_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn move_selection_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Enter add-mode. Does nothing if already adding.
    pub fn begin_add(&mut self) {
        if self.adding {
            return;
        }
        self.adding = true;
        self.editor.focus();
        debug!("List '{}' entered add-mode at row {}", self.title, self.selected);
    }

    /// Leave add-mode without producing an item.
    pub fn cancel_add(&mut self) {
        self.adding = false;
        self.editor.reset();
    }

    fn on_confirmed(&mut self, title: &str) -> Msg {
        let at = self.selected;
        self.adding = false;
        self.editor.reset();
        self.selected += 1;
        Msg::ItemAdded {
            title: title.to_string(),
            at,
        }
    }

    /// Handle one message, optionally returning a follow-up for the board.
    pub fn handle(&mut self, msg: &Msg) -> Option<Msg> {
        match msg {
            Msg::Confirmed(title) if self.adding => Some(self.on_confirmed(title)),
            Msg::Key(Key::Esc) if self.adding => {
                self.cancel_add();
                None
            }
            Msg::Key(key) if self.adding => self.editor.handle(key),
            Msg::Key(Key::Up) => {
                self.move_selection_up();
                None
            }
            Msg::Key(Key::Down) => {
                self.move_selection_down();
                None
            }
            Msg::Key(Key::Text(text)) if text == ADD_KEY => {
                self.begin_add();
                None
            }
            _ => None,
        }
    }

    pub fn view(&self, focused: bool) -> ListView {
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| RowView {
                title: item.title.clone(),
                selected: focused && idx == self.selected,
            })
            .collect();

        let editor = self.adding.then(|| EditorSlot {
            below_row: (!self.items.is_empty()).then_some(self.selected),
            view: self.editor.view(),
        });

        ListView {
            title: self.title.clone(),
            rows,
            editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Column;

    fn list_of(titles: &[&str]) -> ListWidget {
        let mut list = ListWidget::new("Todo");
        list.set_items(
            titles
                .iter()
                .map(|t| Item::new(*t, "", Column::Todo))
                .collect(),
        );
        list
    }

    fn key(k: Key) -> Msg {
        Msg::Key(k)
    }

    fn text(s: &str) -> Msg {
        Msg::Key(Key::Text(s.to_string()))
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_selection_up();
        assert_eq!(list.selected_index(), 2);
        list.move_selection_down();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_down_len_times_returns_to_start() {
        for len in 1..6 {
            let titles: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            for start in 0..len {
                let mut list = list_of(&refs);
                list.selected = start;
                for _ in 0..len {
                    list.move_selection_down();
                }
                assert_eq!(list.selected_index(), start);
            }
        }
    }

    #[test]
    fn test_empty_list_navigation_is_noop() {
        let mut list = ListWidget::new("Done");
        list.move_selection_up();
        list.move_selection_down();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_add_key_enters_add_mode_without_typing() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.handle(&text("a")), None);
        assert!(list.is_adding());
        assert!(list.editor().is_focused());
        assert!(list.editor().is_empty());

        // Now "a" is text
        list.handle(&text("a"));
        assert_eq!(list.editor().value(), "a");
    }

    #[test]
    fn test_begin_add_is_guarded() {
        let mut list = list_of(&["a"]);
        list.begin_add();
        list.handle(&text("x"));
        list.begin_add();
        assert!(list.is_adding());
        assert_eq!(list.editor().value(), "x");
    }

    #[test]
    fn test_navigation_suppressed_while_adding() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_selection_down();
        list.begin_add();

        list.handle(&key(Key::Up));
        list.handle(&key(Key::Down));
        list.handle(&key(Key::Down));
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn test_enter_then_confirmed_emits_item_added() {
        let mut list = list_of(&["a", "b"]);
        list.move_selection_down();
        list.begin_add();
        list.handle(&text("new"));

        let confirmed = list.handle(&key(Key::Enter));
        assert_eq!(confirmed, Some(Msg::Confirmed("new".to_string())));
        // The editor does not reset itself
        assert!(list.is_adding());

        let added = list.handle(&confirmed.unwrap());
        assert_eq!(
            added,
            Some(Msg::ItemAdded {
                title: "new".to_string(),
                at: 1
            })
        );
        assert!(!list.is_adding());
        assert!(list.editor().is_empty());
        assert!(!list.editor().is_focused());
        assert_eq!(list.selected_index(), 2);
    }

    #[test]
    fn test_confirmed_ignored_when_not_adding() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.handle(&Msg::Confirmed("x".into())), None);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_esc_cancels_add() {
        let mut list = list_of(&["a"]);
        list.begin_add();
        list.handle(&text("draft"));
        list.handle(&key(Key::Esc));
        assert!(!list.is_adding());
        assert!(list.editor().is_empty());
    }

    #[test]
    fn test_blur_discards_pending_entry() {
        let mut list = list_of(&["a"]);
        list.begin_add();
        list.handle(&text("draft"));
        list.blur();
        assert!(!list.is_adding());
        assert!(!list.editor().is_focused());
        assert!(list.editor().is_empty());
    }

    #[test]
    fn test_set_items_keeps_selection_until_clamped() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_selection_up();
        list.set_items(vec![Item::new("only", "", Column::Todo)]);
        assert_eq!(list.selected_index(), 2);
        list.clamp_selection();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_view_marks_selection_only_when_focused() {
        let list = list_of(&["a", "b"]);
        let view = list.view(true);
        assert!(view.rows[0].selected);
        assert!(!view.rows[1].selected);

        let view = list.view(false);
        assert!(view.rows.iter().all(|r| !r.selected));
    }

    #[test]
    fn test_view_places_editor_below_selection() {
        let mut list = list_of(&["a", "b"]);
        list.move_selection_down();
        list.begin_add();
        let slot = list.view(true).editor.unwrap();
        assert_eq!(slot.below_row, Some(1));

        let mut empty = ListWidget::new("Done");
        empty.begin_add();
        let slot = empty.view(true).editor.unwrap();
        assert_eq!(slot.below_row, None);
        assert_eq!(slot.view.at_cursor, " ");
    }
}
