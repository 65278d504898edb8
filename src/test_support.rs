use std::collections::BTreeMap;

use crate::core::item::default_seed;
use crate::core::{Board, Key, Msg};

/// Board seeded with the default items, `Todo` focused.
pub fn seeded_board() -> Board {
    Board::new(&BTreeMap::new(), default_seed())
}

pub fn key(key: Key) -> Msg {
    Msg::Key(key)
}

pub fn text(s: &str) -> Msg {
    Msg::Key(Key::Text(s.to_string()))
}
