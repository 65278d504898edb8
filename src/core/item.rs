//! # Items and Columns
//!
//! The board's data: a fixed set of columns, each holding an ordered
//! collection of items. Items are plain values. To "change" one, the owning
//! column's collection is rebuilt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the board's task states.
///
/// The variant order is the display order and the focus cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// The column after this one, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        match self {
            Column::Todo => Column::InProgress,
            Column::InProgress => Column::Done,
            Column::Done => Column::Todo,
        }
    }

    /// Default heading shown above the column.
    pub fn label(self) -> &'static str {
        match self {
            Column::Todo => "Todo",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column: Column,
}

impl Item {
    pub fn new(title: impl Into<String>, description: impl Into<String>, column: Column) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            column,
        }
    }
}

/// Items a fresh board starts with when the config does not list any.
pub fn default_seed() -> Vec<Item> {
    vec![
        Item::new("one", "One", Column::Todo),
        Item::new("two", "two", Column::Todo),
        Item::new("three", "three", Column::InProgress),
        Item::new("four", "four", Column::Done),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_columns() {
        let mut column = Column::Todo;
        let mut seen = Vec::new();
        for _ in 0..Column::ALL.len() {
            seen.push(column);
            column = column.next();
        }
        assert_eq!(seen, Column::ALL);
        assert_eq!(column, Column::Todo);
    }

    #[test]
    fn test_column_serializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            column: Column,
        }
        let parsed: Wrapper = toml::from_str("column = \"in_progress\"").unwrap();
        assert_eq!(parsed.column, Column::InProgress);
    }

    #[test]
    fn test_default_seed_covers_every_column() {
        let seed = default_seed();
        for column in Column::ALL {
            assert!(seed.iter().any(|item| item.column == column));
        }
    }
}
