//! # Core Board Logic
//!
//! This module contains the task board's state machines.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (controller)   │
//!                    │  • ListWidget           │
//!                    │  • TextEditor           │
//!                    │  • Msg / Effect         │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ BoardView
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The `Board` struct: column storage, focus, reconciliation
//! - [`list`]: `ListWidget`, one column's selection and add-mode
//! - [`editor`]: `TextEditor`, the inline single-line editor
//! - [`message`]: `Msg` and `Effect`, everything that can happen
//! - [`item`]: `Item` and `Column`
//! - [`config`]: TOML config loading and resolution

pub mod board;
pub mod config;
pub mod editor;
pub mod item;
pub mod list;
pub mod message;

// Re-export commonly used types for convenience
pub use board::{Board, BoardView};
pub use item::{Column, Item};
pub use message::{Effect, Key, Msg};
