//! # Messages
//!
//! Everything that can happen on the board becomes a `Msg`.
//! User presses Enter? That's `Msg::Key(Key::Enter)`.
//! The editor confirms its text? That's `Msg::Confirmed(text)`.
//!
//! A component takes the current state and one message, updates itself,
//! and hands back an `Effect`. No I/O happens here.
//!
//! ```text
//! State + Msg  →  update()  →  New State + Effect
//!                                  │
//!          Effect::Emit(msg) ──────┘ fed back into the same loop
//! ```
//!
//! Follow-up messages are returned, never queued, so each step is a
//! deterministic function of (state, message).

/// Abstract key input, already decoupled from any terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Delete,
    Home,
    End,
    Enter,
    Space,
    Tab,
    Esc,
    /// Ctrl+C
    Quit,
    /// One or more printable characters (a keystroke or a paste).
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(Key),
    /// Terminal dimensions from the outer loop. Stored, never interpreted.
    Resize { width: u16, height: u16 },
    /// The editor finalized its text.
    Confirmed(String),
    /// A list finished an entry. `at` is the selection index before the add.
    ItemAdded { title: String, at: usize },
}

impl From<Key> for Msg {
    fn from(key: Key) -> Self {
        Msg::Key(key)
    }
}

/// What the caller should do after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Feed this message back through the board.
    Emit(Msg),
    /// Stop the process. No further state changes follow.
    Quit,
}

impl From<Option<Msg>> for Effect {
    fn from(next: Option<Msg>) -> Self {
        next.map_or(Effect::None, Effect::Emit)
    }
}
