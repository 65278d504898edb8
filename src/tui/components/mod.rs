//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is a stateless, props-based renderer. The core
//! produces a `BoardView` snapshot; components borrow pieces of it together
//! with the immutable `Theme` and draw them:
//!
//! - `BoardWidget`: lays out the columns and the status bar
//! - `ColumnWidget`: one bordered column with its rows and inline editor
//! - `StatusBar`: activity log and key hints
//!
//! Selection, focus, and add-mode all live in the core. A component never
//! decides what is selected; it only styles what the view says.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── board.rs         (Three-column layout)
//! ├── column.rs        (Single column renderer)
//! └── status_bar.rs    (Bottom status line)
//! ```

pub mod board;
pub mod column;
pub mod status_bar;

pub use board::BoardWidget;
pub use column::ColumnWidget;
pub use status_bar::StatusBar;
