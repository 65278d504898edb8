//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard events into core `Msg` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on the board animates, so the loop sleeps up to 250ms waiting
//! for input and only redraws after an event. Every queued event is
//! dispatched before the next draw, one at a time and each to completion.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::{Board, Effect};
use crate::tui::component::Component;
use crate::tui::components::BoardWidget;
use crate::tui::event::{drain_pending, poll_event_timeout};
use crate::tui::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Draw the board into a full frame.
pub fn draw(frame: &mut ratatui::Frame, board: &Board, theme: &Theme) {
    let view = board.view();
    let area = frame.area();
    BoardWidget::new(&view, theme).render(frame, area);
}

pub fn run(mut board: Board, theme: Theme) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut board, &theme));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    board: &mut Board,
    theme: &Theme,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| draw(f, board, theme))?;
            needs_redraw = false;
        }

        let Some(first) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        for msg in std::iter::once(first).chain(drain_pending()?) {
            if board.dispatch(msg) == Effect::Quit {
                info!("Exiting event loop");
                return Ok(());
            }
        }
    }
}
