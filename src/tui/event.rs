use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Key, Msg};

/// Translate a raw terminal event into a board message.
///
/// Returns `None` for events the board has no use for (mouse, focus,
/// key releases, unbound control chords).
pub fn translate(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key_event) => {
            // Debug: log all key events to see what the terminal sends
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(Msg::Key)
        }
        Event::Resize(width, height) => Some(Msg::Resize { width, height }),
        // The editor is single-line: pasted newlines become spaces
        Event::Paste(data) => Some(Msg::Key(Key::Text(data.replace(['\r', '\n'], " ")))),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let chord = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Quit)
        }
        KeyCode::Char(_) if chord => None,
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Text(c.to_string())),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}

/// Wait up to `timeout` for the next board message.
///
/// `Ok(None)` means either nothing arrived or the event was not relevant.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<Msg>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Collect every event already queued, without blocking.
pub fn drain_pending() -> io::Result<Vec<Msg>> {
    let mut pending = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(msg) = translate(event::read()?) {
            pending.push(msg);
        }
    }
    Ok(pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Home, Key::Home),
            (KeyCode::End, Key::End),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Delete, Key::Delete),
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Tab, Key::Tab),
            (KeyCode::Esc, Key::Esc),
        ];
        for (code, expected) in cases {
            assert_eq!(
                translate(press(code, KeyModifiers::NONE)),
                Some(Msg::Key(expected))
            );
        }
    }

    #[test]
    fn test_printable_chars_and_space() {
        assert_eq!(
            translate(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Msg::Key(Key::Text("a".into())))
        );
        assert_eq!(
            translate(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Msg::Key(Key::Text("A".into())))
        );
        assert_eq!(
            translate(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Msg::Key(Key::Space))
        );
    }

    #[test]
    fn test_ctrl_c_quits_and_other_chords_ignored() {
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Key(Key::Quit))
        );
        assert_eq!(
            translate(press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(translate(press(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(
            translate(Event::Resize(120, 40)),
            Some(Msg::Resize {
                width: 120,
                height: 40
            })
        );
        assert_eq!(
            translate(Event::Paste("two\nlines".into())),
            Some(Msg::Key(Key::Text("two lines".into())))
        );
    }
}
