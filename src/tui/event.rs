//! Input mapping: terminal key presses to core actions.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
pub enum TuiEvent {
    Action(Action),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            key_to_action(&key_event).map(TuiEvent::Action)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Maps a key press to an action. Releases and repeats are dropped, so one
/// physical press is one action.
pub fn key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::Down),
        (_, KeyCode::PageUp) => Some(Action::PageUp),
        (_, KeyCode::PageDown) => Some(Action::PageDown),
        (_, KeyCode::Home) => Some(Action::Home),
        (_, KeyCode::End) => Some(Action::End),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(Action::Left),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(Action::Right),
        (_, KeyCode::Enter | KeyCode::Char('a')) => Some(Action::Accept),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) => Some(Action::Back),
        (_, KeyCode::Tab | KeyCode::Char('y') | KeyCode::Char('/')) => {
            Some(Action::ToggleKeyboard)
        }
        _ => None,
    }
}
