//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the game list
//! and jump strip, and translates key presses into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Indexing**: polls every 100ms so the status flips to ready promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::library::Library;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub list_state: ListState,
    /// Set once the index build has reported in (or failed).
    pub index_settled: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            index_settled: false,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Event types let us drop key releases; terminals without the
        // protocol ignore the request and only ever send presses.
        execute!(
            stdout(),
            Hide,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        info!("Terminal modes enabled (hidden cursor, key event types)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, Show);
    }
}

/// Runs the game list until the user quits or launches a game. Returns the
/// launched game's path. Must be called from within a tokio runtime.
pub fn run(config: &ResolvedConfig, library: Library) -> io::Result<Option<PathBuf>> {
    let mut app = App::from_config(Arc::new(library), config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<Option<PathBuf>> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if !tui.index_settled {
            match app.keyboard.index_ready() {
                Ok(true) => {
                    tui.index_settled = true;
                    app.status_message.clear();
                    needs_redraw = true;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!("Index build failed: {}", e);
                    tui.index_settled = true;
                    app.status_message = format!("Index unavailable: {}", e);
                    needs_redraw = true;
                }
            }
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.index_settled {
            Duration::from_millis(500)
        } else {
            Duration::from_millis(100)
        };
        let Some(first_event) = poll_event_timeout(timeout)? else {
            continue;
        };
        needs_redraw = true;

        // Drain everything pending before the next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if let TuiEvent::Action(action) = event {
                match update(app, action) {
                    Effect::None => {}
                    Effect::Quit => return Ok(None),
                    Effect::Launch(path) => return Ok(Some(path)),
                }
            }
            next = poll_event_immediate()?;
        }
    }
}
