//! # Application State
//!
//! The game-list view: which system is shown, which folders have been drilled
//! into, where the list cursor is, and the jump keyboard. No TUI types here.
//!
//! ```text
//! App
//! ├── library: Arc<Library>      // scanned systems, shared with the index build
//! ├── keyboard: Keyboard         // jump strip + background index
//! ├── system: usize              // ordinal of the system on screen
//! ├── cursor_stack: Vec<usize>   // positions of the folders drilled into
//! ├── selected: usize            // list cursor in the current list
//! ├── quick_system_select: bool  // left/right switch systems when closed
//! └── status_message: String     // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::index::ItemRef;
use crate::core::keyboard::Keyboard;
use crate::core::library::{Entry, Library, System};

/// Rows moved by page up / page down.
pub const PAGE_SIZE: usize = 10;

pub struct App {
    pub library: Arc<Library>,
    pub keyboard: Keyboard,
    pub system: usize,
    pub cursor_stack: Vec<usize>,
    pub selected: usize,
    pub quick_system_select: bool,
    pub status_message: String,
}

impl App {
    pub fn new(library: Arc<Library>, keyboard: Keyboard) -> Self {
        Self {
            library,
            keyboard,
            system: 0,
            cursor_stack: Vec::new(),
            selected: 0,
            quick_system_select: false,
            status_message: String::from("Indexing..."),
        }
    }

    /// Starts the index build and opens on the configured start system.
    pub fn from_config(library: Arc<Library>, config: &ResolvedConfig) -> Self {
        let keyboard = Keyboard::spawn(Arc::clone(&library), config.keyboard.clone());
        let mut app = Self::new(library, keyboard);
        app.quick_system_select = config.quick_system_select;
        if let Some(name) = &config.start_system {
            match app.library.position_of(name) {
                Some(ordinal) => app.system = ordinal,
                None => log::warn!("Start system '{}' is not configured", name),
            }
        }
        app
    }

    pub fn current_system(&self) -> Option<&System> {
        self.library.systems.get(self.system)
    }

    /// Entries of the list on screen: the system root, or the innermost
    /// folder drilled into.
    pub fn current_list(&self) -> &[Entry] {
        let Some(system) = self.current_system() else {
            return &[];
        };
        let mut entries: &[Entry] = &system.root;
        for &position in &self.cursor_stack {
            match entries.get(position) {
                Some(folder) => entries = &folder.children,
                None => return &[],
            }
        }
        entries
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.current_list().get(self.selected)
    }

    /// Folder names from the root to the current list.
    pub fn breadcrumb(&self) -> Vec<&str> {
        let Some(system) = self.current_system() else {
            return Vec::new();
        };
        let mut names = Vec::with_capacity(self.cursor_stack.len());
        let mut entries: &[Entry] = &system.root;
        for &position in &self.cursor_stack {
            let Some(folder) = entries.get(position) else {
                break;
            };
            names.push(folder.name.as_str());
            entries = &folder.children;
        }
        names
    }

    /// Moves the list cursor, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.current_list().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_start(&mut self) {
        self.selected = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.selected = self.current_list().len().saturating_sub(1);
    }

    /// Places the list cursor on an indexed item. Items live in a system's
    /// root list, so any drilled-into folders are left first.
    pub fn jump_to(&mut self, item: ItemRef) -> bool {
        if item.collection != self.system {
            return false;
        }
        let Some(system) = self.current_system() else {
            return false;
        };
        if item.position >= system.root.len() {
            return false;
        }
        self.cursor_stack.clear();
        self.selected = item.position;
        true
    }

    /// Shows another system, wrapping at both ends.
    pub fn switch_system(&mut self, forward: bool) {
        let count = self.library.systems.len();
        if count == 0 {
            return;
        }
        self.system = if forward {
            (self.system + 1) % count
        } else {
            (self.system + count - 1) % count
        };
        self.cursor_stack.clear();
        self.selected = 0;
    }
}
