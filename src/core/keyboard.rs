//! # Jump Keyboard
//!
//! The surface the list view talks to: navigator state plus resolution of the
//! cursor symbol against the background-built index.
//!
//! `confirm()` carries the dual meaning of the accept button while the strip
//! is open. It jumps when the current symbol resolves to an item *and* differs
//! from the previously chosen symbol; otherwise the caller falls back to its
//! ordinary accept (launch or drill into the selected entry).

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::alphabet::Alphabet;
use crate::core::builder::{IndexBuilder, IndexError};
use crate::core::index::{IndexSet, ItemRef};
use crate::core::library::Library;
use crate::core::navigator::{DEFAULT_CLOSE_DEBOUNCE, DEFAULT_ITERATE_STEP, NavigatorState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardSettings {
    pub alphabet: Alphabet,
    pub iterate_step: usize,
    pub close_debounce: Duration,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin(),
            iterate_step: DEFAULT_ITERATE_STEP,
            close_debounce: DEFAULT_CLOSE_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Move the list cursor here.
    Jump(ItemRef),
    /// Nothing new to jump to; do the normal accept instead.
    Fallback,
}

pub struct Keyboard {
    navigator: NavigatorState,
    builder: IndexBuilder,
}

impl Keyboard {
    /// Starts the index build for `library` and returns a closed keyboard.
    pub fn spawn(library: Arc<Library>, settings: KeyboardSettings) -> Self {
        let builder = IndexBuilder::spawn(library, settings.alphabet.clone());
        let navigator = NavigatorState::with_settings(
            settings.alphabet,
            settings.iterate_step,
            settings.close_debounce,
        );
        Self { navigator, builder }
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    pub fn display_string(&self) -> String {
        self.navigator.display_string()
    }

    pub fn current_symbol(&self) -> char {
        self.navigator.current_symbol()
    }

    pub fn request_open(&mut self) {
        self.navigator.request_open();
    }

    pub fn request_open_at(&mut self, now: Instant) {
        self.navigator.request_open_at(now);
    }

    pub fn request_close(&mut self) -> bool {
        self.navigator.request_close()
    }

    pub fn request_close_at(&mut self, now: Instant) -> bool {
        self.navigator.request_close_at(now)
    }

    pub fn iterate_left(&mut self) {
        self.navigator.iterate_left();
    }

    pub fn iterate_right(&mut self) {
        self.navigator.iterate_right();
    }

    pub fn previous_choice_equals_current(&self) -> bool {
        self.navigator.previous_choice_equals_current()
    }

    /// Non-blocking readiness check for status display.
    pub fn index_ready(&mut self) -> Result<bool, IndexError> {
        self.builder.poll()
    }

    /// Blocks until the index is built, then hands it out.
    pub fn index(&mut self) -> Result<&IndexSet, IndexError> {
        self.builder.await_done()
    }

    /// Item for the cursor symbol in `collection_id`, waiting for the build
    /// on first use. `Ok(None)` is the ordinary not-found case.
    pub fn resolve(&mut self, collection_id: &str) -> Result<Option<ItemRef>, IndexError> {
        let symbol = self.navigator.current_symbol();
        self.resolve_symbol(collection_id, symbol)
    }

    pub fn resolve_symbol(
        &mut self,
        collection_id: &str,
        symbol: char,
    ) -> Result<Option<ItemRef>, IndexError> {
        let set = self.builder.await_done()?;
        Ok(set.lookup(collection_id, symbol))
    }

    /// Resolves the cursor symbol and decides between jump and fallback.
    /// A jump records the symbol as the previous choice.
    pub fn confirm(&mut self, collection_id: &str) -> Result<JumpOutcome, IndexError> {
        let symbol = self.navigator.current_symbol();
        let resolved = self.resolve(collection_id)?;
        match resolved {
            Some(item) if !self.previous_choice_equals_current() => {
                debug!("Jump to '{}' in {}: {:?}", symbol, collection_id, item);
                self.navigator.set_previous_choice(symbol);
                Ok(JumpOutcome::Jump(item))
            }
            _ => {
                debug!("No new jump target for '{}' in {}", symbol, collection_id);
                Ok(JumpOutcome::Fallback)
            }
        }
    }
}
