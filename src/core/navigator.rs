//! # Navigator State
//!
//! The jump strip's cursor and visibility.
//!
//! ```text
//!            open                 close (≥ debounce since open)
//!  Closed ─────────► Open ────────────────────────────────────► Closed
//!                    │  ▲          resets cursor + casing
//!     left / right   └──┘
//!                        close (< debounce) is ignored
//! ```
//!
//! Time is passed in by the caller so transitions can be driven by tests;
//! the plain methods read the clock themselves.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::alphabet::Alphabet;

pub const DEFAULT_ITERATE_STEP: usize = 2;
pub const DEFAULT_CLOSE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Matches nothing in any alphabet.
pub const NO_CHOICE: char = ' ';

#[derive(Debug, Clone)]
pub struct NavigatorState {
    alphabet: Alphabet,
    step: usize,
    debounce: Duration,
    current: usize,
    open_since: Option<Instant>,
    previous_choice: char,
    display: Vec<char>,
}

impl NavigatorState {
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_settings(alphabet, DEFAULT_ITERATE_STEP, DEFAULT_CLOSE_DEBOUNCE)
    }

    pub fn with_settings(alphabet: Alphabet, step: usize, debounce: Duration) -> Self {
        let display = default_display(&alphabet);
        Self {
            alphabet,
            step,
            debounce,
            current: 0,
            open_since: None,
            previous_choice: NO_CHOICE,
            display,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_since.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Canonical symbol under the cursor.
    pub fn current_symbol(&self) -> char {
        self.alphabet.get(self.current).unwrap_or(NO_CHOICE)
    }

    pub fn previous_choice(&self) -> char {
        self.previous_choice
    }

    pub fn set_previous_choice(&mut self, symbol: char) {
        self.previous_choice = symbol;
    }

    pub fn previous_choice_equals_current(&self) -> bool {
        self.previous_choice == self.current_symbol()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The strip as text: symbols separated by spaces, cursor uppercase,
    /// everything else lowercase.
    pub fn display_string(&self) -> String {
        let mut out = String::with_capacity(self.display.len() * 2);
        for (i, c) in self.display.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    pub fn display_symbols(&self) -> &[char] {
        &self.display
    }

    pub fn request_open(&mut self) {
        self.request_open_at(Instant::now());
    }

    pub fn request_open_at(&mut self, now: Instant) {
        if self.open_since.is_none() {
            debug!("Keyboard opened");
            self.open_since = Some(now);
        }
    }

    pub fn request_close(&mut self) -> bool {
        self.request_close_at(Instant::now())
    }

    /// Closes if the strip has been open for at least the debounce window.
    /// Returns whether the close was honoured.
    pub fn request_close_at(&mut self, now: Instant) -> bool {
        let Some(opened) = self.open_since else {
            return false;
        };
        if now.saturating_duration_since(opened) < self.debounce {
            debug!("Keyboard close ignored inside debounce window");
            return false;
        }
        debug!("Keyboard closed");
        self.open_since = None;
        self.reset();
        true
    }

    pub fn iterate_left(&mut self) {
        let n = self.alphabet.len() as isize;
        let next = (self.current as isize - self.step as isize).rem_euclid(n);
        self.move_to(next as usize);
    }

    pub fn iterate_right(&mut self) {
        let next = (self.current + self.step) % self.alphabet.len();
        self.move_to(next);
    }

    /// Cursor back to the first symbol with default casing.
    pub fn reset(&mut self) {
        self.current = 0;
        self.display = default_display(&self.alphabet);
    }

    fn move_to(&mut self, index: usize) {
        if let Some(c) = self.display.get_mut(self.current) {
            *c = lower(*c);
        }
        self.current = index;
        if let Some(c) = self.display.get_mut(self.current) {
            *c = upper(*c);
        }
    }
}

fn default_display(alphabet: &Alphabet) -> Vec<char> {
    alphabet
        .ordered()
        .iter()
        .enumerate()
        .map(|(i, c)| if i == 0 { upper(*c) } else { lower(*c) })
        .collect()
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
