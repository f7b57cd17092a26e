//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::keyboard::{Keyboard, KeyboardSettings};
use crate::core::library::{Entry, Library, System};
use crate::core::state::App;

/// A system whose id and name are both `id`, with one game per name.
pub fn system(id: &str, names: &[&str]) -> System {
    let root = names
        .iter()
        .map(|name| Entry::game(*name, format!("{id}/{name}")))
        .collect();
    System::new(id, id, root)
}

pub fn library(systems: &[(&str, &[&str])]) -> Library {
    Library::new(
        systems
            .iter()
            .map(|(id, names)| system(id, names))
            .collect(),
    )
}

/// Creates a test App with default keyboard settings. Needs a tokio runtime.
pub fn test_app(library: Library) -> App {
    let library = Arc::new(library);
    let keyboard = Keyboard::spawn(Arc::clone(&library), KeyboardSettings::default());
    App::new(library, keyboard)
}
