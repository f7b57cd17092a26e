//! # Core Application Logic
//!
//! The game list and its jump-to-letter keyboard. Knows nothing about any
//! specific UI technology.
//!
//! ```text
//!   Library ──► IndexBuilder (background) ──► IndexSet
//!                                                │
//!   Action ──► update() ──► NavigatorState       │
//!                  │              │              │
//!                  └──► Keyboard::confirm() ─────┘──► ItemRef ──► list cursor
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: ordered jump symbols
//! - [`library`]: systems and entries scanned from disk
//! - [`index`]: per-system symbol → first item map
//! - [`builder`]: builds the index off the UI thread
//! - [`navigator`]: strip cursor, open/closed, debounce
//! - [`keyboard`]: navigator + resolution, jump vs. fallback
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and resolution

pub mod action;
pub mod alphabet;
pub mod builder;
pub mod config;
pub mod index;
pub mod keyboard;
pub mod library;
pub mod navigator;
pub mod state;
