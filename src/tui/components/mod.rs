//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: system name, folder path, status
//! - `JumpStrip`: the jump keyboard overlay
//!
//! ### Stateful Components
//!
//! - `GameList`: the list of entries; scroll offset lives in `ListState`
//!   owned by `TuiState`, the component is a per-frame wrapper around it
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status bar)
//! ├── game_list.rs   (Entry list)
//! └── jump_strip.rs  (Letter strip overlay)
//! ```

pub mod game_list;
pub mod jump_strip;
mod title_bar;

pub use game_list::GameList;
pub use jump_strip::JumpStrip;
pub use title_bar::TitleBar;
