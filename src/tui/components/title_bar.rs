//! # TitleBar Component
//!
//! Top status bar: system, folder path, and a status message.
//!
//! 1. **Status**: `"Jumplist | Super Nintendo > Hacks | Indexing..."`
//! 2. **Default**: `"Jumplist | Super Nintendo > Hacks"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub system_name: String,
    /// Folder names from the system root down to the current list.
    pub breadcrumb: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(system_name: String, breadcrumb: Vec<String>, status_message: String) -> Self {
        Self {
            system_name,
            breadcrumb,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut location = self.system_name.clone();
        for folder in &self.breadcrumb {
            location.push_str(" > ");
            location.push_str(folder);
        }
        if self.status_message.is_empty() {
            format!("Jumplist | {}", location)
        } else {
            format!("Jumplist | {} | {}", location, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
