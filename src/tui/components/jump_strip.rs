//! # JumpStrip Component
//!
//! The jump keyboard, drawn as a one-line bordered overlay across the list
//! at 15% of the screen height. Only the string and the visibility flag come
//! from the keyboard; this component does no navigation of its own.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct JumpStrip {
    pub keys: String,
    pub visible: bool,
}

impl JumpStrip {
    pub fn new(keys: String, visible: bool) -> Self {
        Self { keys, visible }
    }

    /// Where the overlay goes inside `area`: centered horizontally, three
    /// rows tall, its top at 15% of the height.
    pub fn overlay_area(&self, area: Rect) -> Rect {
        let keys_width = u16::try_from(self.keys.width()).unwrap_or(u16::MAX);
        let width = keys_width.saturating_add(4).min(area.width);
        let height = 3.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let offset = (u32::from(area.height) * 15 / 100) as u16;
        let y = (area.y + offset).min(area.y + area.height - height);
        Rect::new(x, y, width, height)
    }
}

impl Component for JumpStrip {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible || area.height == 0 {
            return;
        }
        let overlay = self.overlay_area(area);
        frame.render_widget(Clear, overlay);
        let strip = Paragraph::new(self.keys.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(strip, overlay);
    }
}
