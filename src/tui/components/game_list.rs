//! # GameList Component
//!
//! Renders the entries of the current list with the list cursor
//! highlighted. Folders are shown with a trailing `/`.
//!
//! Follows the persistent state + transient wrapper pattern: `ListState`
//! lives in `TuiState` so the scroll offset survives between frames, and a
//! `GameList` is created each frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::library::Entry;
use crate::tui::component::Component;

pub struct GameList<'a> {
    pub entries: &'a [Entry],
    pub selected: usize,
    pub title: String,
    state: &'a mut ListState,
}

impl<'a> GameList<'a> {
    pub fn new(entries: &'a [Entry], selected: usize, title: String, state: &'a mut ListState) -> Self {
        Self {
            entries,
            selected,
            title,
            state,
        }
    }
}

fn label(entry: &Entry) -> String {
    if entry.is_game() {
        entry.name.clone()
    } else {
        format!("{}/", entry.name)
    }
}

impl Component for GameList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title));

        if self.entries.is_empty() {
            let empty = Paragraph::new("No games found")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let selected = self.selected.min(self.entries.len() - 1);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == selected {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if entry.is_game() {
                    Style::default()
                } else {
                    Style::default().fg(Color::Cyan)
                };
                let marker = if i == selected { "> " } else { "  " };
                ListItem::new(format!("{marker}{}", label(entry))).style(style)
            })
            .collect();

        let list = List::new(items).block(block);

        self.state.select(Some(selected));
        frame.render_stateful_widget(list, area, self.state);
    }
}
