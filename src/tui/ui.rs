use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{GameList, JumpStrip, TitleBar};

const HELP_CLOSED: &str = "a/Enter open  b/Esc back  y/Tab jump  q quit";
const HELP_OPEN: &str = "left/right letter  a/Enter jump  y/b close";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, list_area, help_area] = layout.areas(frame.area());

    let (system_name, list_title) = match app.current_system() {
        Some(system) => (system.fullname.clone(), system.name.clone()),
        None => ("No systems configured".to_string(), String::new()),
    };

    let breadcrumb = app.breadcrumb().into_iter().map(str::to_string).collect();
    TitleBar::new(system_name, breadcrumb, app.status_message.clone()).render(frame, title_area);

    GameList::new(app.current_list(), app.selected, list_title, &mut tui.list_state)
        .render(frame, list_area);

    let open = app.keyboard.is_open();
    JumpStrip::new(app.keyboard.display_string(), open).render(frame, list_area);

    let help = if open { HELP_OPEN } else { HELP_CLOSED };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
