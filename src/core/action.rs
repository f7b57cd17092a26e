//! # Actions
//!
//! Everything the user can do in the game list becomes an `Action`.
//! The input layer maps keys to actions; it never touches state itself.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! Routing depends on whether the jump keyboard is open:
//!
//! | Action           | Keyboard closed                | Keyboard open                  |
//! |------------------|--------------------------------|--------------------------------|
//! | `Accept`         | launch game / enter folder     | jump, or launch / enter        |
//! | `Back`           | leave folder                   | close keyboard                 |
//! | `ToggleKeyboard` | open keyboard                  | close keyboard                 |
//! | `Left`/`Right`   | switch system (if enabled)     | move keyboard cursor           |
//! | `Up`/`Down`/...  | move list cursor               | move list cursor               |
//!
//! Closing is debounced by the navigator, so a close that arrives right
//! after opening is dropped.

use std::path::PathBuf;
use std::time::Instant;

use log::{error, info, warn};

use crate::core::keyboard::JumpOutcome;
use crate::core::state::{App, PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Left,
    Right,
    Accept,
    Back,
    ToggleKeyboard,
    Quit,
}

/// What the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Launch(PathBuf),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    update_at(app, action, Instant::now())
}

/// [`update`] with an explicit clock, for the keyboard's debounce.
pub fn update_at(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::Up => app.move_cursor(-1),
        Action::Down => app.move_cursor(1),
        Action::PageUp => app.move_cursor(-(PAGE_SIZE as isize)),
        Action::PageDown => app.move_cursor(PAGE_SIZE as isize),
        Action::Home => app.cursor_to_start(),
        Action::End => app.cursor_to_end(),
        _ if app.keyboard.is_open() => return keyboard_input(app, action, now),
        Action::Accept => return accept_selected(app),
        Action::Back => leave_folder(app),
        Action::ToggleKeyboard => app.keyboard.request_open_at(now),
        Action::Left | Action::Right => {
            if app.quick_system_select {
                app.switch_system(action == Action::Right);
            }
        }
    }
    Effect::None
}

fn keyboard_input(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::Back | Action::ToggleKeyboard => {
            app.keyboard.request_close_at(now);
        }
        Action::Left => app.keyboard.iterate_left(),
        Action::Right => app.keyboard.iterate_right(),
        Action::Accept => return confirm(app),
        _ => {}
    }
    Effect::None
}

fn confirm(app: &mut App) -> Effect {
    let Some(collection_id) = app.current_system().map(|s| s.id().to_string()) else {
        return Effect::None;
    };
    match app.keyboard.confirm(&collection_id) {
        Ok(JumpOutcome::Jump(item)) => {
            if app.jump_to(item) {
                Effect::None
            } else {
                warn!("Jump target {:?} is not in {}", item, collection_id);
                accept_selected(app)
            }
        }
        Ok(JumpOutcome::Fallback) => accept_selected(app),
        Err(e) => {
            error!("Jump failed: {}", e);
            app.status_message = format!("Jump unavailable: {}", e);
            Effect::None
        }
    }
}

/// Launches the selected game, or enters the selected folder if it has
/// anything in it.
fn accept_selected(app: &mut App) -> Effect {
    let Some(entry) = app.selected_entry() else {
        return Effect::None;
    };
    if entry.is_game() {
        info!("Launching {}", entry.path.display());
        return Effect::Launch(entry.path.clone());
    }
    if !entry.children.is_empty() {
        let position = app.selected;
        app.cursor_stack.push(position);
        app.selected = 0;
    }
    Effect::None
}

/// Back to the parent list with the cursor on the folder we came from.
fn leave_folder(app: &mut App) {
    if let Some(position) = app.cursor_stack.pop() {
        app.selected = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::{Entry, Library, System};
    use crate::test_support::{library, test_app};
    use std::time::Duration;

    fn after_debounce(t0: Instant) -> Instant {
        t0 + Duration::from_millis(60)
    }

    fn open_keyboard(app: &mut App) -> Instant {
        let t0 = Instant::now();
        update_at(app, Action::ToggleKeyboard, t0);
        assert!(app.keyboard.is_open());
        t0
    }

    fn nested() -> Library {
        Library::new(vec![System::new(
            "snes",
            "/roms/snes",
            vec![
                Entry::game("Actraiser", "/roms/snes/Actraiser.sfc"),
                Entry::folder(
                    "Hacks",
                    "/roms/snes/Hacks",
                    vec![Entry::game("Kaizo", "/roms/snes/Hacks/Kaizo.sfc")],
                ),
                Entry::game("Zelda", "/roms/snes/Zelda.sfc"),
            ],
        )])
    }

    #[tokio::test]
    async fn test_accept_launches_game() {
        let mut app = test_app(nested());
        let effect = update(&mut app, Action::Accept);
        assert_eq!(effect, Effect::Launch(PathBuf::from("/roms/snes/Actraiser.sfc")));
    }

    #[tokio::test]
    async fn test_accept_enters_folder_and_back_returns() {
        let mut app = test_app(nested());
        update(&mut app, Action::Down);
        assert_eq!(update(&mut app, Action::Accept), Effect::None);
        assert_eq!(app.cursor_stack, vec![1]);
        assert_eq!(app.selected_entry().map(|e| e.name.as_str()), Some("Kaizo"));

        update(&mut app, Action::Back);
        assert!(app.cursor_stack.is_empty());
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_close_is_debounced() {
        let mut app = test_app(nested());
        let t0 = open_keyboard(&mut app);
        update_at(&mut app, Action::ToggleKeyboard, t0 + Duration::from_millis(5));
        assert!(app.keyboard.is_open());
        update_at(&mut app, Action::Back, after_debounce(t0));
        assert!(!app.keyboard.is_open());
    }

    #[tokio::test]
    async fn test_open_keyboard_captures_left_right() {
        let mut app = test_app(library(&[("a", &["Alpha"]), ("b", &["Beta"])]));
        app.quick_system_select = true;
        open_keyboard(&mut app);
        update(&mut app, Action::Right);
        assert_eq!(app.system, 0);
        assert_eq!(app.keyboard.navigator().current_index(), 2);
    }

    #[tokio::test]
    async fn test_quick_system_select_when_closed() {
        let mut app = test_app(library(&[("a", &["Alpha"]), ("b", &["Beta"])]));
        update(&mut app, Action::Right);
        assert_eq!(app.system, 0);
        app.quick_system_select = true;
        update(&mut app, Action::Right);
        assert_eq!(app.system, 1);
        update(&mut app, Action::Left);
        assert_eq!(app.system, 0);
    }

    #[tokio::test]
    async fn test_confirm_jumps_from_inside_folder() {
        let mut app = test_app(nested());
        update(&mut app, Action::Down);
        update(&mut app, Action::Accept);
        assert_eq!(app.cursor_stack, vec![1]);

        open_keyboard(&mut app);
        // Step 2 from A: C, E, ..., Y after 12 presses.
        for _ in 0..12 {
            update(&mut app, Action::Right);
        }
        assert_eq!(app.keyboard.current_symbol(), 'Y');
        update(&mut app, Action::Right);
        update(&mut app, Action::Left);
        assert_eq!(app.keyboard.current_symbol(), 'Y');

        // No Y in the root list: falls back to launching the selection.
        assert_eq!(
            update(&mut app, Action::Accept),
            Effect::Launch(PathBuf::from("/roms/snes/Hacks/Kaizo.sfc"))
        );
    }

    #[tokio::test]
    async fn test_confirm_jump_then_launch() {
        let mut app = test_app(library(&[("nes", &["Contra", "Duck Hunt", "Excitebike"])]));
        open_keyboard(&mut app);
        update(&mut app, Action::Right);
        update(&mut app, Action::Right);
        assert_eq!(app.keyboard.current_symbol(), 'E');

        assert_eq!(update(&mut app, Action::Accept), Effect::None);
        assert_eq!(app.selected, 2);

        // Same letter again: accept launches what's selected.
        assert!(matches!(
            update(&mut app, Action::Accept),
            Effect::Launch(_)
        ));
    }

    #[tokio::test]
    async fn test_rejected_jump_falls_back_to_selection() {
        // Both systems share an id, so the index resolves into the first one.
        let mut app = test_app(Library::new(vec![
            System::new("a", "/roms/shared", vec![Entry::game("Alpha", "/roms/a/Alpha.nes")]),
            System::new("b", "/roms/shared", vec![Entry::game("Beta", "/roms/b/Beta.nes")]),
        ]));
        app.switch_system(true);
        open_keyboard(&mut app);
        assert_eq!(app.keyboard.current_symbol(), 'A');

        assert_eq!(
            update(&mut app, Action::Accept),
            Effect::Launch(PathBuf::from("/roms/b/Beta.nes"))
        );
        assert_eq!(app.system, 1);
    }

    #[tokio::test]
    async fn test_list_moves_while_keyboard_open() {
        let mut app = test_app(nested());
        open_keyboard(&mut app);
        update(&mut app, Action::End);
        assert_eq!(app.selected, 2);
        update(&mut app, Action::PageUp);
        assert_eq!(app.selected, 0);
        assert!(app.keyboard.is_open());
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = test_app(nested());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
