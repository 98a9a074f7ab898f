//! Keyboard input dispatch — overlays first, then global keys, then
//! screen-specific keys. Screen keys become store `Action`s.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use tablemap_core::domain::CuisineFilter;
use tablemap_core::store::{Action, Screen};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::CuisineMenu { cursor } => {
            handle_cuisine_menu(app, key, cursor);
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    match app.model.screen {
        Screen::Listing => handle_listing_key(app, key),
        Screen::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_listing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.dispatch(Action::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => app.dispatch(Action::CursorUp),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => app.dispatch(Action::Open),
        KeyCode::Char('c') => {
            let cursor = CuisineFilter::OPTIONS
                .iter()
                .position(|&f| f == app.model.filter)
                .unwrap_or(0);
            app.overlay = Overlay::CuisineMenu { cursor };
        }
        KeyCode::Char('f') => {
            app.dispatch(Action::FitViewport);
            app.set_status("Map fitted to visible restaurants");
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            select_filter(app, CuisineFilter::OPTIONS[idx]);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
            app.dispatch(Action::Back);
        }
        _ => {}
    }
}

fn handle_cuisine_menu(app: &mut AppState, key: KeyEvent, cursor: usize) {
    let option_count = CuisineFilter::OPTIONS.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.overlay = Overlay::CuisineMenu {
                cursor: (cursor + 1).min(option_count - 1),
            };
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.overlay = Overlay::CuisineMenu {
                cursor: cursor.saturating_sub(1),
            };
        }
        KeyCode::Enter => {
            select_filter(app, CuisineFilter::OPTIONS[cursor]);
            app.overlay = Overlay::None;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            select_filter(app, CuisineFilter::OPTIONS[idx]);
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn select_filter(app: &mut AppState, filter: CuisineFilter) {
    app.dispatch(Action::SetFilter(filter));
    let shown = app.directory.filtered(filter).len();
    app.set_status(format!("Cuisine: {} ({shown} shown)", filter.label()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::path::PathBuf;
    use tablemap_core::directory::Directory;
    use tablemap_core::domain::Cuisine;

    fn app() -> AppState {
        AppState::new(Directory::san_marcos(), PathBuf::from("."))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn jk_move_the_cursor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.model.cursor, 2);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.model.cursor, 1);
    }

    #[test]
    fn enter_opens_and_esc_goes_back() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.model.screen, Screen::Detail { .. }));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.model.screen, Screen::Listing);
    }

    #[test]
    fn number_keys_select_filters_directly() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.model.filter, CuisineFilter::Only(Cuisine::Asian));
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.model.filter, CuisineFilter::All);
    }

    #[test]
    fn cuisine_menu_flow() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.overlay, Overlay::CuisineMenu { cursor: 0 });

        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.overlay, Overlay::CuisineMenu { cursor: 2 });

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.model.filter, CuisineFilter::Only(Cuisine::Asian));
    }

    #[test]
    fn menu_opens_on_the_current_selection() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.overlay, Overlay::CuisineMenu { cursor: 3 });
    }

    #[test]
    fn menu_cursor_clamps() {
        let mut app = app();
        app.overlay = Overlay::CuisineMenu { cursor: 3 };
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.overlay, Overlay::CuisineMenu { cursor: 3 });
        app.overlay = Overlay::CuisineMenu { cursor: 0 };
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.overlay, Overlay::CuisineMenu { cursor: 0 });
    }

    #[test]
    fn welcome_dismisses_on_any_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn help_toggles() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        // q inside help closes the overlay, it does not quit
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }
}
