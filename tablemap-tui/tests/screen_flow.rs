//! Full-frame rendering tests — drive the app with key events and assert on
//! the drawn buffer, both screens and the overlays.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use tablemap_core::directory::Directory;
use tablemap_tui::app::AppState;
use tablemap_tui::{handle_key, ui};

fn app() -> AppState {
    AppState::new(Directory::san_marcos(), PathBuf::from("."))
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn draw(app: &AppState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % buffer.area.width as usize == 0 {
            text.push('\n');
        }
    }
    text
}

#[test]
fn listing_screen_shows_title_and_all_restaurants() {
    let app = app();
    let text = draw(&app);

    assert!(text.contains("San Marcos Restaurants"));
    assert!(text.contains("Cuisine: All"));
    assert!(text.contains("Los Jambados Tacos"));
    assert!(text.contains("Garcia's"));
    assert!(text.contains("Gus's World Famous Fried Chicken"));
    assert!(text.contains("Toro Ramen and Poke Barn"));
    assert!(text.contains("Xian Sushi and Noodle"));
}

#[test]
fn filtered_listing_hides_other_cuisines() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2')); // Mexican
    let text = draw(&app);

    assert!(text.contains("Cuisine: Mexican Food"));
    assert!(text.contains("(2 shown)"));
    assert!(text.contains("Los Jambados Tacos"));
    assert!(text.contains("Garcia's"));
    assert!(!text.contains("Gus's World Famous Fried Chicken"));
    assert!(!text.contains("Toro Ramen"));
}

#[test]
fn detail_screen_shows_record_fields() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j')); // row 1 = Garcia's
    press(&mut app, KeyCode::Enter);
    let text = draw(&app);

    assert!(text.contains("Garcia's"));
    assert!(text.contains("photo: enchiladas"));
    assert!(text.contains("403 S LBJ Dr"));
    assert!(text.contains("Tex-Mex"));
    // Detail map is centered on the record with the wider span.
    assert!(text.contains("29.8776"));

    press(&mut app, KeyCode::Esc);
    let text = draw(&app);
    assert!(text.contains("San Marcos Restaurants"));
}

#[test]
fn cuisine_menu_overlay_lists_all_options_with_counts() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    let text = draw(&app);

    assert!(text.contains("All (5)"));
    assert!(text.contains("Mexican Food (2)"));
    assert!(text.contains("Asian Food (2)"));
    assert!(text.contains("Southern/Comfort Food (1)"));
}

#[test]
fn help_overlay_renders() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    let text = draw(&app);
    assert!(text.contains("Fit map to the filtered restaurants"));
}

#[test]
fn status_bar_reports_filter_changes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('4')); // Southern
    let text = draw(&app);
    assert!(text.contains("Cuisine: Southern/Comfort Food (1 shown)"));
}
