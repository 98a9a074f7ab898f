//! Top-level UI layout — active screen plus a 1-line status bar, overlays
//! drawn on top. The screen content comes from the core scene renderer; this
//! module only maps the view description onto widgets.

pub mod detail_panel;
pub mod listing_panel;
pub mod map_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use tablemap_core::view::{scene, Scene};

use crate::app::{AppState, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    // Derived views are recomputed from the snapshot on every frame.
    match scene(&app.model, &app.directory) {
        Scene::Listing(view) => listing_panel::render(f, main_area, &view),
        Scene::Detail(view) => detail_panel::render(f, main_area, &view),
    }

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::CuisineMenu { cursor } => {
            overlays::render_cuisine_menu(f, main_area, app, *cursor)
        }
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
