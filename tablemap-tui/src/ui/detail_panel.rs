//! Detail screen — photo placeholder, address, description, and a zoomed map
//! region centered on the restaurant.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use tablemap_core::view::DetailView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &DetailView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", view.name))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // photo placeholder
            Constraint::Length(1), // address
            Constraint::Min(3),    // description
            Constraint::Length((inner.height / 2).clamp(6, 14)), // map
        ])
        .split(inner);

    render_photo(f, chunks[0], &view.image);
    render_address(f, chunks[1], &view.address);
    render_description(f, chunks[2], &view.description);
    super::map_panel::render(f, chunks[3], &view.region, std::slice::from_ref(&view.pin));
}

fn render_photo(f: &mut Frame, area: Rect, image: &str) {
    // Terminals don't do photos; keep the asset name visible instead.
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral());
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("photo: {image}"), theme::neutral())),
    ])
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(para, area);
}

fn render_address(f: &mut Frame, area: Rect, address: &str) {
    let line = Line::from(vec![
        Span::styled("Address: ", theme::muted()),
        Span::styled(address.to_string(), theme::accent()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_description(f: &mut Frame, area: Rect, description: &str) {
    let para = Paragraph::new(Line::from(Span::styled(
        description.to_string(),
        theme::title(),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
