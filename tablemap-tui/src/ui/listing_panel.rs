//! Listing screen — title, cuisine filter line, restaurant list, map region
//! showing every filtered record as a pin.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use tablemap_core::view::ListingView;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &ListingView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", view.title))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // filter line
            Constraint::Min(5),                // list
            Constraint::Length(map_height(inner)), // map
        ])
        .split(inner);

    render_filter_line(f, chunks[0], view);
    render_list(f, chunks[1], view);
    super::map_panel::render(f, chunks[2], &view.region, &view.pins);
}

fn map_height(inner: Rect) -> u16 {
    // Bottom map region, roughly the lower half, never starving the list.
    (inner.height / 2).clamp(6, 14)
}

fn render_filter_line(f: &mut Frame, area: Rect, view: &ListingView) {
    let line = Line::from(vec![
        Span::styled("Cuisine: ", theme::muted()),
        Span::styled(view.filter_label, theme::accent_bold()),
        Span::styled(
            format!("  ({} shown)", view.rows.len()),
            theme::muted(),
        ),
        Span::styled("  [c]menu [1-4]quick [f]fit map", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_list(f: &mut Frame, area: Rect, view: &ListingView) {
    let mut lines: Vec<Line> = Vec::new();

    if view.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No restaurants match this cuisine.",
            theme::muted(),
        )));
    }

    for (i, row) in view.rows.iter().enumerate() {
        let is_cursor = i == view.cursor;

        let name_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::title()
        };

        lines.push(Line::from(vec![
            Span::styled(if is_cursor { "▸ " } else { "  " }, theme::accent()),
            Span::styled(row.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(
                row.cuisine.label(),
                ratatui::style::Style::default().fg(theme::cuisine_color(row.cuisine)),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(row.address.clone(), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
