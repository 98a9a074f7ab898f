//! Overlay widgets — welcome, cuisine menu, help.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use tablemap_core::domain::CuisineFilter;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to TableMap ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Move through the restaurant list with j/k",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Press c to pick a cuisine (or 1-4 directly)",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press Enter to open a restaurant's detail page",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press f to fit the map to what's shown",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Cuisine filter menu.
pub fn render_cuisine_menu(f: &mut Frame, area: Rect, app: &AppState, cursor: usize) {
    let popup = centered_rect(40, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Cuisine [Enter]select [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, option) in CuisineFilter::OPTIONS.iter().enumerate() {
        let is_cursor = i == cursor;
        let is_current = *option == app.model.filter;
        let count = app.directory.filtered(*option).len();

        let marker = if is_current { "● " } else { "○ " };
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_current {
            theme::accent()
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(marker, theme::accent()),
            Span::styled(format!("{} ({count})", option.label()), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Keyboard shortcut help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Listing");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter / l", "Open restaurant detail");
    key(&mut lines, "c", "Open the cuisine menu");
    key(&mut lines, "1-4", "Select cuisine directly (1 = All)");
    key(&mut lines, "f", "Fit map to the filtered restaurants");
    lines.push(Line::from(""));

    section(&mut lines, "Detail");
    key(&mut lines, "Esc / h", "Back to the listing");
    lines.push(Line::from(""));

    section(&mut lines, "Global");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");

    f.render_widget(Paragraph::new(lines), inner);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>12}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
