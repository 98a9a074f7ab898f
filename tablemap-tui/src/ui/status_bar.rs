//! Bottom status bar — key hints for the active screen, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tablemap_core::store::Screen;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = match app.model.screen {
        Screen::Listing => " j/k:move Enter:open c:cuisine f:fit ?:help q:quit",
        Screen::Detail { .. } => " Esc:back ?:help q:quit",
    };

    let mut spans: Vec<Span> = vec![Span::styled(hints, theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
