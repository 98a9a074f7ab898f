//! Geographic viewport on a braille canvas — pins plus labels, bounded by
//! the region's edges. Shared by the listing and detail screens.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use tablemap_core::domain::Region;
use tablemap_core::view::Pin;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, region: &Region, pins: &[Pin]) {
    let (south, west, north, east) = region.bounds();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(
            " Map ({:.4}, {:.4}) ±{:.2}° ",
            region.center.lat, region.center.lon, region.span.lat_delta / 2.0
        ))
        .title_style(theme::muted());

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([west, east])
        .y_bounds([south, north])
        .paint(|ctx| {
            for pin in pins {
                let coords = [(pin.coordinate.lon, pin.coordinate.lat)];
                ctx.draw(&Points {
                    coords: &coords,
                    color: theme::NEGATIVE,
                });
            }
            // Labels over markers.
            ctx.layer();
            for pin in pins {
                ctx.print(
                    pin.coordinate.lon,
                    pin.coordinate.lat,
                    Line::styled(pin.label.clone(), theme::accent()),
                );
            }
        });

    f.render_widget(canvas, area);
}
