//! Style tokens — neon accents on a dark terminal background.

use ratatui::style::{Color, Modifier, Style};

use tablemap_core::domain::Cuisine;

/// Electric cyan (focus, highlights).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green (positive, cached, selected).
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Hot pink (errors, map pins).
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
/// Neon orange (warnings).
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple (secondary info).
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue (muted text, hints).
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

/// Color for a cuisine tag.
pub fn cuisine_color(cuisine: Cuisine) -> Color {
    match cuisine {
        Cuisine::Mexican => WARNING,
        Cuisine::Asian => NEUTRAL,
        Cuisine::Southern => POSITIVE,
    }
}
