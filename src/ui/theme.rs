//! Colour palettes for light and dark mode

use crate::state::Theme;
use ratatui::style::Color;

/// Colours used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub selected: Color,
    pub success: Color,
    pub error: Color,
    pub status_bg: Color,
    pub status_flash_bg: Color,
    pub double_click: Color,
    pub double_click_flash: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(102, 126, 234),
    text: Color::White,
    muted: Color::Rgb(220, 220, 245),
    accent: Color::Rgb(255, 214, 102),
    selected: Color::Cyan,
    success: Color::Rgb(72, 187, 120),
    error: Color::Rgb(229, 62, 62),
    status_bg: Color::Rgb(45, 55, 72),
    status_flash_bg: Color::Rgb(74, 85, 104),
    double_click: Color::Rgb(69, 183, 209),
    double_click_flash: Color::Rgb(255, 107, 107),
};

const DARK: Palette = Palette {
    background: Color::Rgb(26, 32, 44),
    text: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(113, 128, 150),
    accent: Color::Rgb(102, 126, 234),
    selected: Color::Cyan,
    ..LIGHT
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Linear blend from `from` (t = 0.0) to `to` (t = 1.0).
///
/// Only RGB colours are blended; anything else snaps at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Counter colour: positive, negative or zero
pub fn counter_color(palette: &Palette, value: i64) -> Color {
    match value.signum() {
        1 => palette.success,
        -1 => palette.error,
        _ => palette.accent,
    }
}
