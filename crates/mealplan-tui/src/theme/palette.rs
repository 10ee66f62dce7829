//! Color palettes for dark and light mode.

use ratatui::style::Color;

/// A full set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground drawn on top of the accent color
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(16, 185, 129),
    contrast_fg: Color::Black,
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(250, 250, 250),
    popup_bg: Color::Rgb(238, 240, 243),
    border_dim: Color::Rgb(200, 204, 210),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(5, 150, 105),
    contrast_fg: Color::White,
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    status_green: Color::Rgb(5, 150, 105),
    status_red: Color::Rgb(207, 34, 46),
    status_yellow: Color::Rgb(154, 103, 0),
};

impl Palette {
    /// The palette for the dark mode setting
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}
