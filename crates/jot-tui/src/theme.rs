//! Theme configuration for the terminal front end

use clap::ValueEnum;
use ratatui::style::Color;

/// Theme selection, picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Resolve the mode into concrete colors
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

/// Concrete colors consumed by the render functions.
///
/// Passed down explicitly; nothing reads theme state ambiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        // Bar color carried over from the original mockup
        bar_bg: Color::Rgb(0xda, 0xdf, 0xe3),
        bar_fg: Color::Black,
        text_primary: Color::Black,
        text_secondary: Color::DarkGray,
        accent: Color::Blue,
        border: Color::Gray,
        selection_bg: Color::Rgb(0xda, 0xdf, 0xe3),
    };

    pub const DARK: Self = Self {
        bar_bg: Color::Rgb(0x2b, 0x31, 0x36),
        bar_fg: Color::White,
        text_primary: Color::White,
        text_secondary: Color::Gray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        selection_bg: Color::Rgb(0x2b, 0x31, 0x36),
    };
}
