//! Light and dark color palettes

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection: Color,
    pub error: Color,
    pub completed: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::White,
        foreground: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        selection: Color::Gray,
        error: Color::Red,
        completed: Color::Green,
    };

    pub const DARK: Palette = Palette {
        background: Color::Black,
        foreground: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        selection: Color::DarkGray,
        error: Color::LightRed,
        completed: Color::LightGreen,
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
