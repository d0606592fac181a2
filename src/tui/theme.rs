//! Theme for the terminal UI.
//!
//! Centralizes color and style definitions so the renderer stays free of
//! literal colors.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Plain output lines
    pub text: Color,
    /// Echoed command lines
    pub echo: Color,
    /// Animated placeholder and hints
    pub dim: Color,
    /// Prompt marker and borders
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Standard ANSI colors so it matches the hosting terminal
        Self {
            text: Color::Gray,
            echo: Color::White,
            dim: Color::DarkGray,
            accent: Color::Green,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn echo_style(&self) -> Style {
        Style::default().fg(self.echo).add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
