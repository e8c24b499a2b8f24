use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub heading: Color,
    pub score: Color,
    pub error: Color,
    pub spinner: Color,
}

impl Theme {
    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            accent: Color::Cyan,
            heading: Color::Rgb(0, 210, 0),
            score: Color::Yellow,
            error: Color::Red,
            spinner: Color::Cyan,
        }
    }

    /// Modern theme: white text, electric blue accents.
    pub fn modern() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            border: Color::Rgb(60, 60, 80),
            text: Color::White,
            dim: Color::Gray,
            highlight_bg: Color::Rgb(25, 40, 70),
            accent: Color::Rgb(80, 160, 255),
            heading: Color::Rgb(80, 160, 255),
            score: Color::Rgb(255, 200, 0),
            error: Color::Rgb(255, 80, 80),
            spinner: Color::Rgb(80, 160, 255),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "modern" => Theme::modern(),
            _ => Theme::hacker(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }
}
