use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

/// Colors for one dashboard theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    fg: Color::White,
    muted: Color::DarkGray,
    accent: Color::Rgb(186, 104, 200), // Lavender
    border: Color::Gray,
    error: Color::Red,
};

pub const ORANGE: Palette = Palette {
    fg: Color::White,
    muted: Color::DarkGray,
    accent: Color::Rgb(255, 152, 0),
    border: Color::Rgb(255, 183, 77),
    error: Color::Red,
};

impl Default for Palette {
    fn default() -> Self {
        DARK
    }
}

impl Palette {
    /// Resolve the applied theme attribute; unset or unknown means dark
    pub fn for_theme(theme: Option<&str>) -> Self {
        match theme.map(str::to_lowercase).as_deref() {
            None | Some("dark") => DARK,
            Some("orange") => ORANGE,
            Some(other) => {
                debug!("THEME: No palette for '{}', using dark", other);
                DARK
            }
        }
    }

    pub fn text(&self) -> Style {
        Style::new().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.accent)
        } else {
            Style::new().fg(self.border)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::new().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
