use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::ElementWidget;
use crate::tui::theme::Palette;

pub const TITLE: &str = "IVI Dashboard";

/// Top bar with the dashboard title and the applied theme
#[derive(Debug, Clone)]
pub struct Header {
    pub theme: Option<String>,
}

impl Header {
    fn theme_label(&self) -> String {
        format!("theme: {}", self.theme.as_deref().unwrap_or("default"))
    }
}

impl ElementWidget for Header {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.dim());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }
        buf.set_stringn(inner.x + 1, inner.y, TITLE, inner.width as usize - 1, palette.highlight());

        let label = self.theme_label();
        let label_width = label.width() as u16;
        if inner.width > label_width + TITLE.width() as u16 + 3 {
            buf.set_string(
                inner.x + inner.width - label_width - 1,
                inner.y,
                &label,
                palette.dim(),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, render_widget};

    #[test]
    fn test_header_shows_title_and_theme() {
        let buf = render_widget(&Header { theme: Some("orange".into()) }, 40, 3);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with(" IVI Dashboard"));
        assert!(lines[0].trim_end().ends_with("theme: orange"));
        assert!(lines[1].trim().is_empty());
        assert!(lines[2].chars().all(|c| c == '─'));
    }

    #[test]
    fn test_unset_theme_is_labelled_default() {
        let buf = render_widget(&Header { theme: None }, 40, 3);
        assert!(buffer_lines(&buf)[0].contains("theme: default"));
    }

    #[test]
    fn test_narrow_header_drops_theme_label() {
        let buf = render_widget(&Header { theme: Some("dark".into()) }, 20, 3);
        assert_eq!(buffer_lines(&buf)[0].trim_end(), " IVI Dashboard");
    }
}
