/// StatusBar widget - displays the status message at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message (or error) │ right notification indicator
///
/// Error messages are displayed with the error color.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::component::ElementWidget;
use crate::tui::theme::Palette;

const RIGHT_TEXT_WIDTH: u16 = 9;

#[derive(Debug, Clone)]
pub struct StatusBar {
    pub message: String,
    pub is_error: bool,
    pub notifications_enabled: bool,
}

impl StatusBar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            notifications_enabled: true,
        }
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    fn left_text(&self) -> String {
        if self.is_error {
            format!("ERROR: {}", self.message)
        } else {
            self.message.clone()
        }
    }

    fn right_text(&self) -> &'static str {
        if self.notifications_enabled {
            "notify on"
        } else {
            "notify  -"
        }
    }
}

impl ElementWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Layout: [margin][left content][padding]│[margin][right text][margin]
        let bar_position = area.width.saturating_sub(RIGHT_TEXT_WIDTH + 3);

        let separator = format!(
            "{}┴{}",
            "─".repeat(bar_position as usize),
            "─".repeat(area.width.saturating_sub(bar_position + 1) as usize)
        );
        buf.set_string(area.x, area.y, &separator, palette.dim());

        let left_style = if self.is_error {
            palette.error_style()
        } else {
            palette.text()
        };
        let y = area.y + 1;
        buf.set_stringn(
            area.x + 1,
            y,
            self.left_text(),
            bar_position.saturating_sub(2) as usize,
            left_style,
        );
        if bar_position < area.width {
            buf.set_string(area.x + bar_position, y, "│", palette.dim());
            buf.set_stringn(
                area.x + bar_position + 2,
                y,
                self.right_text(),
                area.width.saturating_sub(bar_position + 2) as usize,
                Style::new().fg(palette.muted),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
