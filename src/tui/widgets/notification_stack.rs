/// NotificationStack widget - toasts stacked in the top-right corner
///
/// Entering and leaving toasts are drawn dimmed; visible ones use the accent
/// border.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::tui::component::ElementWidget;
use crate::tui::layout::toast_areas;
use crate::tui::notifications::{Toast, ToastPhase};
use crate::tui::theme::Palette;

#[derive(Debug, Clone)]
pub struct NotificationStack {
    pub toasts: Vec<Toast>,
}

impl ElementWidget for NotificationStack {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        for (toast, toast_area) in self.toasts.iter().zip(toast_areas(area, self.toasts.len())) {
            let visible = toast.phase == ToastPhase::Visible;
            let (border, text) = if visible {
                (palette.border_style(true), palette.text())
            } else {
                (palette.dim(), palette.dim())
            };

            Clear.render(toast_area, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(format!(" {} ", toast.title))
                .title_style(if visible { palette.highlight() } else { palette.dim() });
            let inner = block.inner(toast_area);
            block.render(toast_area, buf);

            if inner.width > 2 && inner.height > 0 {
                buf.set_stringn(
                    inner.x + 1,
                    inner.y,
                    &toast.message,
                    inner.width as usize - 2,
                    text,
                );
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
