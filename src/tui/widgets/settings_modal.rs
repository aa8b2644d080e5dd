/// SettingsModal widget - the centered settings form over a dimmed backdrop
///
/// Features:
/// - Dims everything outside the modal (the backdrop)
/// - Clear background behind the modal
/// - Focus marker on the current control
/// - "Saving..." footer while a save is in flight
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::ElementWidget;
use crate::tui::layout::modal_area;
use crate::tui::modal::{FormField, SettingsForm};
use crate::tui::theme::Palette;

const LABEL_WIDTH: usize = 15;

#[derive(Debug, Clone)]
pub struct SettingsModal {
    pub form: SettingsForm,
    pub saving: bool,
}

impl SettingsModal {
    fn field_line(&self, field: FormField) -> String {
        let checkbox = |on: bool| if on { "[x] On" } else { "[ ] Off" };
        let (label, value) = match field {
            FormField::Theme => ("Theme", format!("◀ {} ▶", self.form.selected_theme())),
            FormField::Fullscreen => ("Fullscreen", checkbox(self.form.fullscreen).to_string()),
            FormField::Notifications => {
                ("Notifications", checkbox(self.form.notifications).to_string())
            }
            FormField::Save | FormField::Cancel => return String::new(),
        };
        format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
    }

    fn marker(&self, field: FormField) -> &'static str {
        if self.form.focus == field {
            "› "
        } else {
            "  "
        }
    }

    fn style_for(&self, field: FormField, palette: &Palette) -> Style {
        if self.form.focus == field {
            palette.highlight()
        } else {
            palette.text()
        }
    }
}

impl ElementWidget for SettingsModal {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        buf.set_style(area, Style::new().add_modifier(Modifier::DIM));

        let modal = modal_area(area);
        Clear.render(modal, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style(true))
            .title(" Settings ")
            .title_style(palette.highlight());
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width < 4 || inner.height < 8 {
            return;
        }
        let width = inner.width as usize - 1;
        let x = inner.x + 1;

        let rows = [FormField::Theme, FormField::Fullscreen, FormField::Notifications];
        for (i, field) in rows.into_iter().enumerate() {
            let line = format!("{}{}", self.marker(field), self.field_line(field));
            buf.set_stringn(x, inner.y + 1 + i as u16, line, width, self.style_for(field, palette));
        }

        let buttons_y = inner.y + 5;
        let save = format!("{}[ Save ]", self.marker(FormField::Save));
        let cancel = format!("{}[ Cancel ]", self.marker(FormField::Cancel));
        buf.set_stringn(x, buttons_y, &save, width, self.style_for(FormField::Save, palette));
        let cancel_x = x + save.width() as u16 + 2;
        if cancel_x < inner.x + inner.width {
            buf.set_stringn(
                cancel_x,
                buttons_y,
                &cancel,
                (inner.x + inner.width - cancel_x) as usize,
                self.style_for(FormField::Cancel, palette),
            );
        }

        let footer = if self.saving {
            "Saving..."
        } else {
            "↑↓ move  ←→ change  Enter select  Esc close"
        };
        buf.set_stringn(x, inner.y + 7, footer, width, palette.dim());
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
