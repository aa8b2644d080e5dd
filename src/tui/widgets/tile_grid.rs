/// TileGrid widget - the 2x2 launcher grid
///
/// Uses the same tile rectangles as mouse hit-testing, so a click lands on
/// the tile drawn under the cursor.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::ElementWidget;
use crate::tui::layout::tile_areas;
use crate::tui::theme::Palette;
use crate::tui::tiles::Tile;

#[derive(Debug, Clone)]
pub struct TileGrid {
    pub focused: Tile,
}

impl TileGrid {
    fn render_tile(&self, tile: Tile, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let focused = tile == self.focused;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(palette.border_style(focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let label_style = if focused {
            palette.highlight()
        } else {
            palette.text()
        };
        let middle = inner.y + inner.height.saturating_sub(1) / 2;
        centered_line(tile.label(), inner, middle, label_style, buf);

        if inner.height >= 3 {
            let hint = format!("[{}]", tile.shortcut());
            centered_line(&hint, inner, middle + 1, palette.dim(), buf);
        }
    }
}

fn centered_line(text: &str, area: Rect, y: u16, style: ratatui::style::Style, buf: &mut Buffer) {
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

impl ElementWidget for TileGrid {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        for (tile, tile_area) in tile_areas(area) {
            self.render_tile(tile, tile_area, buf, palette);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_contains, buffer_lines, render_widget};

    #[test]
    fn test_grid_shows_all_tiles_with_shortcuts() {
        let buf = render_widget(&TileGrid { focused: Tile::Maps }, 40, 10);

        for tile in Tile::ALL {
            assert!(buffer_contains(&buf, tile.label()), "missing {}", tile.label());
            assert!(buffer_contains(&buf, &format!("[{}]", tile.shortcut())));
        }
    }

    #[test]
    fn test_focused_tile_has_thick_border() {
        let buf = render_widget(&TileGrid { focused: Tile::Radio }, 40, 10);
        let lines = buffer_lines(&buf);

        assert!(lines[0].starts_with('╭'));
        assert!(lines[0].contains('┏'));
        assert_eq!(buf[(20, 0)].fg, Palette::default().accent);
    }
}
