/// PlayerWidget - now playing panel with transport hints and volume
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::tui::component::ElementWidget;
use crate::tui::player::{PlayerState, VolumeLevel};
use crate::tui::theme::Palette;

const VOLUME_BAR_WIDTH: usize = 10;

#[derive(Debug, Clone)]
pub struct PlayerWidget {
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub playing: bool,
    pub volume: u8,
    /// 1-based position and playlist length
    pub counter: (usize, usize),
}

impl PlayerWidget {
    pub fn from_state(player: &PlayerState) -> Self {
        let (title, artist, duration) = match player.current_track() {
            Some(track) => (track.title.clone(), track.artist.clone(), track.duration.clone()),
            None => ("No tracks".to_string(), String::new(), "--:--".to_string()),
        };
        Self {
            title,
            artist,
            duration,
            playing: player.is_playing(),
            volume: player.volume(),
            counter: player.counter(),
        }
    }

    fn status_icon(&self) -> &'static str {
        if self.playing {
            "▶"
        } else {
            "⏸"
        }
    }

    fn volume_line(&self) -> String {
        let filled = (self.volume as usize * VOLUME_BAR_WIDTH).div_ceil(100);
        format!(
            "{} {}{} {:>3}%",
            VolumeLevel::from_volume(self.volume).icon(),
            "█".repeat(filled),
            "░".repeat(VOLUME_BAR_WIDTH - filled),
            self.volume
        )
    }
}

impl ElementWidget for PlayerWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style(false))
            .title(" Music ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize - 2;
        let x = inner.x + 1;

        let now_playing = format!("{} {} ({})", self.status_icon(), self.title, self.duration);
        buf.set_stringn(x, inner.y, now_playing, width, palette.highlight());

        if inner.height >= 2 {
            let (position, total) = self.counter;
            let details = format!("{}   {}/{}", self.artist, position, total);
            buf.set_stringn(x, inner.y + 1, details.trim_start(), width, palette.text());
        }
        if inner.height >= 3 {
            buf.set_stringn(x, inner.y + 2, self.volume_line(), width, palette.text());
        }
        if inner.height >= 4 {
            buf.set_stringn(
                x,
                inner.y + 3,
                "Space play/pause  ←/→ track  +/- volume",
                width,
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

    fn widget() -> PlayerWidget {
        PlayerWidget::from_state(&PlayerState::default())
    }

    #[test]
    fn test_player_shows_current_track() {
        let buf = render_widget(&widget(), 50, 6);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("Music"));
        assert!(lines[1].contains("Unknown (3:45)"));
        assert!(lines[2].contains("1/3"));
        assert!(lines[3].contains("70%"));
    }

    #[test]
    fn test_volume_line_levels() {
        let mut w = widget();
        w.volume = 0;
        assert!(w.volume_line().starts_with("🔇"));
        assert!(w.volume_line().ends_with("  0%"));
        w.volume = 100;
        assert!(w.volume_line().contains(&"█".repeat(VOLUME_BAR_WIDTH)));
        w.volume = 45;
        assert!(w.volume_line().starts_with("🔉"));
    }

    #[test]
    fn test_empty_playlist() {
        let w = PlayerWidget::from_state(&PlayerState::new(Vec::new(), 70));
        assert_eq!(w.title, "No tracks");
        assert_eq!(w.counter, (0, 0));
    }
}
