//! Player widget model: playlist position, play state and volume.
//!
//! Nothing here decodes or plays audio; the model only tracks what the
//! widget shows.

use crate::config::{Config, TrackConfig};

pub const MAX_VOLUME: u8 = 100;
pub const VOLUME_STEP: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub source: String,
    pub duration: String,
}

impl Track {
    pub fn has_source(&self) -> bool {
        !self.source.trim().is_empty()
    }
}

impl From<&TrackConfig> for Track {
    fn from(track: &TrackConfig) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            source: track.source.clone(),
            duration: track.duration.clone(),
        }
    }
}

/// Volume indicator shown next to the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Mute,
    Low,
    High,
}

impl VolumeLevel {
    pub fn from_volume(volume: u8) -> Self {
        match volume {
            0 => Self::Mute,
            1..=49 => Self::Low,
            _ => Self::High,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Mute => "🔇",
            Self::Low => "🔉",
            Self::High => "🔊",
        }
    }
}

/// What a play/pause or track change did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackChange {
    /// Nothing changed
    Unchanged,
    /// The current track has no source to play
    NoSource,
    /// Playback started (or continued) on this track
    Started { title: String },
    Paused,
    /// Moved while stopped
    Moved,
    /// Moved while playing onto a track that cannot play; playback stopped
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    volume: u8,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PlayerState {
    pub fn new(tracks: Vec<Track>, volume: u8) -> Self {
        Self {
            tracks,
            current: 0,
            playing: false,
            volume: volume.min(MAX_VOLUME),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.playlist.iter().map(Track::from).collect(),
            config.initial_volume,
        )
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_volume(self.volume)
    }

    /// 1-based position and playlist length, for the track counter
    pub fn counter(&self) -> (usize, usize) {
        if self.tracks.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.tracks.len())
        }
    }

    pub fn toggle_play(&mut self) -> PlaybackChange {
        let Some(track) = self.current_track() else {
            return PlaybackChange::NoSource;
        };
        if !track.has_source() {
            return PlaybackChange::NoSource;
        }

        if self.playing {
            self.playing = false;
            PlaybackChange::Paused
        } else {
            let title = track.title.clone();
            self.playing = true;
            PlaybackChange::Started { title }
        }
    }

    pub fn next(&mut self) -> PlaybackChange {
        if self.tracks.is_empty() {
            return PlaybackChange::Unchanged;
        }
        self.move_to((self.current + 1) % self.tracks.len())
    }

    pub fn previous(&mut self) -> PlaybackChange {
        if self.tracks.is_empty() {
            return PlaybackChange::Unchanged;
        }
        let len = self.tracks.len();
        self.move_to((self.current + len - 1) % len)
    }

    pub fn select(&mut self, index: usize) -> PlaybackChange {
        if index >= self.tracks.len() {
            return PlaybackChange::Unchanged;
        }
        self.move_to(index)
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(VOLUME_STEP));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(VOLUME_STEP));
    }

    fn move_to(&mut self, index: usize) -> PlaybackChange {
        self.current = index;
        if !self.playing {
            return PlaybackChange::Moved;
        }
        match self.current_track() {
            Some(track) if track.has_source() => PlaybackChange::Started {
                title: track.title.clone(),
            },
            _ => {
                self.playing = false;
                PlaybackChange::Stopped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(title: &str, source: &str) -> Track {
        Track {
            title: title.to_string(),
            artist: "Artist".to_string(),
            source: source.to_string(),
            duration: "3:00".to_string(),
        }
    }

    fn playable() -> PlayerState {
        PlayerState::new(
            vec![track("One", "/a.ogg"), track("Two", "/b.ogg"), track("Three", "")],
            70,
        )
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut player = playable();
        player.select(2);
        player.next();
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut player = playable();
        player.previous();
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn test_navigation_on_empty_playlist_is_noop() {
        let mut player = PlayerState::new(Vec::new(), 70);
        assert_eq!(player.next(), PlaybackChange::Unchanged);
        assert_eq!(player.previous(), PlaybackChange::Unchanged);
        assert_eq!(player.toggle_play(), PlaybackChange::NoSource);
        assert_eq!(player.counter(), (0, 0));
    }

    #[test]
    fn test_toggle_play_without_source() {
        let mut player = PlayerState::default();
        assert_eq!(player.toggle_play(), PlaybackChange::NoSource);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_toggle_play_and_pause() {
        let mut player = playable();
        assert_eq!(
            player.toggle_play(),
            PlaybackChange::Started { title: "One".into() }
        );
        assert!(player.is_playing());
        assert_eq!(player.toggle_play(), PlaybackChange::Paused);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_moving_while_playing_restarts_on_new_track() {
        let mut player = playable();
        player.toggle_play();
        assert_eq!(player.next(), PlaybackChange::Started { title: "Two".into() });
        assert_eq!(player.next(), PlaybackChange::Stopped);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut player = playable();
        assert_eq!(player.select(7), PlaybackChange::Unchanged);
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.select(1), PlaybackChange::Moved);
        assert_eq!(player.counter(), (2, 3));
    }

    #[test]
    fn test_volume_is_clamped_and_levelled() {
        let mut player = PlayerState::new(Vec::new(), 250);
        assert_eq!(player.volume(), 100);
        player.volume_up();
        assert_eq!(player.volume(), 100);
        player.set_volume(40);
        assert_eq!(player.volume_level(), VolumeLevel::Low);
        for _ in 0..5 {
            player.volume_down();
        }
        assert_eq!(player.volume(), 0);
        assert_eq!(player.volume_level(), VolumeLevel::Mute);
        player.set_volume(50);
        assert_eq!(player.volume_level(), VolumeLevel::High);
    }

    #[test]
    fn test_default_player_uses_config_playlist() {
        let player = PlayerState::default();
        assert_eq!(player.tracks().len(), 3);
        assert_eq!(player.volume(), 70);
        assert_eq!(player.counter(), (1, 3));
    }
}
