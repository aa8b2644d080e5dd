use tracing::debug;

use crate::tui::action::{Action, PlayerAction};
use crate::tui::component::Effect;
use crate::tui::player::PlaybackChange;
use crate::tui::state::AppState;

pub fn reduce_player(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let Action::Player(player_action) = action else {
        return Err(state);
    };

    let mut new_state = state;
    let change = match player_action {
        PlayerAction::TogglePlay => new_state.player.toggle_play(),
        PlayerAction::Next => new_state.player.next(),
        PlayerAction::Previous => new_state.player.previous(),
        PlayerAction::Select(index) => new_state.player.select(*index),
        PlayerAction::VolumeUp => {
            new_state.player.volume_up();
            PlaybackChange::Unchanged
        }
        PlayerAction::VolumeDown => {
            new_state.player.volume_down();
            PlaybackChange::Unchanged
        }
    };
    debug!("PLAYER: {:?} -> {:?}", player_action, change);

    let notifications = &mut new_state.notifications;
    let effect = match change {
        PlaybackChange::NoSource => notifications.emit("Music", "No audio source available"),
        PlaybackChange::Started { title } => notifications.emit("Now Playing", title),
        PlaybackChange::Stopped => notifications.emit("Playback Error", "Cannot play audio"),
        PlaybackChange::Unchanged | PlaybackChange::Paused | PlaybackChange::Moved => Effect::None,
    };
    Ok((new_state, effect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TrackConfig};

    fn reduce(state: AppState, action: PlayerAction) -> AppState {
        reduce_player(state, &Action::Player(action))
            .unwrap_or_else(|_| panic!("Player action not handled"))
            .0
    }

    fn last_toast(state: &AppState) -> Option<String> {
        state
            .notifications
            .toasts()
            .last()
            .map(|t| format!("{}: {}", t.title, t.message))
    }

    fn state_with_sources() -> AppState {
        let track = |title: &str, source: &str| TrackConfig {
            title: title.to_string(),
            artist: "Artist".to_string(),
            source: source.to_string(),
            duration: "3:00".to_string(),
        };
        AppState::from_config(Config {
            playlist: vec![track("Drive", "/music/drive.ogg"), track("Silence", "")],
            ..Config::default()
        })
    }

    #[test]
    fn test_toggle_without_source_notifies() {
        let state = reduce(AppState::default(), PlayerAction::TogglePlay);
        assert!(!state.player.is_playing());
        assert_eq!(last_toast(&state).as_deref(), Some("Music: No audio source available"));
    }

    #[test]
    fn test_starting_playback_announces_title() {
        let state = reduce(state_with_sources(), PlayerAction::TogglePlay);
        assert!(state.player.is_playing());
        assert_eq!(last_toast(&state).as_deref(), Some("Now Playing: Drive"));
    }

    #[test]
    fn test_skipping_onto_unplayable_track_stops() {
        let state = reduce(state_with_sources(), PlayerAction::TogglePlay);
        let state = reduce(state, PlayerAction::Next);
        assert!(!state.player.is_playing());
        assert_eq!(last_toast(&state).as_deref(), Some("Playback Error: Cannot play audio"));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let state = reduce(AppState::default(), PlayerAction::Previous);
        assert_eq!(state.player.current_index(), 2);
        let state = reduce(state, PlayerAction::Next);
        assert_eq!(state.player.current_index(), 0);
    }

    #[test]
    fn test_volume_steps() {
        let state = reduce(AppState::default(), PlayerAction::VolumeUp);
        assert_eq!(state.player.volume(), 80);
        let state = reduce(state, PlayerAction::VolumeDown);
        let state = reduce(state, PlayerAction::VolumeDown);
        assert_eq!(state.player.volume(), 60);
    }
}
