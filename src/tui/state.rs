use std::time::SystemTime;

use crate::config::Config;
use crate::settings::Settings;

use super::modal::{ModalState, SessionId};
use super::notifications::{NotificationCenter, NotificationTiming};
use super::player::PlayerState;
use super::tiles::Tile;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings applied to the display (theme, fullscreen)
    pub display: DisplayState,

    /// Settings modal lifecycle
    pub modal: ModalState,

    /// Toasts and the notification toggle
    pub notifications: NotificationCenter,

    pub player: PlayerState,

    pub tiles: TileState,

    pub system: SystemState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        Self {
            display: DisplayState::default(),
            modal: ModalState::Closed,
            notifications: NotificationCenter::new(NotificationTiming::from(&config)),
            player: PlayerState::from_config(&config),
            tiles: TileState::default(),
            system: SystemState {
                config,
                ..SystemState::default()
            },
        }
    }

    /// Apply confirmed settings to everything that depends on them
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.display.theme = Some(settings.theme.clone());
        self.display.fullscreen = settings.fullscreen;
        self.notifications.set_enabled(settings.notifications);
    }

    /// Issue the id for a new modal session
    pub fn next_session(&mut self) -> SessionId {
        self.system.session_counter += 1;
        SessionId(self.system.session_counter)
    }

    /// Start a new reconcile generation; results tagged with an older one are dropped
    pub fn next_reconcile(&mut self) -> u64 {
        self.system.reconcile_generation += 1;
        self.system.reconcile_generation
    }

    pub fn is_current_reconcile(&self, generation: u64) -> bool {
        self.system.reconcile_generation == generation
    }
}

/// Settings reflected on screen
///
/// `theme` stays `None` until the service has told us one; the renderer then
/// uses the built-in dark palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub theme: Option<String>,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TileState {
    pub focused: Tile,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: m/r/w/s tiles | Tab focus | Space play | ←→ track | +/- volume | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub last_reconcile: Option<SystemTime>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    session_counter: u64,
    reconcile_generation: u64,
}

impl SystemState {
    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_uses_built_in_defaults() {
        let state = AppState::default();

        assert_eq!(state.display.theme, None);
        assert!(!state.display.fullscreen);
        assert!(state.notifications.is_enabled());
        assert!(state.modal.is_closed());
    }

    #[test]
    fn test_apply_settings() {
        let mut state = AppState::default();

        state.apply_settings(&Settings {
            theme: "orange".into(),
            fullscreen: true,
            notifications: false,
        });

        assert_eq!(state.display.theme.as_deref(), Some("orange"));
        assert!(state.display.fullscreen);
        assert!(!state.notifications.is_enabled());
    }

    #[test]
    fn test_sessions_are_unique_and_increasing() {
        let mut state = AppState::default();
        let first = state.next_session();
        let second = state.next_session();
        assert!(second > first);
    }

    #[test]
    fn test_reset_status_message() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        state.reset_status_message();

        assert_eq!(state.status_message, Some(DEFAULT_STATUS_MESSAGE.to_string()));
        assert!(!state.status_is_error);
    }
}
