use crate::settings::{SettingKey, Settings, ThemeCatalog};

use super::modal::SessionId;
use super::notifications::NotificationId;
use super::tiles::Tile;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - Effects (settings service responses, timers)
#[derive(Debug, Clone)]
pub enum Action {
    /// Fetch settings from the service and apply them
    Reconcile,
    /// Result of a reconcile; `settings` is `None` when the service could not be reached
    SettingsReconciled {
        generation: u64,
        settings: Option<Settings>,
    },

    // Tile launcher
    FocusNextTile,
    FocusPreviousTile,
    ActivateFocusedTile,
    ActivateTile(Tile),

    // Component-specific actions
    Modal(ModalAction),
    Player(PlayerAction),
    Notification(NotificationAction),

    Quit,
}

/// Settings modal actions
#[derive(Debug, Clone)]
pub enum ModalAction {
    Open,
    /// Close button, backdrop click or Escape
    Close,
    Save,

    /// Fetches started by `Open` finished
    Loaded {
        session: SessionId,
        settings: Option<Settings>,
        catalog: ThemeCatalog,
    },
    /// All three updates of a save were attempted
    Saved {
        session: SessionId,
        attempted: Settings,
        failures: Vec<(SettingKey, String)>,
    },

    // Form editing
    FocusNext,
    FocusPrevious,
    Adjust { forward: bool },
    /// Enter on the focused control
    Activate,
}

#[derive(Debug, Clone)]
pub enum PlayerAction {
    TogglePlay,
    Next,
    Previous,
    Select(usize),
    VolumeUp,
    VolumeDown,
}

/// Toast timer callbacks
#[derive(Debug, Clone)]
pub enum NotificationAction {
    Shown(NotificationId),
    Dismiss(NotificationId),
    Remove(NotificationId),
}
