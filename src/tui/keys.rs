/// Keyboard and mouse event to action mapping
///
/// This module handles converting crossterm events into Actions.
/// While the settings modal is live it captures all input.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, trace};

use super::action::{Action, ModalAction, PlayerAction};
use super::layout::{contains, modal_area, tile_at};
use super::modal::ModalState;
use super::state::AppState;
use super::tiles::Tile;

/// Handle global keys that work regardless of modal state
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Keys while the settings modal is live
fn handle_modal_keys(key_code: KeyCode, modal: &ModalState) -> Option<Action> {
    if key_code == KeyCode::Esc {
        debug!("KEY: ESC pressed with settings modal live - closing modal");
        return Some(Action::Modal(ModalAction::Close));
    }

    // Only an open form is editable; loading and saving swallow input
    if !matches!(modal, ModalState::Open { .. }) {
        return None;
    }

    let action = match key_code {
        KeyCode::Up | KeyCode::BackTab => ModalAction::FocusPrevious,
        KeyCode::Down | KeyCode::Tab => ModalAction::FocusNext,
        KeyCode::Left => ModalAction::Adjust { forward: false },
        KeyCode::Right | KeyCode::Char(' ') => ModalAction::Adjust { forward: true },
        KeyCode::Enter => ModalAction::Activate,
        _ => return None,
    };
    Some(Action::Modal(action))
}

/// Keys on the dashboard
fn handle_dashboard_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => None,

        // Tiles
        KeyCode::Tab => Some(Action::FocusNextTile),
        KeyCode::BackTab => Some(Action::FocusPreviousTile),
        KeyCode::Enter => Some(Action::ActivateFocusedTile),
        KeyCode::Char(c) if Tile::from_shortcut(c).is_some() => {
            Tile::from_shortcut(c).map(Action::ActivateTile)
        }

        // Player
        KeyCode::Char(' ') => Some(Action::Player(PlayerAction::TogglePlay)),
        KeyCode::Left => Some(Action::Player(PlayerAction::Previous)),
        KeyCode::Right => Some(Action::Player(PlayerAction::Next)),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Player(PlayerAction::VolumeUp)),
        KeyCode::Char('-') => Some(Action::Player(PlayerAction::VolumeDown)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|n| Action::Player(PlayerAction::Select(n as usize - 1))),

        _ => None,
    }
}

/// Convert a key press to an action, if it maps to one
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if !state.modal.is_closed() {
        return handle_modal_keys(key.code, &state.modal);
    }

    handle_dashboard_keys(key.code)
}

/// Convert a mouse event to an action
///
/// `area` is the full terminal area the kiosk is drawn into. A left click
/// outside the modal's content region closes it; on the dashboard a click on
/// a tile activates that tile.
pub fn mouse_to_action(mouse: MouseEvent, area: Rect, state: &AppState) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if state.modal.is_rendered() {
        if !contains(modal_area(area), mouse.column, mouse.row) {
            debug!("MOUSE: Backdrop click at ({}, {}) - closing modal", mouse.column, mouse.row);
            return Some(Action::Modal(ModalAction::Close));
        }
        return None;
    }

    if !state.modal.is_closed() {
        return None;
    }

    tile_at(area, state.display.fullscreen, mouse.column, mouse.row).map(Action::ActivateTile)
}
