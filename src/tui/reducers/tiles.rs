use crate::tui::action::{Action, ModalAction};
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::tiles::Tile;

/// Handle tile focus and activation
pub fn reduce_tiles(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let mut new_state = state;
    match action {
        Action::FocusNextTile => {
            new_state.tiles.focused = new_state.tiles.focused.next();
            Ok((new_state, Effect::None))
        }
        Action::FocusPreviousTile => {
            new_state.tiles.focused = new_state.tiles.focused.previous();
            Ok((new_state, Effect::None))
        }
        Action::ActivateFocusedTile => {
            let tile = new_state.tiles.focused;
            Ok(activate(new_state, tile))
        }
        Action::ActivateTile(tile) => {
            new_state.tiles.focused = *tile;
            Ok(activate(new_state, *tile))
        }
        _ => Err(new_state),
    }
}

fn activate(state: AppState, tile: Tile) -> (AppState, Effect) {
    match tile {
        Tile::Settings => (state, Effect::Action(Action::Modal(ModalAction::Open))),
        _ => {
            let mut new_state = state;
            let effect = new_state
                .notifications
                .emit(tile.service_name(), "Service not available yet");
            (new_state, effect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        reduce_tiles(state, &action).unwrap_or_else(|_| panic!("Tile action not handled"))
    }

    #[test]
    fn test_focus_moves_and_wraps() {
        let (state, _) = reduce(AppState::default(), Action::FocusPreviousTile);
        assert_eq!(state.tiles.focused, Tile::Settings);
        let (state, _) = reduce(state, Action::FocusNextTile);
        assert_eq!(state.tiles.focused, Tile::Maps);
    }

    #[test]
    fn test_unavailable_service_tile_notifies() {
        let (state, _) = reduce(AppState::default(), Action::ActivateTile(Tile::Maps));
        let toast = &state.notifications.toasts()[0];
        assert_eq!(toast.title, "Navigation");
        assert_eq!(toast.message, "Service not available yet");
    }

    #[test]
    fn test_settings_tile_opens_modal() {
        let (state, effect) = reduce(AppState::default(), Action::ActivateTile(Tile::Settings));
        assert_eq!(state.tiles.focused, Tile::Settings);
        assert!(matches!(effect, Effect::Action(Action::Modal(ModalAction::Open))));
    }

    #[test]
    fn test_activate_focused_tile() {
        let (state, _) = reduce(AppState::default(), Action::FocusNextTile);
        let (state, _) = reduce(state, Action::ActivateFocusedTile);
        assert_eq!(state.notifications.toasts()[0].title, "Radio");
    }
}
