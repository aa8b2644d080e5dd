use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{
    reduce_modal, reduce_notifications, reduce_player, reduce_settings, reduce_tiles,
};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Settings modal lifecycle
    let state = match reduce_modal(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Background reconciliation
    let state = match reduce_settings(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Toast timers
    let state = match reduce_notifications(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_player(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_tiles(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::Quit => (state, Effect::None),

        other => {
            debug!("ACTION: Unhandled {:?}", other);
            (state, Effect::None)
        }
    }
}
