use std::time::SystemTime;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Handle background reconciliation with the settings service
///
/// Failures are silent: the current (or built-in) settings stay applied.
/// Only the most recent generation may apply; a save also starts a new one.
pub fn reduce_settings(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Reconcile => {
            let mut new_state = state;
            new_state.system.last_reconcile = Some(SystemTime::now());
            let generation = new_state.next_reconcile();
            Ok((new_state, Effect::Reconcile(generation)))
        }
        Action::SettingsReconciled { generation, .. }
            if !state.is_current_reconcile(*generation) =>
        {
            debug!("RECONCILE: Dropping stale result from generation {}", generation);
            Ok((state, Effect::None))
        }
        Action::SettingsReconciled {
            settings: Some(settings),
            ..
        } => {
            debug!("RECONCILE: Applying {:?}", settings);
            let mut new_state = state;
            new_state.apply_settings(settings);
            Ok((new_state, Effect::None))
        }
        Action::SettingsReconciled { settings: None, .. } => Ok((state, Effect::None)),
        _ => Err(state),
    }
}
