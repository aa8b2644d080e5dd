use crate::tui::action::{Action, NotificationAction};
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Advance toasts through their phases as their timers fire
pub fn reduce_notifications(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    let Action::Notification(notification_action) = action else {
        return Err(state);
    };

    let mut new_state = state;
    let effect = match notification_action {
        NotificationAction::Shown(id) => {
            new_state.notifications.mark_visible(*id);
            Effect::None
        }
        NotificationAction::Dismiss(id) => new_state.notifications.dismiss(*id),
        NotificationAction::Remove(id) => {
            new_state.notifications.remove(*id);
            Effect::None
        }
    };
    Ok((new_state, effect))
}
