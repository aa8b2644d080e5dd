use tracing::debug;

use crate::settings::{SettingKey, Settings, ThemeCatalog};
use crate::tui::action::{Action, ModalAction};
use crate::tui::component::Effect;
use crate::tui::modal::{FormField, ModalState, SessionId, SettingsForm};
use crate::tui::state::AppState;

const NOTIFICATION_TITLE: &str = "Settings";

/// Handle settings modal actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_modal(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    let Action::Modal(modal_action) = action else {
        return Err(state);
    };

    let result = match modal_action {
        ModalAction::Open => handle_open(state),
        ModalAction::Close => handle_close(state),
        ModalAction::Save => handle_save(state),
        ModalAction::Loaded {
            session,
            settings,
            catalog,
        } => handle_loaded(state, *session, settings.as_ref(), catalog),
        ModalAction::Saved {
            session,
            attempted,
            failures,
        } => handle_saved(state, *session, attempted, failures),
        ModalAction::FocusNext => edit_form(state, |form| form.focus = form.focus.next()),
        ModalAction::FocusPrevious => edit_form(state, |form| form.focus = form.focus.previous()),
        ModalAction::Adjust { forward } => {
            let forward = *forward;
            edit_form(state, move |form| form.adjust_focused(forward))
        }
        ModalAction::Activate => handle_activate(state),
    };

    Ok(result)
}

fn handle_open(state: AppState) -> (AppState, Effect) {
    if !state.modal.is_closed() {
        debug!("MODAL: Open ignored, session already active");
        return (state, Effect::None);
    }

    let mut new_state = state;
    let session = new_state.next_session();
    debug!("MODAL: Opening session {}", session.0);
    new_state.modal = ModalState::Opening { session };
    (new_state, Effect::LoadSettingsModal(session))
}

fn handle_close(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    match &new_state.modal {
        ModalState::Opening { session } | ModalState::Open { session, .. } => {
            debug!("MODAL: Closing session {}", session.0);
            new_state.modal = ModalState::Closed;
        }
        ModalState::Closing { session, .. } => {
            debug!("MODAL: Close ignored, session {} is saving", session.0);
        }
        ModalState::Closed => {}
    }
    (new_state, Effect::None)
}

fn handle_save(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    match std::mem::take(&mut new_state.modal) {
        ModalState::Open { session, form } => {
            let settings = form.edited();
            debug!("MODAL: Saving {:?} for session {}", settings, session.0);
            new_state.modal = ModalState::Closing { session, form };
            (new_state, Effect::SaveSettings { session, settings })
        }
        other => {
            new_state.modal = other;
            (new_state, Effect::None)
        }
    }
}

fn handle_loaded(
    state: AppState,
    session: SessionId,
    settings: Option<&Settings>,
    catalog: &ThemeCatalog,
) -> (AppState, Effect) {
    if state.modal != (ModalState::Opening { session }) {
        debug!("MODAL: Discarding load result of stale session {}", session.0);
        return (state, Effect::None);
    }

    let mut new_state = state;
    match settings {
        Some(settings) => {
            new_state.modal = ModalState::Open {
                session,
                form: SettingsForm::seed(settings, catalog),
            };
            (new_state, Effect::None)
        }
        None => {
            new_state.modal = ModalState::Closed;
            let effect = new_state
                .notifications
                .emit(NOTIFICATION_TITLE, "Unable to load settings");
            (new_state, effect)
        }
    }
}

fn handle_saved(
    state: AppState,
    session: SessionId,
    attempted: &Settings,
    failures: &[(SettingKey, String)],
) -> (AppState, Effect) {
    if !matches!(&state.modal, ModalState::Closing { session: current, .. } if *current == session)
    {
        debug!("MODAL: Discarding save result of stale session {}", session.0);
        return (state, Effect::None);
    }

    let mut new_state = state;
    let mut effect = Effect::None;

    // Failures are reported under the flag that was active before the save
    for (key, error) in failures {
        effect = effect.and(
            new_state
                .notifications
                .emit(NOTIFICATION_TITLE, format!("Failed to update {}: {}", key, error)),
        );
    }

    // The status bar keeps the outcome even with notifications off
    if failures.is_empty() {
        new_state.system.reset_status_message();
    } else {
        new_state.system.set_status_error_message(format!(
            "Settings: {} of {} updates failed",
            failures.len(),
            SettingKey::ALL.len()
        ));
    }

    // A reconcile started before the save would carry pre-save values
    new_state.next_reconcile();
    new_state.apply_settings(attempted);
    effect = effect.and(
        new_state
            .notifications
            .emit(NOTIFICATION_TITLE, "Settings saved successfully"),
    );

    debug!("MODAL: Session {} saved, closing", session.0);
    new_state.modal = ModalState::Closed;
    (new_state, effect)
}

fn handle_activate(state: AppState) -> (AppState, Effect) {
    match state.modal.form().map(|form| form.focus) {
        Some(FormField::Save) => handle_save(state),
        Some(FormField::Cancel) => handle_close(state),
        Some(_) => edit_form(state, |form| form.adjust_focused(true)),
        None => (state, Effect::None),
    }
}

/// Apply an edit to the form, only while the modal is open for editing
fn edit_form(state: AppState, edit: impl FnOnce(&mut SettingsForm)) -> (AppState, Effect) {
    let mut new_state = state;
    if let ModalState::Open { form, .. } = &mut new_state.modal {
        edit(form);
    }
    (new_state, Effect::None)
}
