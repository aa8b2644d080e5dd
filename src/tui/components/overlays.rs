use crate::tui::component::{Component, Element};
use crate::tui::modal::ModalState;
use crate::tui::notifications::NotificationCenter;
use crate::tui::widgets::{NotificationStack, SettingsModal};

/// Settings modal overlay
///
/// Nothing is drawn while the settings are still loading; the form appears
/// once the fetch for the session has completed.
pub struct SettingsModalOverlay;

impl Component for SettingsModalOverlay {
    type Props = ModalState;

    fn view(&self, props: &Self::Props) -> Element {
        match props {
            ModalState::Open { form, .. } => Element::widget(SettingsModal {
                form: form.clone(),
                saving: false,
            }),
            ModalState::Closing { form, .. } => Element::widget(SettingsModal {
                form: form.clone(),
                saving: true,
            }),
            ModalState::Closed | ModalState::Opening { .. } => Element::None,
        }
    }
}

/// Toast stack overlay
pub struct ToastOverlay;

impl Component for ToastOverlay {
    type Props = NotificationCenter;

    fn view(&self, props: &Self::Props) -> Element {
        if props.toasts().is_empty() {
            return Element::None;
        }
        Element::widget(NotificationStack {
            toasts: props.toasts().to_vec(),
        })
    }
}
