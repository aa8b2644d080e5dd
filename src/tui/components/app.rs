use crate::tui::component::{Component, ContainerLayout, Element};
use crate::tui::layout::chrome_constraints;
use crate::tui::state::{AppState, DEFAULT_STATUS_MESSAGE};
use crate::tui::widgets::{Header, PlayerWidget, StatusBar, TileGrid};

use super::overlays::{SettingsModalOverlay, ToastOverlay};

/// Root App component
///
/// This is the top-level component that renders the entire kiosk.
/// It uses the global AppState as props and layers the settings modal and
/// the toast stack over the dashboard.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        tracing::trace!(
            "APP: App.view() called with modal_open={} toasts={}",
            props.modal.is_rendered(),
            props.notifications.toasts().len()
        );

        let dashboard = self.render_dashboard(props);
        let with_modal = Element::overlay(dashboard, SettingsModalOverlay.view(&props.modal));
        Element::overlay(with_modal, ToastOverlay.view(&props.notifications))
    }
}

impl App {
    /// Header, tiles, player and status bar; fullscreen drops the chrome
    fn render_dashboard(&self, state: &AppState) -> Element {
        let tiles = Element::widget(TileGrid {
            focused: state.tiles.focused,
        });
        let player = Element::widget(PlayerWidget::from_state(&state.player));

        let children = if state.display.fullscreen {
            vec![tiles, player]
        } else {
            let status = StatusBar::new(
                state
                    .system
                    .status_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string()),
            )
            .with_error(state.system.status_is_error)
            .with_notifications(state.notifications.is_enabled());

            vec![
                Element::widget(Header {
                    theme: state.display.theme.clone(),
                }),
                tiles,
                player,
                Element::widget(status),
            ]
        };

        Element::Container {
            children,
            layout: ContainerLayout::Vertical(chrome_constraints(state.display.fullscreen)),
        }
    }
}
