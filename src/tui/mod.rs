// Module declarations
pub mod components;
pub mod widgets;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod error;
pub mod keys;
pub mod layout;
pub mod modal;
pub mod notifications;
pub mod player;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod theme;
pub mod tiles;

#[cfg(test)]
pub mod testing;


pub use action::{Action, ModalAction, NotificationAction, PlayerAction};
pub use component::{Component, Effect, Element};
pub use effects::SettingsEffects;
pub use error::{TuiError, TuiResult};
pub use keys::{key_to_action, mouse_to_action};
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::config::Config;
use crate::settings::SettingsProvider;
use theme::Palette;

/// How long to wait for input before checking for effect results again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main entry point for the kiosk
pub async fn run(provider: Arc<dyn SettingsProvider>, config: Config) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, provider, config).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    provider: Arc<dyn SettingsProvider>,
    config: Config,
) -> TuiResult<()> {
    let settings_effects = Arc::new(SettingsEffects::new(provider));
    let mut runtime = Runtime::new(AppState::from_config(config), settings_effects);

    // Pick up the persisted settings before the first interaction
    runtime.dispatch(Action::Reconcile);

    let mut area = Rect::default();

    loop {
        // Process any actions from effects FIRST (so service results trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            area = f.area();

            // Build virtual tree from current state
            let element = runtime.build();

            let palette = Palette::for_theme(runtime.state().display.theme.as_deref());
            Renderer::new().render(&element, area, f.buffer_mut(), &palette);
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key, runtime.state()),
            Event::Mouse(mouse) => mouse_to_action(mouse, area, runtime.state()),
            _ => None,
        };

        if let Some(action) = action {
            if matches!(action, Action::Quit) {
                tracing::debug!("ACTION: Quitting application");
                break;
            }
            runtime.dispatch(action);
        }
    }

    Ok(())
}
