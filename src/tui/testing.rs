//! General test utilities for TUI tests.
//!
//! Buffer helpers for widget tests plus `Harness`, a synchronous driver that
//! runs actions through the reducer and resolves service effects inline.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;
use super::component::{Component, Effect, ElementWidget};
use super::components::App;
use super::effects::SettingsEffects;
use super::reducer::reduce;
use super::renderer::Renderer;
use super::state::AppState;
use super::theme::Palette;
use crate::settings::SettingsProvider;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// True if any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}

/// Render a widget into a fresh buffer with the dark palette
pub fn render_widget(widget: &impl ElementWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, &Palette::default());
    buf
}

/// Render the whole kiosk for `state`
pub fn render_app(state: &AppState, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let palette = Palette::for_theme(state.display.theme.as_deref());
    Renderer::new().render(&App.view(state), buf.area, &mut buf, &palette);
    buf
}

/// Drives the reducer without a runtime
///
/// Service effects are awaited inline, so after `dispatch` returns every
/// request the action caused has completed. Delayed effects are recorded and
/// only fire through `fire_timers`.
pub struct Harness {
    pub state: AppState,
    effects: SettingsEffects,
    scheduled: Vec<(Duration, Action)>,
}

impl Harness {
    pub fn new(provider: Arc<dyn SettingsProvider>) -> Self {
        Self::with_state(AppState::default(), provider)
    }

    pub fn with_state(state: AppState, provider: Arc<dyn SettingsProvider>) -> Self {
        Self {
            state,
            effects: SettingsEffects::new(provider),
            scheduled: Vec::new(),
        }
    }

    /// Run the reducer and hand back the effect without executing it
    pub fn reduce_only(&mut self, action: Action) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        effect
    }

    pub async fn dispatch(&mut self, action: Action) {
        let mut actions = VecDeque::from([action]);

        while let Some(action) = actions.pop_front() {
            let mut pending = vec![self.reduce_only(action)];
            while let Some(effect) = pending.pop() {
                match effect {
                    Effect::None => {}
                    Effect::Action(action) => actions.push_back(action),
                    Effect::Batch(effects) => pending.extend(effects.into_iter().rev()),
                    Effect::Async(future) => actions.push_back(future.await),
                    Effect::Delayed { after, action } => self.scheduled.push((after, *action)),
                    Effect::Reconcile(generation) => {
                        pending.push(self.effects.reconcile(generation))
                    }
                    Effect::LoadSettingsModal(session) => {
                        pending.push(self.effects.load_modal(session))
                    }
                    Effect::SaveSettings { session, settings } => {
                        pending.push(self.effects.save(session, settings))
                    }
                }
            }
        }
    }

    /// Dispatch scheduled timer actions, shortest delay first
    ///
    /// Timers scheduled by these actions are kept for the next call.
    pub async fn fire_timers(&mut self) {
        let mut due = std::mem::take(&mut self.scheduled);
        due.sort_by_key(|(after, _)| *after);
        for (_, action) in due {
            self.dispatch(action).await;
        }
    }

    /// Flattened "title: message" of every live toast
    pub fn toasts(&self) -> Vec<String> {
        self.state
            .notifications
            .toasts()
            .iter()
            .map(|t| format!("{}: {}", t.title, t.message))
            .collect()
    }
}
