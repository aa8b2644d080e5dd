use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::effects::SettingsEffects;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - manages action processing and effect execution
///
/// The Runtime is responsible for:
/// - Owning the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Settings service effects handler
    settings_effects: Arc<SettingsEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and settings effects handler
    pub fn new(initial_state: AppState, settings_effects: Arc<SettingsEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            settings_effects,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Turn service effects into async work and queue everything else
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Reconcile(generation) => {
                debug!("EFFECT: Executing settings reconcile {}", generation);
                let _ = self.effect_tx.send(self.settings_effects.reconcile(generation));
            }
            Effect::LoadSettingsModal(session) => {
                debug!("EFFECT: Loading settings for modal session {}", session.0);
                let _ = self.effect_tx.send(self.settings_effects.load_modal(session));
            }
            Effect::SaveSettings { session, settings } => {
                debug!("EFFECT: Saving settings for modal session {}", session.0);
                let _ = self
                    .effect_tx
                    .send(self.settings_effects.save(session, settings));
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) | Effect::Delayed { .. } => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            Effect::Delayed { after, action } => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = action_tx.send(*action);
                });
            }
            // Service effects are converted by execute_effect() before being queued
            Effect::Reconcile(_) | Effect::LoadSettingsModal(_) | Effect::SaveSettings { .. } => {
                tracing::warn!(
                    "Settings effect reached async executor - this should be handled by execute_effect()"
                );
            }
        }
    }
}
