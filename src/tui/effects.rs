use std::sync::Arc;

use tracing::{debug, warn};

use super::action::{Action, ModalAction};
use super::component::Effect;
use super::modal::SessionId;
use crate::settings::{SettingKey, Settings, SettingsProvider};

/// Effect handler for settings service operations
///
/// Each method returns an `Effect::Async` that resolves to the action
/// carrying the result back into the reducer.
pub struct SettingsEffects {
    provider: Arc<dyn SettingsProvider>,
}

impl SettingsEffects {
    pub fn new(provider: Arc<dyn SettingsProvider>) -> Self {
        Self { provider }
    }

    /// Fetch all settings for a silent reconcile
    pub fn reconcile(&self, generation: u64) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let settings = match provider.fetch_all().await {
                Ok(settings) => Some(settings),
                Err(e) => {
                    debug!("RECONCILE: Keeping current settings: {}", e);
                    None
                }
            };
            Action::SettingsReconciled {
                generation,
                settings,
            }
        }))
    }

    /// Fetch settings and themes concurrently for a modal session
    pub fn load_modal(&self, session: SessionId) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let (settings, catalog) =
                tokio::join!(provider.fetch_all(), provider.fetch_theme_catalog());
            let settings = match settings {
                Ok(settings) => Some(settings),
                Err(e) => {
                    warn!("MODAL: Failed to load settings for session {}: {}", session.0, e);
                    None
                }
            };
            Action::Modal(ModalAction::Loaded {
                session,
                settings,
                catalog,
            })
        }))
    }

    /// Write every key of `settings`, one request after another
    ///
    /// A failed key does not stop the remaining updates.
    pub fn save(&self, session: SessionId, settings: Settings) -> Effect {
        let provider = self.provider.clone();
        Effect::Async(Box::pin(async move {
            let mut failures = Vec::new();
            for key in SettingKey::ALL {
                let value = key.value_in(&settings);
                match provider.update(key, value.clone()).await {
                    Ok(_) => debug!("SAVE: Updated {} to {}", key, value),
                    Err(e) => {
                        warn!("SAVE: Failed to update {}: {}", key, e);
                        failures.push((key, e.to_string()));
                    }
                }
            }
            Action::Modal(ModalAction::Saved {
                session,
                attempted: settings,
                failures,
            })
        }))
    }
}
