//! Transient notifications ("toasts") shown in the top-right corner.

use std::time::Duration;

use tracing::debug;

use super::action::{Action, NotificationAction};
use super::component::Effect;
use crate::config::Config;

/// Delay between inserting a toast and showing it, so it can slide in
pub const ENTER_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(3000),
            exit: Duration::from_millis(400),
        }
    }
}

impl From<&Config> for NotificationTiming {
    fn from(config: &Config) -> Self {
        Self {
            display: config.notification_display(),
            exit: config.notification_exit(),
        }
    }
}

/// Live toasts plus the flag that gates new ones
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    enabled: bool,
    toasts: Vec<Toast>,
    next_id: u64,
    timing: NotificationTiming,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTiming::default())
    }
}

impl NotificationCenter {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            enabled: true,
            toasts: Vec::new(),
            next_id: 0,
            timing,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            debug!("NOTIFY: Notifications {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a toast, unless notifications are disabled
    ///
    /// Returns the timer effects that move the toast through its phases:
    /// visible after `ENTER_DELAY`, leaving after the display time, removed
    /// after the exit time.
    pub fn emit(&mut self, title: impl Into<String>, message: impl Into<String>) -> Effect {
        let title = title.into();
        let message = message.into();

        if !self.enabled {
            debug!("NOTIFY: Suppressed '{}: {}' (notifications disabled)", title, message);
            return Effect::None;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        debug!("NOTIFY: #{} '{}: {}'", id.0, title, message);

        self.toasts.push(Toast {
            id,
            title,
            message,
            phase: ToastPhase::Entering,
        });

        Effect::Batch(vec![
            Effect::delayed(ENTER_DELAY, Action::Notification(NotificationAction::Shown(id))),
            Effect::delayed(
                self.timing.display,
                Action::Notification(NotificationAction::Dismiss(id)),
            ),
        ])
    }

    pub fn mark_visible(&mut self, id: NotificationId) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Visible;
            }
        }
    }

    /// Start the exit of a toast; returns the effect that removes it
    pub fn dismiss(&mut self, id: NotificationId) -> Effect {
        let exit = self.timing.exit;
        match self.find_mut(id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                Effect::delayed(exit, Action::Notification(NotificationAction::Remove(id)))
            }
            None => Effect::None,
        }
    }

    pub fn remove(&mut self, id: NotificationId) {
        self.toasts.retain(|t| t.id != id);
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}
