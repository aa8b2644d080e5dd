//! Settings modal lifecycle and the editable form it shows.

use crate::settings::{Settings, ThemeCatalog, DEFAULT_THEME};

/// Identifies one modal session
///
/// A fresh id is issued on every open. Results of async work started for an
/// older session are discarded when they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(pub u64);

/// Modal lifecycle
///
/// `Opening` waits for the settings and theme fetches, `Closing` waits for a
/// save to finish. At most one session exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Opening {
        session: SessionId,
    },
    Open {
        session: SessionId,
        form: SettingsForm,
    },
    Closing {
        session: SessionId,
        form: SettingsForm,
    },
}

impl ModalState {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn session(&self) -> Option<SessionId> {
        match self {
            Self::Closed => None,
            Self::Opening { session }
            | Self::Open { session, .. }
            | Self::Closing { session, .. } => Some(*session),
        }
    }

    /// The form, while the modal is on screen
    pub fn form(&self) -> Option<&SettingsForm> {
        match self {
            Self::Open { form, .. } | Self::Closing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.form().is_some()
    }
}

/// Focusable controls of the settings form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Theme,
    Fullscreen,
    Notifications,
    Save,
    Cancel,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Theme,
        FormField::Fullscreen,
        FormField::Notifications,
        FormField::Save,
        FormField::Cancel,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editable copy of the settings while the modal is open
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub themes: Vec<String>,
    pub theme_index: usize,
    pub fullscreen: bool,
    pub notifications: bool,
    pub focus: FormField,
}

impl SettingsForm {
    /// Build a form from freshly fetched settings and themes
    ///
    /// The fetched theme is preselected when the catalog lists it, otherwise
    /// the catalog's current theme, otherwise the first entry.
    pub fn seed(settings: &Settings, catalog: &ThemeCatalog) -> Self {
        let themes = if catalog.themes.is_empty() {
            ThemeCatalog::fallback().themes
        } else {
            catalog.themes.clone()
        };

        let find = |name: &str| themes.iter().position(|t| t.eq_ignore_ascii_case(name));
        let theme_index = find(&settings.theme)
            .or_else(|| find(&catalog.current))
            .unwrap_or(0);

        Self {
            themes,
            theme_index,
            fullscreen: settings.fullscreen,
            notifications: settings.notifications,
            focus: FormField::default(),
        }
    }

    pub fn selected_theme(&self) -> &str {
        self.themes
            .get(self.theme_index)
            .map(String::as_str)
            .unwrap_or(DEFAULT_THEME)
    }

    pub fn cycle_theme(&mut self, forward: bool) {
        let len = self.themes.len();
        if len == 0 {
            return;
        }
        self.theme_index = if forward {
            (self.theme_index + 1) % len
        } else {
            (self.theme_index + len - 1) % len
        };
    }

    /// Left/Right on the focused control
    pub fn adjust_focused(&mut self, forward: bool) {
        match self.focus {
            FormField::Theme => self.cycle_theme(forward),
            FormField::Fullscreen => self.fullscreen = !self.fullscreen,
            FormField::Notifications => self.notifications = !self.notifications,
            FormField::Save | FormField::Cancel => {}
        }
    }

    /// The values a save will write
    pub fn edited(&self) -> Settings {
        Settings {
            theme: self.selected_theme().to_string(),
            fullscreen: self.fullscreen,
            notifications: self.notifications,
        }
    }
}
