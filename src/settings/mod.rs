//! Remote settings: data model, wire envelopes and the HTTP client.

pub mod client;
pub mod error;
pub mod provider;
pub mod wire;

pub use client::SettingsClient;
pub use error::{SettingsError, SettingsResult};
pub use provider::SettingsProvider;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme applied when nothing else is known
pub const DEFAULT_THEME: &str = "dark";

/// Themes offered when the service cannot be asked
pub const FALLBACK_THEMES: [&str; 2] = ["dark", "orange"];

/// Current settings as stored by the settings service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: String,
    pub fullscreen: bool,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            fullscreen: false,
            notifications: true,
        }
    }
}

/// Themes the service knows about plus the one currently selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    pub themes: Vec<String>,
    pub current: String,
}

impl ThemeCatalog {
    pub fn fallback() -> Self {
        Self {
            themes: FALLBACK_THEMES.iter().map(|t| t.to_string()).collect(),
            current: DEFAULT_THEME.to_string(),
        }
    }
}

/// Keys accepted by the settings service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Theme,
    Fullscreen,
    Notifications,
}

impl SettingKey {
    /// Keys in the order a save writes them
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Theme,
        SettingKey::Fullscreen,
        SettingKey::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Fullscreen => "fullscreen",
            Self::Notifications => "notifications",
        }
    }

    /// Parse a raw command-line value into the type this key expects
    pub fn parse_value(&self, raw: &str) -> Result<SettingValue, String> {
        match self {
            Self::Theme => Ok(SettingValue::Text(raw.to_string())),
            Self::Fullscreen | Self::Notifications => match raw.to_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(SettingValue::Flag(true)),
                "false" | "off" | "no" | "0" => Ok(SettingValue::Flag(false)),
                _ => Err(format!("'{}' expects a boolean, got '{}'", self, raw)),
            },
        }
    }

    /// Read this key's value out of a full settings snapshot
    pub fn value_in(&self, settings: &Settings) -> SettingValue {
        match self {
            Self::Theme => SettingValue::Text(settings.theme.clone()),
            Self::Fullscreen => SettingValue::Flag(settings.fullscreen),
            Self::Notifications => SettingValue::Flag(settings.notifications),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "theme" => Ok(Self::Theme),
            "fullscreen" => Ok(Self::Fullscreen),
            "notifications" => Ok(Self::Notifications),
            other => Err(format!("Unknown setting: {}", other)),
        }
    }
}

/// A single setting value as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", b),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Acknowledgment returned by a successful update
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub key: Option<String>,
    pub old_value: Option<serde_json::Value>,
    pub new_value: Option<serde_json::Value>,
    pub message: Option<String>,
}
