pub mod config;
pub mod settings;

use anyhow::{anyhow, Result};

use crate::settings::SettingKey;

/// Parse a setting key given on the command line
///
/// Accepts the wire names `theme`, `fullscreen` and `notifications`,
/// case-insensitively.
pub fn parse_setting_key(raw: &str) -> Result<SettingKey> {
    raw.to_lowercase().parse::<SettingKey>().map_err(|e| anyhow!(e))
}
