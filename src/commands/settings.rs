use anyhow::{Context, Result};

use crate::commands::parse_setting_key;
use crate::settings::{
    SettingKey, SettingValue, Settings, SettingsProvider, ThemeCatalog, UpdateAck,
};

pub fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Settings\n");
    output.push_str(&format!("{}\n", "═".repeat(30)));
    for key in SettingKey::ALL {
        output.push_str(&format!("{:<15} {}\n", key.as_str(), key.value_in(settings)));
    }
    output
}

pub fn format_update(key: SettingKey, value: &SettingValue, ack: &UpdateAck) -> String {
    let mut output = match &ack.old_value {
        Some(old) => format!("{}: {} -> {}\n", key, display_json(old), value),
        None => format!("{}: {}\n", key, value),
    };
    if let Some(message) = &ack.message {
        output.push_str(&format!("{}\n", message));
    }
    output
}

/// List the themes, marking the current one
pub fn format_themes(catalog: &ThemeCatalog) -> String {
    let mut output = String::new();
    for theme in &catalog.themes {
        let marker = if theme.eq_ignore_ascii_case(&catalog.current) {
            "*"
        } else {
            " "
        };
        output.push_str(&format!("{} {}\n", marker, theme));
    }
    output
}

/// Strings print without their JSON quotes
fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn show(provider: &dyn SettingsProvider) -> Result<()> {
    let settings = provider
        .fetch_all()
        .await
        .context("Failed to fetch settings")?;

    print!("{}", format_settings(&settings));
    Ok(())
}

pub async fn get(provider: &dyn SettingsProvider, key: &str) -> Result<()> {
    let key = parse_setting_key(key)?;
    let value = provider
        .fetch_one(key)
        .await
        .with_context(|| format!("Failed to fetch {}", key))?;

    println!("{}", value);
    Ok(())
}

pub async fn set(provider: &dyn SettingsProvider, key: &str, raw_value: &str) -> Result<()> {
    let key = parse_setting_key(key)?;
    let value = key.parse_value(raw_value).map_err(anyhow::Error::msg)?;
    let ack = provider
        .update(key, value.clone())
        .await
        .with_context(|| format!("Failed to update {}", key))?;

    print!("{}", format_update(key, &value, &ack));
    Ok(())
}

/// Print the theme catalog; an unreachable service shows the built-in themes
pub async fn themes(provider: &dyn SettingsProvider) -> Result<()> {
    let catalog = provider.fetch_theme_catalog().await;
    print!("{}", format_themes(&catalog));
    Ok(())
}
