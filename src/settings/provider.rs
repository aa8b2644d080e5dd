/// Trait for talking to the settings service, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use super::{SettingKey, SettingValue, Settings, SettingsResult, ThemeCatalog, UpdateAck};

/// Settings service operations, implemented by both SettingsClient and MockSettingsService
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Get all current settings
    async fn fetch_all(&self) -> SettingsResult<Settings>;

    /// Get a single setting by key
    async fn fetch_one(&self, key: SettingKey) -> SettingsResult<SettingValue>;

    /// Store a new value for one key
    async fn update(&self, key: SettingKey, value: SettingValue) -> SettingsResult<UpdateAck>;

    /// Get the available themes
    ///
    /// Never fails: an unreachable service yields `ThemeCatalog::fallback()`.
    async fn fetch_theme_catalog(&self) -> ThemeCatalog;
}
