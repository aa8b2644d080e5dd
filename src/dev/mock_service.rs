/// Mock settings service for development and testing
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::settings::{
    SettingKey, SettingValue, Settings, SettingsError, SettingsProvider, SettingsResult,
    ThemeCatalog, UpdateAck, FALLBACK_THEMES,
};

/// A call received by the mock, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    FetchAll,
    FetchOne(SettingKey),
    Update(SettingKey, SettingValue),
    FetchThemes,
}

#[derive(Debug)]
struct MockInner {
    settings: Settings,
    themes: Vec<String>,
    unreachable: bool,
    failing_updates: HashSet<SettingKey>,
    calls: Vec<MockCall>,
}

/// In-memory settings store that behaves like the real service
///
/// Values are validated the way the service does: themes must be one of the
/// known themes (case-insensitive) and flags must be booleans.
pub struct MockSettingsService {
    inner: Mutex<MockInner>,
}

impl MockSettingsService {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        info!("MockSettingsService: Starting with {:?}", settings);
        Self {
            inner: Mutex::new(MockInner {
                settings,
                themes: FALLBACK_THEMES.iter().map(|t| t.to_string()).collect(),
                unreachable: false,
                failing_updates: HashSet::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// A service that fails every request as if it were down
    pub fn unreachable() -> Self {
        let service = Self::new();
        service.set_unreachable(true);
        service
    }

    pub fn with_themes(self, themes: &[&str]) -> Self {
        self.lock().themes = themes.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.lock().unreachable = unreachable;
    }

    /// Make updates of one key fail with a network error
    pub fn fail_updates_for(&self, key: SettingKey) {
        self.lock().failing_updates.insert(key);
    }

    pub fn settings(&self) -> Settings {
        self.lock().settings.clone()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockInner> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: MockCall) -> std::sync::MutexGuard<'_, MockInner> {
        let mut inner = self.lock();
        inner.calls.push(call);
        inner
    }
}

impl Default for MockSettingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn connection_refused() -> SettingsError {
    SettingsError::Network("connection refused".to_string())
}

#[async_trait]
impl SettingsProvider for MockSettingsService {
    async fn fetch_all(&self) -> SettingsResult<Settings> {
        let inner = self.record(MockCall::FetchAll);
        if inner.unreachable {
            return Err(connection_refused());
        }
        Ok(inner.settings.clone())
    }

    async fn fetch_one(&self, key: SettingKey) -> SettingsResult<SettingValue> {
        let inner = self.record(MockCall::FetchOne(key));
        if inner.unreachable {
            return Err(connection_refused());
        }
        Ok(key.value_in(&inner.settings))
    }

    async fn update(&self, key: SettingKey, value: SettingValue) -> SettingsResult<UpdateAck> {
        let mut inner = self.record(MockCall::Update(key, value.clone()));
        if inner.unreachable || inner.failing_updates.contains(&key) {
            return Err(connection_refused());
        }

        let old_value = key.value_in(&inner.settings);
        match (key, &value) {
            (SettingKey::Theme, SettingValue::Text(theme))
                if inner.themes.iter().any(|t| t.eq_ignore_ascii_case(theme)) =>
            {
                inner.settings.theme = theme.clone();
            }
            (SettingKey::Fullscreen, SettingValue::Flag(on)) => inner.settings.fullscreen = *on,
            (SettingKey::Notifications, SettingValue::Flag(on)) => {
                inner.settings.notifications = *on
            }
            _ => {
                return Err(SettingsError::HttpStatus {
                    status: 400,
                    message: Some(format!("Invalid value for setting: {}", key)),
                })
            }
        }

        info!("MockSettingsService: {} = {}", key, value);
        Ok(UpdateAck {
            key: Some(key.to_string()),
            old_value: serde_json::to_value(&old_value).ok(),
            new_value: serde_json::to_value(&value).ok(),
            message: Some("Setting updated successfully".to_string()),
        })
    }

    async fn fetch_theme_catalog(&self) -> ThemeCatalog {
        let inner = self.record(MockCall::FetchThemes);
        if inner.unreachable {
            return ThemeCatalog::fallback();
        }
        ThemeCatalog {
            themes: inner.themes.clone(),
            current: inner.settings.theme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_changes_stored_value() {
        let service = MockSettingsService::new();

        service
            .update(SettingKey::Theme, SettingValue::Text("orange".into()))
            .await
            .unwrap();

        assert_eq!(service.settings().theme, "orange");
        assert_eq!(service.fetch_theme_catalog().await.current, "orange");
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_theme_and_wrong_type() {
        let service = MockSettingsService::new();

        let unknown = service
            .update(SettingKey::Theme, SettingValue::Text("neon".into()))
            .await;
        let wrong_type = service
            .update(SettingKey::Fullscreen, SettingValue::Text("yes".into()))
            .await;

        assert!(matches!(unknown, Err(SettingsError::HttpStatus { status: 400, .. })));
        assert!(matches!(wrong_type, Err(SettingsError::HttpStatus { status: 400, .. })));
        assert_eq!(service.settings(), Settings::default());
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let service = MockSettingsService::unreachable();

        assert!(service.fetch_all().await.is_err());
        assert!(service.fetch_one(SettingKey::Theme).await.is_err());
        assert_eq!(service.fetch_theme_catalog().await, ThemeCatalog::fallback());
    }

    #[tokio::test]
    async fn test_calls_are_recorded_in_order() {
        let service = MockSettingsService::new();
        service.fail_updates_for(SettingKey::Fullscreen);

        let _ = service.fetch_all().await;
        let failed = service.update(SettingKey::Fullscreen, SettingValue::Flag(true)).await;

        assert!(failed.is_err());
        assert_eq!(
            service.calls(),
            vec![
                MockCall::FetchAll,
                MockCall::Update(SettingKey::Fullscreen, SettingValue::Flag(true)),
            ]
        );
    }
}
