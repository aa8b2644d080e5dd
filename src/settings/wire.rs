//! JSON envelopes returned by the settings service.
//!
//! Every response carries `success` and, on failure, an `error` string.
//! `Envelope::into_payload` turns one into the payload or a `SettingsError`.

use serde::Deserialize;

use super::{SettingValue, Settings, SettingsError, SettingsResult, ThemeCatalog, UpdateAck};

/// A response envelope that can be unwrapped into its payload
pub trait Envelope: for<'de> Deserialize<'de> {
    type Payload;

    fn into_payload(self) -> SettingsResult<Self::Payload>;

    /// Error message carried by the envelope, if any
    fn error_message(&self) -> Option<&str>;
}

fn application_error(error: Option<String>) -> SettingsError {
    SettingsError::Application(error.unwrap_or_else(|| "request was not successful".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct AllSettingsResponse {
    pub success: bool,
    pub settings: Option<Settings>,
    pub error: Option<String>,
}

impl Envelope for AllSettingsResponse {
    type Payload = Settings;

    fn into_payload(self) -> SettingsResult<Settings> {
        if !self.success {
            return Err(application_error(self.error));
        }
        self.settings.ok_or(SettingsError::MissingField("settings"))
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct OneSettingResponse {
    pub success: bool,
    pub value: Option<SettingValue>,
    pub error: Option<String>,
}

impl Envelope for OneSettingResponse {
    type Payload = SettingValue;

    fn into_payload(self) -> SettingsResult<SettingValue> {
        if !self.success {
            return Err(application_error(self.error));
        }
        self.value.ok_or(SettingsError::MissingField("value"))
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub ack: UpdateAck,
    pub error: Option<String>,
}

impl Envelope for UpdateResponse {
    type Payload = UpdateAck;

    fn into_payload(self) -> SettingsResult<UpdateAck> {
        if !self.success {
            return Err(application_error(self.error));
        }
        Ok(self.ack)
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct ThemesResponse {
    pub success: bool,
    pub themes: Option<Vec<String>>,
    pub current: Option<String>,
    pub error: Option<String>,
}

impl Envelope for ThemesResponse {
    type Payload = ThemeCatalog;

    fn into_payload(self) -> SettingsResult<ThemeCatalog> {
        if !self.success {
            return Err(application_error(self.error));
        }
        let themes = self.themes.ok_or(SettingsError::MissingField("themes"))?;
        let current = self.current.ok_or(SettingsError::MissingField("current"))?;
        Ok(ThemeCatalog { themes, current })
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Body of a PUT request
#[derive(Debug, serde::Serialize)]
pub struct UpdateRequest<'a> {
    pub value: &'a SettingValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<E: Envelope>(json: &str) -> SettingsResult<E::Payload> {
        serde_json::from_str::<E>(json).unwrap().into_payload()
    }

    #[test]
    fn test_all_settings_success() {
        let settings = parse::<AllSettingsResponse>(
            r#"{"success":true,"settings":{"theme":"orange","fullscreen":true,"notifications":false},"availableThemes":["dark","orange"]}"#,
        )
        .unwrap();
        assert_eq!(settings.theme, "orange");
        assert!(settings.fullscreen);
        assert!(!settings.notifications);
    }

    #[test]
    fn test_all_settings_unsuccessful_envelope() {
        let result = parse::<AllSettingsResponse>(r#"{"success":false,"error":"store offline"}"#);
        assert_eq!(result, Err(SettingsError::Application("store offline".to_string())));
    }

    #[test]
    fn test_all_settings_success_without_payload() {
        let result = parse::<AllSettingsResponse>(r#"{"success":true}"#);
        assert_eq!(result, Err(SettingsError::MissingField("settings")));
    }

    #[test]
    fn test_one_setting_flag_and_text() {
        let value = parse::<OneSettingResponse>(r#"{"success":true,"key":"fullscreen","value":true}"#);
        assert_eq!(value, Ok(SettingValue::Flag(true)));
        let value = parse::<OneSettingResponse>(r#"{"success":true,"key":"theme","value":"dark"}"#);
        assert_eq!(value, Ok(SettingValue::Text("dark".into())));
    }

    #[test]
    fn test_update_ack_fields() {
        let ack = parse::<UpdateResponse>(
            r#"{"success":true,"key":"theme","oldValue":"dark","newValue":"orange","message":"Setting updated successfully"}"#,
        )
        .unwrap();
        assert_eq!(ack.key.as_deref(), Some("theme"));
        assert_eq!(ack.new_value, Some(serde_json::json!("orange")));
        assert_eq!(ack.message.as_deref(), Some("Setting updated successfully"));
    }

    #[test]
    fn test_update_failure_without_error_text() {
        let result = parse::<UpdateResponse>(r#"{"success":false}"#);
        assert!(matches!(result, Err(SettingsError::Application(_))));
    }

    #[test]
    fn test_themes_response() {
        let catalog = parse::<ThemesResponse>(
            r#"{"success":true,"themes":["dark","orange","night"],"current":"night"}"#,
        )
        .unwrap();
        assert_eq!(catalog.themes.len(), 3);
        assert_eq!(catalog.current, "night");
    }

    #[test]
    fn test_themes_response_missing_current() {
        let result = parse::<ThemesResponse>(r#"{"success":true,"themes":["dark"],"current":null}"#);
        assert_eq!(result, Err(SettingsError::MissingField("current")));
    }

    #[test]
    fn test_update_request_body() {
        let value = SettingValue::Flag(false);
        let body = serde_json::to_string(&UpdateRequest { value: &value }).unwrap();
        assert_eq!(body, r#"{"value":false}"#);
    }
}
